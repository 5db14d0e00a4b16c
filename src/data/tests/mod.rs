use chrono::NaiveDate;
use entity::sea_orm_active_enums::{ChampionshipFormat, ChampionshipStatus, MatchStatus};
use padel_test_utils::prelude::*;
use sea_orm::TransactionTrait;

use crate::{
    data::{
        championship::ChampionshipRepository, court::CourtRepository,
        match_set::MatchSetRepository, padel_match::MatchRepository,
        standing::StandingRepository, team::TeamRepository,
    },
    model::{
        championship::{MatchUpdate, NewChampionship, NewMatch, NewTeam},
        fixture::GeneratedMatch,
        match_result::{SetScore, SetTally, Side},
        standing::StandingCalculation,
    },
};
