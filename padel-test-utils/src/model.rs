//! Database model type aliases for test utilities.
//!
//! These aliases match those in the main padel league crate so fixtures and tests read the
//! same way.

pub type ChampionshipModel = entity::padel_championship::Model;

pub type CourtModel = entity::padel_court::Model;

pub type TeamModel = entity::padel_team::Model;

pub type MatchModel = entity::padel_match::Model;

pub type MatchSetModel = entity::padel_match_set::Model;

pub type StandingModel = entity::padel_standing::Model;
