use serde::{Deserialize, Serialize};

use crate::model::db::{MatchModel, MatchSetModel};

/// Games won by each side in one set, as submitted by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetScore {
    pub team1_games: i32,
    pub team2_games: i32,
}

impl SetScore {
    pub fn new(team1_games: i32, team2_games: i32) -> Self {
        Self {
            team1_games,
            team2_games,
        }
    }
}

/// Which side of a match won.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Team1,
    Team2,
}

/// Totals of a validated list of sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SetTally {
    pub team1_sets: i32,
    pub team2_sets: i32,
    pub team1_games: i32,
    pub team2_games: i32,
    pub winner: Side,
}

/// A match together with its sets ordered by set number.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchWithSets {
    pub padel_match: MatchModel,
    pub sets: Vec<MatchSetModel>,
}
