use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::model::db::{MatchModel, StandingModel, TeamModel};

/// A team's aggregated record while the table is being computed.
///
/// Never persisted as such; the standings service turns it into a [`StandingModel`] row once
/// the group order is known.
#[derive(Debug, Clone, PartialEq)]
pub struct StandingCalculation {
    pub team_id: i32,
    pub group_number: i32,
    pub points: i32,
    pub matches_played: i32,
    pub matches_won: i32,
    pub matches_lost: i32,
    pub sets_won: i32,
    pub sets_lost: i32,
    pub games_won: i32,
    pub games_lost: i32,
    /// Direct encounters keyed by opponent team id, in processing order.
    pub head_to_head: HashMap<i32, Vec<MatchModel>>,
}

impl StandingCalculation {
    pub fn new(team_id: i32, group_number: i32) -> Self {
        Self {
            team_id,
            group_number,
            points: 0,
            matches_played: 0,
            matches_won: 0,
            matches_lost: 0,
            sets_won: 0,
            sets_lost: 0,
            games_won: 0,
            games_lost: 0,
            head_to_head: HashMap::new(),
        }
    }

    pub fn game_difference(&self) -> i32 {
        self.games_won - self.games_lost
    }

    pub fn set_difference(&self) -> i32 {
        self.sets_won - self.sets_lost
    }
}

/// A persisted standing joined with the team's display attributes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StandingWithTeam {
    pub championship_id: i32,
    pub team_id: i32,
    pub team_name: String,
    pub player1_name: String,
    pub player2_name: String,
    pub group_number: i32,
    pub position: i32,
    pub points: i32,
    pub matches_played: i32,
    pub matches_won: i32,
    pub matches_lost: i32,
    pub sets_won: i32,
    pub sets_lost: i32,
    pub games_won: i32,
    pub games_lost: i32,
}

impl StandingWithTeam {
    pub fn new(standing: StandingModel, team: TeamModel) -> Self {
        Self {
            championship_id: standing.championship_id,
            team_id: standing.team_id,
            team_name: team.name,
            player1_name: team.player1_name,
            player2_name: team.player2_name,
            group_number: standing.group_number,
            position: standing.position,
            points: standing.points,
            matches_played: standing.matches_played,
            matches_won: standing.matches_won,
            matches_lost: standing.matches_lost,
            sets_won: standing.sets_won,
            sets_lost: standing.sets_lost,
            games_won: standing.games_won,
            games_lost: standing.games_lost,
        }
    }
}
