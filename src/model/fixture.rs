use serde::{Deserialize, Serialize};

use crate::model::db::TeamModel;

/// The slice of a team the fixture generator needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixtureTeam {
    pub id: i32,
    pub group_number: i32,
}

impl From<&TeamModel> for FixtureTeam {
    fn from(team: &TeamModel) -> Self {
        Self {
            id: team.id,
            group_number: team.group_number,
        }
    }
}

/// One pairing of a round-robin schedule, not yet persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedMatch {
    pub team1_id: i32,
    pub team2_id: i32,
    /// 1-based round within the group.
    pub round: i32,
    pub group_number: i32,
}
