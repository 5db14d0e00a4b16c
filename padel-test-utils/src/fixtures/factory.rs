//! Factory functions for in-memory database models.
//!
//! These build models with standard test values and no database interaction, for unit tests
//! of pure computations.

use chrono::{NaiveDate, Utc};
use entity::sea_orm_active_enums::{ChampionshipFormat, ChampionshipStatus, MatchStatus};

use crate::model::{ChampionshipModel, MatchModel, TeamModel};

/// Create a mock championship model with ID 1, 3 points per win and none per loss.
pub fn mock_championship_model(format: ChampionshipFormat) -> ChampionshipModel {
    ChampionshipModel {
        id: 1,
        name: "Test Championship".to_string(),
        format,
        start_date: NaiveDate::from_ymd_opt(2025, 3, 1).unwrap_or_default(),
        end_date: None,
        num_groups: 1,
        points_win: 3,
        points_loss: 0,
        status: ChampionshipStatus::Active,
        created_at: Utc::now().naive_utc(),
    }
}

/// Create a mock team model of championship 1 named `Team {team_id}`.
pub fn mock_team_model(team_id: i32, group_number: i32) -> TeamModel {
    TeamModel {
        id: team_id,
        name: format!("Team {}", team_id),
        player1_name: format!("Player {}A", team_id),
        player2_name: format!("Player {}B", team_id),
        championship_id: 1,
        group_number,
        created_at: Utc::now().naive_utc(),
    }
}

/// Create a finished match model of championship 1 from its set scores.
///
/// Set and game totals are summed from `sets` (team1 games, team2 games). The winner is the
/// side with more sets, or `None` when the sets are split evenly.
pub fn mock_finished_match_model(
    match_id: i32,
    team1_id: i32,
    team2_id: i32,
    sets: &[(i32, i32)],
) -> MatchModel {
    let team1_sets = sets.iter().filter(|(t1, t2)| t1 > t2).count() as i32;
    let team2_sets = sets.iter().filter(|(t1, t2)| t2 > t1).count() as i32;

    let winner_id = match team1_sets.cmp(&team2_sets) {
        std::cmp::Ordering::Greater => Some(team1_id),
        std::cmp::Ordering::Less => Some(team2_id),
        std::cmp::Ordering::Equal => None,
    };

    MatchModel {
        id: match_id,
        championship_id: 1,
        team1_id,
        team2_id,
        court_id: None,
        round: 1,
        group_number: 1,
        scheduled_date: None,
        status: MatchStatus::Finished,
        team1_sets,
        team2_sets,
        team1_games: sets.iter().map(|(t1, _)| t1).sum(),
        team2_games: sets.iter().map(|(_, t2)| t2).sum(),
        winner_id,
        created_at: Utc::now().naive_utc(),
    }
}
