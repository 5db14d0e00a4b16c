use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum MatchError {
    #[error(
        "Set {set_number}: must have a winner, minimum 6 games (got {team1_games}-{team2_games})"
    )]
    InvalidSetResult {
        set_number: usize,
        team1_games: i32,
        team2_games: i32,
    },
    #[error("At least one set is required")]
    NoSets,
    #[error("A match has at most {max} sets, got {got}")]
    TooManySets { got: usize, max: usize },
    #[error("Match result is level at {0} sets each, a match must have a winner")]
    UndecidedMatch(i32),
    #[error("Team {0} cannot play against itself")]
    SameTeam(i32),
    #[error("Teams {team1_id} and {team2_id} do not belong to the same championship")]
    TeamsFromDifferentChampionships { team1_id: i32, team2_id: i32 },
    #[error("Group {group_number} is outside of the championship's 1..={num_groups} groups")]
    InvalidGroup { group_number: i32, num_groups: i32 },
}
