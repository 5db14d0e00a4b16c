use chrono::NaiveDate;
use entity::sea_orm_active_enums::ChampionshipFormat;

/// Championship creation parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewChampionship {
    pub name: String,
    pub format: ChampionshipFormat,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub num_groups: i32,
    pub points_win: i32,
    pub points_loss: i32,
}

impl NewChampionship {
    /// A single-group championship awarding 3 points per win and none per loss.
    pub fn new(name: impl Into<String>, format: ChampionshipFormat, start_date: NaiveDate) -> Self {
        Self {
            name: name.into(),
            format,
            start_date,
            end_date: None,
            num_groups: 1,
            points_win: 3,
            points_loss: 0,
        }
    }
}

/// Team registration parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTeam {
    pub name: String,
    pub player1_name: String,
    pub player2_name: String,
    pub group_number: i32,
}

/// Parameters of a manually created match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewMatch {
    pub team1_id: i32,
    pub team2_id: i32,
    pub court_id: Option<i32>,
    pub round: i32,
    pub group_number: i32,
    pub scheduled_date: Option<chrono::NaiveDateTime>,
}

/// Changes to a match's scheduling details. `None` leaves a field as it is.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatchUpdate {
    pub status: Option<entity::sea_orm_active_enums::MatchStatus>,
    /// `Some(None)` removes the court assignment.
    pub court_id: Option<Option<i32>>,
    /// `Some(None)` clears the schedule.
    pub scheduled_date: Option<Option<chrono::NaiveDateTime>>,
}
