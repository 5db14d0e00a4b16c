use sea_orm::entity::prelude::*;

use super::sea_orm_active_enums::MatchStatus;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "padel_match")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub championship_id: i32,
    pub team1_id: i32,
    pub team2_id: i32,
    pub court_id: Option<i32>,
    pub round: i32,
    pub group_number: i32,
    pub scheduled_date: Option<DateTime>,
    pub status: MatchStatus,
    pub team1_sets: i32,
    pub team2_sets: i32,
    pub team1_games: i32,
    pub team2_games: i32,
    pub winner_id: Option<i32>,
    pub created_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::padel_championship::Entity",
        from = "Column::ChampionshipId",
        to = "super::padel_championship::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    PadelChampionship,
    #[sea_orm(
        belongs_to = "super::padel_court::Entity",
        from = "Column::CourtId",
        to = "super::padel_court::Column::Id",
        on_update = "NoAction",
        on_delete = "SetNull"
    )]
    PadelCourt,
    #[sea_orm(
        belongs_to = "super::padel_team::Entity",
        from = "Column::Team1Id",
        to = "super::padel_team::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    Team1,
    #[sea_orm(
        belongs_to = "super::padel_team::Entity",
        from = "Column::Team2Id",
        to = "super::padel_team::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    Team2,
    #[sea_orm(
        belongs_to = "super::padel_team::Entity",
        from = "Column::WinnerId",
        to = "super::padel_team::Column::Id",
        on_update = "NoAction",
        on_delete = "SetNull"
    )]
    Winner,
}

impl Related<super::padel_championship::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PadelChampionship.def()
    }
}

impl Related<super::padel_court::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PadelCourt.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
