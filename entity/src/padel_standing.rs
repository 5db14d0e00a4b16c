use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "padel_standing")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub championship_id: i32,
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
    pub position: i32,
    pub updated_at: DateTime,
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
        belongs_to = "super::padel_team::Entity",
        from = "Column::TeamId",
        to = "super::padel_team::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    PadelTeam,
}

impl Related<super::padel_championship::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PadelChampionship.def()
    }
}

impl Related<super::padel_team::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PadelTeam.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
