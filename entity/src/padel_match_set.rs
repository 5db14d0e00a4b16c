use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "padel_match_set")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub match_id: i32,
    pub set_number: i32,
    pub team1_games: i32,
    pub team2_games: i32,
    pub created_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::padel_match::Entity",
        from = "Column::MatchId",
        to = "super::padel_match::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    PadelMatch,
}

impl Related<super::padel_match::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PadelMatch.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
