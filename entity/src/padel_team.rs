use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "padel_team")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub player1_name: String,
    pub player2_name: String,
    pub championship_id: i32,
    pub group_number: i32,
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
}

impl Related<super::padel_championship::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PadelChampionship.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
