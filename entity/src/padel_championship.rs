use sea_orm::entity::prelude::*;

use super::sea_orm_active_enums::{ChampionshipFormat, ChampionshipStatus};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "padel_championship")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub format: ChampionshipFormat,
    pub start_date: Date,
    pub end_date: Option<Date>,
    pub num_groups: i32,
    pub points_win: i32,
    pub points_loss: i32,
    pub status: ChampionshipStatus,
    pub created_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
