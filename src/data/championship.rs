use chrono::Utc;
use entity::sea_orm_active_enums::ChampionshipStatus;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, EntityTrait, QueryOrder, QuerySelect,
};

use crate::model::{championship::NewChampionship, db::ChampionshipModel};

pub struct ChampionshipRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ChampionshipRepository<'a, C> {
    /// Creates a new instance of [`ChampionshipRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a championship in `draft` status
    pub async fn create(&self, championship: NewChampionship) -> Result<ChampionshipModel, DbErr> {
        let championship = entity::padel_championship::ActiveModel {
            name: ActiveValue::Set(championship.name),
            format: ActiveValue::Set(championship.format),
            start_date: ActiveValue::Set(championship.start_date),
            end_date: ActiveValue::Set(championship.end_date),
            num_groups: ActiveValue::Set(championship.num_groups),
            points_win: ActiveValue::Set(championship.points_win),
            points_loss: ActiveValue::Set(championship.points_loss),
            status: ActiveValue::Set(ChampionshipStatus::Draft),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        championship.insert(self.db).await
    }

    pub async fn get_by_id(&self, championship_id: i32) -> Result<Option<ChampionshipModel>, DbErr> {
        entity::prelude::PadelChampionship::find_by_id(championship_id)
            .one(self.db)
            .await
    }

    /// Returns the IDs of every championship, oldest first
    pub async fn get_all_ids(&self) -> Result<Vec<i32>, DbErr> {
        entity::prelude::PadelChampionship::find()
            .select_only()
            .column(entity::padel_championship::Column::Id)
            .order_by_asc(entity::padel_championship::Column::Id)
            .into_tuple::<i32>()
            .all(self.db)
            .await
    }
}
