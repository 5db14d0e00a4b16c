use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};

use crate::model::db::CourtModel;

pub struct CourtRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CourtRepository<'a, C> {
    /// Creates a new instance of [`CourtRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates an active court
    pub async fn create(&self, name: String) -> Result<CourtModel, DbErr> {
        let court = entity::padel_court::ActiveModel {
            name: ActiveValue::Set(name),
            is_active: ActiveValue::Set(true),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        court.insert(self.db).await
    }

    pub async fn get_by_id(&self, court_id: i32) -> Result<Option<CourtModel>, DbErr> {
        entity::prelude::PadelCourt::find_by_id(court_id)
            .one(self.db)
            .await
    }

    /// Gets all active courts ordered by name
    pub async fn get_active(&self) -> Result<Vec<CourtModel>, DbErr> {
        entity::prelude::PadelCourt::find()
            .filter(entity::padel_court::Column::IsActive.eq(true))
            .order_by_asc(entity::padel_court::Column::Name)
            .all(self.db)
            .await
    }
}
