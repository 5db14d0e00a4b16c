use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::model::{db::MatchSetModel, match_result::SetScore};

pub struct MatchSetRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> MatchSetRepository<'a, C> {
    /// Creates a new instance of [`MatchSetRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts the sets of a match numbered from 1 in the given order
    pub async fn create_many(
        &self,
        match_id: i32,
        sets: &[SetScore],
    ) -> Result<Vec<MatchSetModel>, DbErr> {
        let now = Utc::now().naive_utc();
        let mut created = Vec::with_capacity(sets.len());

        for (set_number, set) in (1..).zip(sets) {
            let match_set = entity::padel_match_set::ActiveModel {
                match_id: ActiveValue::Set(match_id),
                set_number: ActiveValue::Set(set_number),
                team1_games: ActiveValue::Set(set.team1_games),
                team2_games: ActiveValue::Set(set.team2_games),
                created_at: ActiveValue::Set(now),
                ..Default::default()
            };

            created.push(match_set.insert(self.db).await?);
        }

        Ok(created)
    }

    pub async fn get_by_match(&self, match_id: i32) -> Result<Vec<MatchSetModel>, DbErr> {
        entity::prelude::PadelMatchSet::find()
            .filter(entity::padel_match_set::Column::MatchId.eq(match_id))
            .order_by_asc(entity::padel_match_set::Column::SetNumber)
            .all(self.db)
            .await
    }

    pub async fn delete_by_match(&self, match_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::PadelMatchSet::delete_many()
            .filter(entity::padel_match_set::Column::MatchId.eq(match_id))
            .exec(self.db)
            .await
    }
}
