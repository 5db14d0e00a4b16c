use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::model::{
    db::{StandingModel, TeamModel},
    standing::StandingCalculation,
};

pub struct StandingRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> StandingRepository<'a, C> {
    /// Creates a new instance of [`StandingRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Persists a computed standing at the given 1-based position within its group
    pub async fn create(
        &self,
        championship_id: i32,
        standing: &StandingCalculation,
        position: i32,
    ) -> Result<StandingModel, DbErr> {
        let standing = entity::padel_standing::ActiveModel {
            championship_id: ActiveValue::Set(championship_id),
            team_id: ActiveValue::Set(standing.team_id),
            group_number: ActiveValue::Set(standing.group_number),
            points: ActiveValue::Set(standing.points),
            matches_played: ActiveValue::Set(standing.matches_played),
            matches_won: ActiveValue::Set(standing.matches_won),
            matches_lost: ActiveValue::Set(standing.matches_lost),
            sets_won: ActiveValue::Set(standing.sets_won),
            sets_lost: ActiveValue::Set(standing.sets_lost),
            games_won: ActiveValue::Set(standing.games_won),
            games_lost: ActiveValue::Set(standing.games_lost),
            position: ActiveValue::Set(position),
            updated_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        standing.insert(self.db).await
    }

    pub async fn delete_by_championship(&self, championship_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::PadelStanding::delete_many()
            .filter(entity::padel_standing::Column::ChampionshipId.eq(championship_id))
            .exec(self.db)
            .await
    }

    /// Gets a championship's standings joined with their team, ordered by group then position
    pub async fn get_with_team_by_championship(
        &self,
        championship_id: i32,
    ) -> Result<Vec<(StandingModel, Option<TeamModel>)>, DbErr> {
        entity::prelude::PadelStanding::find()
            .filter(entity::padel_standing::Column::ChampionshipId.eq(championship_id))
            .find_also_related(entity::prelude::PadelTeam)
            .order_by_asc(entity::padel_standing::Column::GroupNumber)
            .order_by_asc(entity::padel_standing::Column::Position)
            .all(self.db)
            .await
    }
}
