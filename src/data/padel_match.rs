use chrono::Utc;
use entity::sea_orm_active_enums::MatchStatus;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    IntoActiveModel, QueryFilter, QueryOrder,
};

use crate::model::{
    championship::{MatchUpdate, NewMatch},
    db::MatchModel,
    fixture::GeneratedMatch,
    match_result::{SetTally, Side},
};

pub struct MatchRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> MatchRepository<'a, C> {
    /// Creates a new instance of [`MatchRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a single pending match
    pub async fn create(
        &self,
        championship_id: i32,
        new_match: NewMatch,
    ) -> Result<MatchModel, DbErr> {
        let padel_match = entity::padel_match::ActiveModel {
            championship_id: ActiveValue::Set(championship_id),
            team1_id: ActiveValue::Set(new_match.team1_id),
            team2_id: ActiveValue::Set(new_match.team2_id),
            court_id: ActiveValue::Set(new_match.court_id),
            round: ActiveValue::Set(new_match.round),
            group_number: ActiveValue::Set(new_match.group_number),
            scheduled_date: ActiveValue::Set(new_match.scheduled_date),
            ..pending_match()
        };

        padel_match.insert(self.db).await
    }

    /// Inserts a generated schedule as pending matches, in schedule order
    ///
    /// Rows are inserted one at a time so the caller gets every persisted model back and an
    /// empty schedule is a no-op.
    pub async fn create_many_generated(
        &self,
        championship_id: i32,
        fixtures: &[GeneratedMatch],
    ) -> Result<Vec<MatchModel>, DbErr> {
        let mut created = Vec::with_capacity(fixtures.len());

        for fixture in fixtures {
            let padel_match = entity::padel_match::ActiveModel {
                championship_id: ActiveValue::Set(championship_id),
                team1_id: ActiveValue::Set(fixture.team1_id),
                team2_id: ActiveValue::Set(fixture.team2_id),
                round: ActiveValue::Set(fixture.round),
                group_number: ActiveValue::Set(fixture.group_number),
                ..pending_match()
            };

            created.push(padel_match.insert(self.db).await?);
        }

        Ok(created)
    }

    pub async fn get_by_id(&self, match_id: i32) -> Result<Option<MatchModel>, DbErr> {
        entity::prelude::PadelMatch::find_by_id(match_id)
            .one(self.db)
            .await
    }

    /// Gets every match of a championship ordered by round, group and ID
    pub async fn get_by_championship(&self, championship_id: i32) -> Result<Vec<MatchModel>, DbErr> {
        entity::prelude::PadelMatch::find()
            .filter(entity::padel_match::Column::ChampionshipId.eq(championship_id))
            .order_by_asc(entity::padel_match::Column::Round)
            .order_by_asc(entity::padel_match::Column::GroupNumber)
            .order_by_asc(entity::padel_match::Column::Id)
            .all(self.db)
            .await
    }

    /// Gets the finished matches of a championship in ID order
    pub async fn get_finished_by_championship(
        &self,
        championship_id: i32,
    ) -> Result<Vec<MatchModel>, DbErr> {
        entity::prelude::PadelMatch::find()
            .filter(entity::padel_match::Column::ChampionshipId.eq(championship_id))
            .filter(entity::padel_match::Column::Status.eq(MatchStatus::Finished))
            .order_by_asc(entity::padel_match::Column::Id)
            .all(self.db)
            .await
    }

    /// Deletes every match of a championship, their sets cascade
    pub async fn delete_by_championship(&self, championship_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::PadelMatch::delete_many()
            .filter(entity::padel_match::Column::ChampionshipId.eq(championship_id))
            .exec(self.db)
            .await
    }

    pub async fn delete_by_id(&self, match_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::PadelMatch::delete_by_id(match_id)
            .exec(self.db)
            .await
    }

    /// Stores a tallied result and marks the match finished
    pub async fn update_result(
        &self,
        padel_match: MatchModel,
        tally: &SetTally,
    ) -> Result<MatchModel, DbErr> {
        let winner_id = match tally.winner {
            Side::Team1 => padel_match.team1_id,
            Side::Team2 => padel_match.team2_id,
        };

        let mut padel_match = padel_match.into_active_model();
        padel_match.team1_sets = ActiveValue::Set(tally.team1_sets);
        padel_match.team2_sets = ActiveValue::Set(tally.team2_sets);
        padel_match.team1_games = ActiveValue::Set(tally.team1_games);
        padel_match.team2_games = ActiveValue::Set(tally.team2_games);
        padel_match.winner_id = ActiveValue::Set(Some(winner_id));
        padel_match.status = ActiveValue::Set(MatchStatus::Finished);

        padel_match.update(self.db).await
    }

    /// Applies a [`MatchUpdate`], leaving `None` fields untouched
    pub async fn update_details(
        &self,
        padel_match: MatchModel,
        update: MatchUpdate,
    ) -> Result<MatchModel, DbErr> {
        let mut padel_match = padel_match.into_active_model();

        if let Some(status) = update.status {
            padel_match.status = ActiveValue::Set(status);
        }
        if let Some(court_id) = update.court_id {
            padel_match.court_id = ActiveValue::Set(court_id);
        }
        if let Some(scheduled_date) = update.scheduled_date {
            padel_match.scheduled_date = ActiveValue::Set(scheduled_date);
        }

        padel_match.update(self.db).await
    }
}

fn pending_match() -> entity::padel_match::ActiveModel {
    entity::padel_match::ActiveModel {
        court_id: ActiveValue::Set(None),
        scheduled_date: ActiveValue::Set(None),
        status: ActiveValue::Set(MatchStatus::Pending),
        team1_sets: ActiveValue::Set(0),
        team2_sets: ActiveValue::Set(0),
        team1_games: ActiveValue::Set(0),
        team2_games: ActiveValue::Set(0),
        winner_id: ActiveValue::Set(None),
        created_at: ActiveValue::Set(Utc::now().naive_utc()),
        ..Default::default()
    }
}
