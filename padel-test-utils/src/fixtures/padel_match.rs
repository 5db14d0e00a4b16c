use chrono::Utc;
use entity::sea_orm_active_enums::MatchStatus;
use sea_orm::{ActiveValue, EntityTrait};

use crate::{
    error::TestError,
    model::{MatchModel, MatchSetModel, TeamModel},
    TestContext,
};

impl TestContext {
    pub fn padel_match<'a>(&'a self) -> MatchFixtures<'a> {
        MatchFixtures { context: self }
    }
}

pub struct MatchFixtures<'a> {
    context: &'a TestContext,
}

impl<'a> MatchFixtures<'a> {
    /// Insert a pending round 1 match between two teams, in the first team's group.
    pub async fn insert_pending_match(
        &self,
        team1: &TeamModel,
        team2: &TeamModel,
    ) -> Result<MatchModel, TestError> {
        self.insert_match(team1, team2, MatchStatus::Pending, &[])
            .await
    }

    /// Insert a finished match with its sets.
    ///
    /// Totals are summed from `sets` (team1 games, team2 games) and the winner is the side
    /// with more sets, or nobody when they are split evenly.
    pub async fn insert_finished_match(
        &self,
        team1: &TeamModel,
        team2: &TeamModel,
        sets: &[(i32, i32)],
    ) -> Result<(MatchModel, Vec<MatchSetModel>), TestError> {
        let padel_match = self
            .insert_match(team1, team2, MatchStatus::Finished, sets)
            .await?;

        let mut match_sets = Vec::with_capacity(sets.len());
        for (set_number, (team1_games, team2_games)) in (1..).zip(sets) {
            let match_set =
                entity::prelude::PadelMatchSet::insert(entity::padel_match_set::ActiveModel {
                    match_id: ActiveValue::Set(padel_match.id),
                    set_number: ActiveValue::Set(set_number),
                    team1_games: ActiveValue::Set(*team1_games),
                    team2_games: ActiveValue::Set(*team2_games),
                    created_at: ActiveValue::Set(Utc::now().naive_utc()),
                    ..Default::default()
                })
                .exec_with_returning(&self.context.db)
                .await?;

            match_sets.push(match_set);
        }

        Ok((padel_match, match_sets))
    }

    async fn insert_match(
        &self,
        team1: &TeamModel,
        team2: &TeamModel,
        status: MatchStatus,
        sets: &[(i32, i32)],
    ) -> Result<MatchModel, TestError> {
        let team1_sets = sets.iter().filter(|(t1, t2)| t1 > t2).count() as i32;
        let team2_sets = sets.iter().filter(|(t1, t2)| t2 > t1).count() as i32;
        let winner_id = if team1_sets > team2_sets {
            Some(team1.id)
        } else if team2_sets > team1_sets {
            Some(team2.id)
        } else {
            None
        };

        Ok(
            entity::prelude::PadelMatch::insert(entity::padel_match::ActiveModel {
                championship_id: ActiveValue::Set(team1.championship_id),
                team1_id: ActiveValue::Set(team1.id),
                team2_id: ActiveValue::Set(team2.id),
                court_id: ActiveValue::Set(None),
                round: ActiveValue::Set(1),
                group_number: ActiveValue::Set(team1.group_number),
                scheduled_date: ActiveValue::Set(None),
                status: ActiveValue::Set(status),
                team1_sets: ActiveValue::Set(team1_sets),
                team2_sets: ActiveValue::Set(team2_sets),
                team1_games: ActiveValue::Set(sets.iter().map(|(t1, _)| t1).sum()),
                team2_games: ActiveValue::Set(sets.iter().map(|(_, t2)| t2).sum()),
                winner_id: ActiveValue::Set(winner_id),
                created_at: ActiveValue::Set(Utc::now().naive_utc()),
                ..Default::default()
            })
            .exec_with_returning(&self.context.db)
            .await?,
        )
    }
}
