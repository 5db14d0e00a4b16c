use chrono::{NaiveDate, Utc};
use entity::sea_orm_active_enums::{ChampionshipFormat, ChampionshipStatus};
use sea_orm::{ActiveValue, EntityTrait};

use crate::{
    error::TestError,
    model::{ChampionshipModel, CourtModel, TeamModel},
    TestContext,
};

impl TestContext {
    pub fn championship<'a>(&'a self) -> ChampionshipFixtures<'a> {
        ChampionshipFixtures { context: self }
    }
}

pub struct ChampionshipFixtures<'a> {
    context: &'a TestContext,
}

impl<'a> ChampionshipFixtures<'a> {
    /// Insert an active single-group championship awarding 3 points per win.
    pub async fn insert_mock_championship(
        &self,
        format: ChampionshipFormat,
    ) -> Result<ChampionshipModel, TestError> {
        self.insert_championship(format, 1, 3, 0).await
    }

    /// Insert an active championship with custom groups and scoring.
    pub async fn insert_championship(
        &self,
        format: ChampionshipFormat,
        num_groups: i32,
        points_win: i32,
        points_loss: i32,
    ) -> Result<ChampionshipModel, TestError> {
        Ok(entity::prelude::PadelChampionship::insert(
            entity::padel_championship::ActiveModel {
                name: ActiveValue::Set("Test Championship".to_string()),
                format: ActiveValue::Set(format),
                start_date: ActiveValue::Set(
                    NaiveDate::from_ymd_opt(2025, 3, 1).unwrap_or_default(),
                ),
                end_date: ActiveValue::Set(None),
                num_groups: ActiveValue::Set(num_groups),
                points_win: ActiveValue::Set(points_win),
                points_loss: ActiveValue::Set(points_loss),
                status: ActiveValue::Set(ChampionshipStatus::Active),
                created_at: ActiveValue::Set(Utc::now().naive_utc()),
                ..Default::default()
            },
        )
        .exec_with_returning(&self.context.db)
        .await?)
    }

    pub async fn insert_mock_team(
        &self,
        championship_id: i32,
        name: &str,
        group_number: i32,
    ) -> Result<TeamModel, TestError> {
        Ok(
            entity::prelude::PadelTeam::insert(entity::padel_team::ActiveModel {
                name: ActiveValue::Set(name.to_string()),
                player1_name: ActiveValue::Set(format!("{} Drive", name)),
                player2_name: ActiveValue::Set(format!("{} Reves", name)),
                championship_id: ActiveValue::Set(championship_id),
                group_number: ActiveValue::Set(group_number),
                created_at: ActiveValue::Set(Utc::now().naive_utc()),
                ..Default::default()
            })
            .exec_with_returning(&self.context.db)
            .await?,
        )
    }

    pub async fn insert_mock_court(
        &self,
        name: &str,
        is_active: bool,
    ) -> Result<CourtModel, TestError> {
        Ok(
            entity::prelude::PadelCourt::insert(entity::padel_court::ActiveModel {
                name: ActiveValue::Set(name.to_string()),
                is_active: ActiveValue::Set(is_active),
                created_at: ActiveValue::Set(Utc::now().naive_utc()),
                ..Default::default()
            })
            .exec_with_returning(&self.context.db)
            .await?,
        )
    }
}
