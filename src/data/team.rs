use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};

use crate::model::{championship::NewTeam, db::TeamModel};

pub struct TeamRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> TeamRepository<'a, C> {
    /// Creates a new instance of [`TeamRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Registers a team for a championship
    ///
    /// Fails with a foreign key violation if the championship does not exist.
    pub async fn create(&self, championship_id: i32, team: NewTeam) -> Result<TeamModel, DbErr> {
        let team = entity::padel_team::ActiveModel {
            name: ActiveValue::Set(team.name),
            player1_name: ActiveValue::Set(team.player1_name),
            player2_name: ActiveValue::Set(team.player2_name),
            championship_id: ActiveValue::Set(championship_id),
            group_number: ActiveValue::Set(team.group_number),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        team.insert(self.db).await
    }

    pub async fn get_by_id(&self, team_id: i32) -> Result<Option<TeamModel>, DbErr> {
        entity::prelude::PadelTeam::find_by_id(team_id)
            .one(self.db)
            .await
    }

    /// Gets the teams with the provided IDs, missing IDs are silently absent from the result
    pub async fn get_many_by_ids(&self, team_ids: &[i32]) -> Result<Vec<TeamModel>, DbErr> {
        entity::prelude::PadelTeam::find()
            .filter(entity::padel_team::Column::Id.is_in(team_ids.iter().copied()))
            .order_by_asc(entity::padel_team::Column::Id)
            .all(self.db)
            .await
    }

    /// Gets every team of a championship in registration order
    ///
    /// The order is significant: fixture generation keeps it within each group and fully tied
    /// standings keep it too.
    pub async fn get_many_by_championship(
        &self,
        championship_id: i32,
    ) -> Result<Vec<TeamModel>, DbErr> {
        entity::prelude::PadelTeam::find()
            .filter(entity::padel_team::Column::ChampionshipId.eq(championship_id))
            .order_by_asc(entity::padel_team::Column::Id)
            .all(self.db)
            .await
    }
}
