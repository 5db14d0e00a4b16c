use sea_orm::DatabaseConnection;

use crate::{
    data::{
        championship::ChampionshipRepository, court::CourtRepository, team::TeamRepository,
    },
    error::{match_result::MatchError, not_found::NotFoundError, Error},
    model::{
        championship::{NewChampionship, NewTeam},
        db::{ChampionshipModel, CourtModel, TeamModel},
    },
};

pub struct ChampionshipService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ChampionshipService<'a> {
    /// Creates a new instance of [`ChampionshipService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a championship in `draft` status
    pub async fn create_championship(
        &self,
        championship: NewChampionship,
    ) -> Result<ChampionshipModel, Error> {
        let championship = ChampionshipRepository::new(self.db)
            .create(championship)
            .await?;

        tracing::info!(
            "Created championship {} ({:?}, {} groups)",
            championship.id,
            championship.format,
            championship.num_groups
        );

        Ok(championship)
    }

    pub async fn get_championship(&self, championship_id: i32) -> Result<ChampionshipModel, Error> {
        Ok(ChampionshipRepository::new(self.db)
            .get_by_id(championship_id)
            .await?
            .ok_or(NotFoundError::Championship(championship_id))?)
    }

    /// Returns the IDs of every championship, oldest first
    pub async fn get_all_ids(&self) -> Result<Vec<i32>, Error> {
        Ok(ChampionshipRepository::new(self.db).get_all_ids().await?)
    }

    /// Registers a team in one of the championship's groups
    ///
    /// # Returns
    /// - `Ok(TeamModel)`: The registered team
    /// - `Err(Error::NotFound(_))`: The championship does not exist
    /// - `Err(Error::MatchError(MatchError::InvalidGroup { .. }))`: `team.group_number` is not
    ///   within `1..=num_groups`
    pub async fn register_team(&self, championship_id: i32, team: NewTeam) -> Result<TeamModel, Error> {
        let championship = self.get_championship(championship_id).await?;

        if !(1..=championship.num_groups).contains(&team.group_number) {
            let error: Error = MatchError::InvalidGroup {
                group_number: team.group_number,
                num_groups: championship.num_groups,
            }
            .into();
            error.log("Team registration");

            return Err(error);
        }

        Ok(TeamRepository::new(self.db)
            .create(championship_id, team)
            .await?)
    }

    /// Gets the teams of a championship in registration order
    pub async fn get_teams(&self, championship_id: i32) -> Result<Vec<TeamModel>, Error> {
        self.get_championship(championship_id).await?;

        Ok(TeamRepository::new(self.db)
            .get_many_by_championship(championship_id)
            .await?)
    }

    pub async fn create_court(&self, name: String) -> Result<CourtModel, Error> {
        Ok(CourtRepository::new(self.db).create(name).await?)
    }

    /// Gets the active courts ordered by name
    pub async fn get_active_courts(&self) -> Result<Vec<CourtModel>, Error> {
        Ok(CourtRepository::new(self.db).get_active().await?)
    }
}
