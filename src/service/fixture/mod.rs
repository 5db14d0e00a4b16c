//! Round-robin fixture generation for championships.

pub mod round_robin;

pub use round_robin::{generate_fixtures, validate_fixtures};

use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    data::{
        championship::ChampionshipRepository, padel_match::MatchRepository, team::TeamRepository,
    },
    error::{fixture::FixtureError, not_found::NotFoundError, Error},
    model::{db::MatchModel, fixture::FixtureTeam},
    service::standings,
    util::lock::ChampionshipLocks,
};

pub struct FixtureService<'a> {
    db: &'a DatabaseConnection,
    locks: &'a ChampionshipLocks,
}

impl<'a> FixtureService<'a> {
    /// Creates a new instance of [`FixtureService`]
    pub fn new(db: &'a DatabaseConnection, locks: &'a ChampionshipLocks) -> Self {
        Self { db, locks }
    }

    /// Replaces a championship's schedule with a freshly generated round robin
    ///
    /// # Behavior
    /// - Generates one round robin per group from the registered teams in registration order
    ///   and validates it before anything is written
    /// - Deletes every existing match of the championship (their sets cascade) and inserts the
    ///   new fixtures as pending matches
    /// - Resets the standings, since the deleted matches no longer count
    /// - Runs in a single transaction under the championship's write lock; any failure leaves
    ///   the previous schedule intact
    ///
    /// # Returns
    /// - `Ok(Vec<MatchModel>)`: The persisted matches in schedule order
    /// - `Err(Error::NotFound(_))`: The championship does not exist
    /// - `Err(Error::FixtureError(FixtureError::InsufficientTeams(_)))`: Fewer than 2 teams
    /// - `Err(Error::FixtureError(FixtureError::InvalidSchedule))`: Validation failed
    /// - `Err(Error::DbErr(_))`: Database error
    pub async fn generate_for_championship(
        &self,
        championship_id: i32,
    ) -> Result<Vec<MatchModel>, Error> {
        let _guard = self.locks.acquire(championship_id).await;

        let result: Result<(u64, Vec<MatchModel>), Error> = async {
            let txn = self.db.begin().await?;

            ChampionshipRepository::new(&txn)
                .get_by_id(championship_id)
                .await?
                .ok_or(NotFoundError::Championship(championship_id))?;

            let teams: Vec<FixtureTeam> = TeamRepository::new(&txn)
                .get_many_by_championship(championship_id)
                .await?
                .iter()
                .map(FixtureTeam::from)
                .collect();

            let fixtures = generate_fixtures(&teams)?;
            if !validate_fixtures(&teams, &fixtures) {
                return Err(FixtureError::InvalidSchedule.into());
            }

            let match_repo = MatchRepository::new(&txn);
            let deleted = match_repo.delete_by_championship(championship_id).await?;
            let created = match_repo
                .create_many_generated(championship_id, &fixtures)
                .await?;

            standings::recalculate(&txn, championship_id).await?;

            txn.commit().await?;

            Ok((deleted.rows_affected, created))
        }
        .await;

        match result {
            Ok((replaced, created)) => {
                tracing::info!(
                    "Generated {} fixtures for championship {}, replacing {} matches",
                    created.len(),
                    championship_id,
                    replaced
                );

                Ok(created)
            }
            Err(e) => {
                e.log(&format!(
                    "Fixture generation for championship {}",
                    championship_id
                ));

                Err(e)
            }
        }
    }
}
