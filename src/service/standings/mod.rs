//! Standings computation and persistence.

pub mod table;

use sea_orm::{ConnectionTrait, DatabaseConnection, TransactionTrait};

use crate::{
    data::{
        championship::ChampionshipRepository, padel_match::MatchRepository,
        standing::StandingRepository, team::TeamRepository,
    },
    error::{not_found::NotFoundError, Error},
    model::standing::StandingWithTeam,
    util::lock::ChampionshipLocks,
};

pub struct StandingsService<'a> {
    db: &'a DatabaseConnection,
    locks: &'a ChampionshipLocks,
}

impl<'a> StandingsService<'a> {
    /// Creates a new instance of [`StandingsService`]
    pub fn new(db: &'a DatabaseConnection, locks: &'a ChampionshipLocks) -> Self {
        Self { db, locks }
    }

    /// Recomputes and replaces the standings of a championship
    ///
    /// # Behavior
    /// - Aggregates every finished match of the championship and ranks each group with the
    ///   tie-break cascade of [`table`]
    /// - Deletes the previous standings and inserts the new ones with their true group number
    ///   and 1-based position within the group
    /// - Runs in a single transaction while holding the championship's write lock, so readers
    ///   see either the previous table or the new one
    ///
    /// # Arguments
    /// - `championship_id` (`i32`): ID of the championship to recompute
    ///
    /// # Returns
    /// - `Ok(Vec<StandingWithTeam>)`: The new standings ordered by group then position
    /// - `Err(Error::NotFound(_))`: The championship does not exist, nothing was written
    /// - `Err(Error::DbErr(_))`: Database error, the previous standings are left intact
    pub async fn calculate_standings(
        &self,
        championship_id: i32,
    ) -> Result<Vec<StandingWithTeam>, Error> {
        let _guard = self.locks.acquire(championship_id).await;

        let result: Result<Vec<StandingWithTeam>, Error> = async {
            let txn = self.db.begin().await?;
            let standings = recalculate(&txn, championship_id).await?;
            txn.commit().await?;

            Ok(standings)
        }
        .await;

        match &result {
            Ok(standings) => tracing::info!(
                "Recalculated standings of championship {} ({} teams)",
                championship_id,
                standings.len()
            ),
            Err(e) => e.log(&format!(
                "Standings calculation for championship {}",
                championship_id
            )),
        }

        result
    }

    /// Gets the persisted standings of a championship without recomputing them
    ///
    /// # Returns
    /// - `Ok(Vec<StandingWithTeam>)`: Standings ordered by group then position, empty if never
    ///   computed
    /// - `Err(Error::NotFound(_))`: The championship does not exist
    pub async fn get_standings(&self, championship_id: i32) -> Result<Vec<StandingWithTeam>, Error> {
        if ChampionshipRepository::new(self.db)
            .get_by_id(championship_id)
            .await?
            .is_none()
        {
            return Err(NotFoundError::Championship(championship_id).into());
        }

        standings_with_team(self.db, championship_id).await
    }
}

/// Recomputes and replaces a championship's standings on `conn`
///
/// Callers own the transaction and the championship lock.
pub(crate) async fn recalculate<C: ConnectionTrait>(
    conn: &C,
    championship_id: i32,
) -> Result<Vec<StandingWithTeam>, Error> {
    let championship = ChampionshipRepository::new(conn)
        .get_by_id(championship_id)
        .await?
        .ok_or(NotFoundError::Championship(championship_id))?;

    let matches = MatchRepository::new(conn)
        .get_finished_by_championship(championship_id)
        .await?;
    let teams = TeamRepository::new(conn)
        .get_many_by_championship(championship_id)
        .await?;

    let ranked = table::rank(
        championship.format,
        table::aggregate(&championship, &teams, &matches),
    );

    let standing_repo = StandingRepository::new(conn);
    standing_repo.delete_by_championship(championship_id).await?;

    for group in ranked.values() {
        for (position, standing) in (1..).zip(group) {
            standing_repo
                .create(championship_id, standing, position)
                .await?;
        }
    }

    standings_with_team(conn, championship_id).await
}

async fn standings_with_team<C: ConnectionTrait>(
    conn: &C,
    championship_id: i32,
) -> Result<Vec<StandingWithTeam>, Error> {
    StandingRepository::new(conn)
        .get_with_team_by_championship(championship_id)
        .await?
        .into_iter()
        .map(|(standing, team)| match team {
            Some(team) => Ok(StandingWithTeam::new(standing, team)),
            // Unreachable while the foreign key holds
            None => Err(Error::InternalError(format!(
                "Standing {} references missing team {}",
                standing.id, standing.team_id
            ))),
        })
        .collect()
}
