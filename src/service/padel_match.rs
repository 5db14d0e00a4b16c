use entity::sea_orm_active_enums::MatchStatus;
use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    data::{
        championship::ChampionshipRepository, court::CourtRepository,
        match_set::MatchSetRepository, padel_match::MatchRepository, team::TeamRepository,
    },
    error::{match_result::MatchError, not_found::NotFoundError, Error},
    model::{
        championship::{MatchUpdate, NewMatch},
        db::MatchModel,
        match_result::MatchWithSets,
    },
    service::standings,
    util::lock::ChampionshipLocks,
};

pub struct MatchService<'a> {
    db: &'a DatabaseConnection,
    locks: &'a ChampionshipLocks,
}

impl<'a> MatchService<'a> {
    /// Creates a new instance of [`MatchService`]
    pub fn new(db: &'a DatabaseConnection, locks: &'a ChampionshipLocks) -> Self {
        Self { db, locks }
    }

    /// Creates a single pending match outside of fixture generation
    ///
    /// The championship is the one both teams belong to.
    ///
    /// # Returns
    /// - `Ok(MatchModel)`: The created match
    /// - `Err(Error::MatchError(MatchError::SameTeam(_)))`: Both sides are the same team
    /// - `Err(Error::NotFound(_))`: A team or the court does not exist
    /// - `Err(Error::MatchError(MatchError::TeamsFromDifferentChampionships { .. }))`
    /// - `Err(Error::MatchError(MatchError::InvalidGroup { .. }))`: The group is outside of
    ///   the championship's groups
    pub async fn create_match(&self, new_match: NewMatch) -> Result<MatchModel, Error> {
        let result: Result<MatchModel, Error> = async {
            if new_match.team1_id == new_match.team2_id {
                return Err(MatchError::SameTeam(new_match.team1_id).into());
            }

            let teams = TeamRepository::new(self.db)
                .get_many_by_ids(&[new_match.team1_id, new_match.team2_id])
                .await?;
            let find_team = |team_id: i32| {
                teams
                    .iter()
                    .find(|team| team.id == team_id)
                    .ok_or(NotFoundError::Team(team_id))
            };
            let team1 = find_team(new_match.team1_id)?;
            let team2 = find_team(new_match.team2_id)?;

            if team1.championship_id != team2.championship_id {
                return Err(MatchError::TeamsFromDifferentChampionships {
                    team1_id: team1.id,
                    team2_id: team2.id,
                }
                .into());
            }

            let championship_id = team1.championship_id;
            let championship = ChampionshipRepository::new(self.db)
                .get_by_id(championship_id)
                .await?
                .ok_or(NotFoundError::Championship(championship_id))?;

            if !(1..=championship.num_groups).contains(&new_match.group_number) {
                return Err(MatchError::InvalidGroup {
                    group_number: new_match.group_number,
                    num_groups: championship.num_groups,
                }
                .into());
            }

            if let Some(court_id) = new_match.court_id {
                self.ensure_court_exists(court_id).await?;
            }

            Ok(MatchRepository::new(self.db)
                .create(championship_id, new_match)
                .await?)
        }
        .await;

        result.inspect_err(|e| e.log("Match creation"))
    }

    /// Gets a match with its sets ordered by set number
    pub async fn get_match(&self, match_id: i32) -> Result<MatchWithSets, Error> {
        let padel_match = MatchRepository::new(self.db)
            .get_by_id(match_id)
            .await?
            .ok_or(NotFoundError::Match(match_id))?;

        let sets = MatchSetRepository::new(self.db)
            .get_by_match(match_id)
            .await?;

        Ok(MatchWithSets { padel_match, sets })
    }

    /// Gets a championship's matches ordered by round, group and ID
    pub async fn get_by_championship(&self, championship_id: i32) -> Result<Vec<MatchModel>, Error> {
        if ChampionshipRepository::new(self.db)
            .get_by_id(championship_id)
            .await?
            .is_none()
        {
            return Err(NotFoundError::Championship(championship_id).into());
        }

        Ok(MatchRepository::new(self.db)
            .get_by_championship(championship_id)
            .await?)
    }

    /// Updates the status, court or schedule of a match
    ///
    /// # Behavior
    /// - Fields left `None` in `update` are untouched
    /// - The status change is judged against the match as re-read under the championship's
    ///   write lock; a change into or out of `finished` changes which matches count, so the
    ///   standings are recomputed in the same transaction
    ///
    /// # Returns
    /// - `Ok(MatchModel)`: The updated match
    /// - `Err(Error::NotFound(_))`: The match or the new court does not exist
    pub async fn update_match(
        &self,
        match_id: i32,
        update: MatchUpdate,
    ) -> Result<MatchModel, Error> {
        let result: Result<MatchModel, Error> = async {
            let padel_match = MatchRepository::new(self.db)
                .get_by_id(match_id)
                .await?
                .ok_or(NotFoundError::Match(match_id))?;

            if let Some(Some(court_id)) = update.court_id {
                self.ensure_court_exists(court_id).await?;
            }

            if update == MatchUpdate::default() {
                return Ok(padel_match);
            }

            let championship_id = padel_match.championship_id;
            let _guard = self.locks.acquire(championship_id).await;

            let txn = self.db.begin().await?;

            // Re-read under the lock, a result may have been submitted while waiting
            let match_repo = MatchRepository::new(&txn);
            let padel_match = match_repo
                .get_by_id(match_id)
                .await?
                .ok_or(NotFoundError::Match(match_id))?;
            let was_finished = padel_match.status == MatchStatus::Finished;

            let updated = match_repo.update_details(padel_match, update).await?;

            if was_finished != (updated.status == MatchStatus::Finished) {
                standings::recalculate(&txn, championship_id).await?;
            }

            txn.commit().await?;

            Ok(updated)
        }
        .await;

        result.inspect_err(|e| e.log(&format!("Update of match {}", match_id)))
    }

    /// Deletes a match and its sets
    ///
    /// Standings are recomputed in the same transaction when the match was finished.
    ///
    /// # Returns
    /// - `Ok(())`: The match was deleted
    /// - `Err(Error::NotFound(_))`: The match does not exist
    pub async fn delete_match(&self, match_id: i32) -> Result<(), Error> {
        let result: Result<(), Error> = async {
            let championship_id = MatchRepository::new(self.db)
                .get_by_id(match_id)
                .await?
                .ok_or(NotFoundError::Match(match_id))?
                .championship_id;

            let _guard = self.locks.acquire(championship_id).await;

            let txn = self.db.begin().await?;

            let match_repo = MatchRepository::new(&txn);
            let padel_match = match_repo
                .get_by_id(match_id)
                .await?
                .ok_or(NotFoundError::Match(match_id))?;

            MatchSetRepository::new(&txn).delete_by_match(match_id).await?;
            match_repo.delete_by_id(match_id).await?;

            if padel_match.status == MatchStatus::Finished {
                standings::recalculate(&txn, championship_id).await?;
            }

            txn.commit().await?;

            tracing::info!(
                "Deleted match {} of championship {}",
                match_id,
                championship_id
            );

            Ok(())
        }
        .await;

        result.inspect_err(|e| e.log(&format!("Deletion of match {}", match_id)))
    }

    async fn ensure_court_exists(&self, court_id: i32) -> Result<(), Error> {
        match CourtRepository::new(self.db).get_by_id(court_id).await? {
            Some(_) => Ok(()),
            None => Err(NotFoundError::Court(court_id).into()),
        }
    }
}
