//! Match result submission.

use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    data::{match_set::MatchSetRepository, padel_match::MatchRepository},
    error::{match_result::MatchError, not_found::NotFoundError, Error},
    model::{
        db::MatchModel,
        match_result::{SetScore, SetTally, Side},
    },
    service::standings,
    util::lock::ChampionshipLocks,
};

/// Most sets a single match result may carry.
pub const MAX_SETS: usize = 5;

/// Games the winning side of a set must reach at least.
pub const MIN_SET_GAMES: i32 = 6;

/// Validates the sets of a result and sums them per side.
///
/// Every set needs a side with at least [`MIN_SET_GAMES`] games and a strict winner, and the
/// match needs a side with more sets than the other.
///
/// # Errors
/// - [`MatchError::NoSets`] / [`MatchError::TooManySets`] for 0 or more than [`MAX_SETS`] sets
/// - [`MatchError::InvalidSetResult`] naming the first invalid set (1-based)
/// - [`MatchError::UndecidedMatch`] when both sides won as many sets
pub fn tally_sets(sets: &[SetScore]) -> Result<SetTally, MatchError> {
    if sets.is_empty() {
        return Err(MatchError::NoSets);
    }
    if sets.len() > MAX_SETS {
        return Err(MatchError::TooManySets {
            got: sets.len(),
            max: MAX_SETS,
        });
    }

    let (mut team1_sets, mut team2_sets, mut team1_games, mut team2_games) = (0, 0, 0, 0);

    for (index, set) in sets.iter().enumerate() {
        let valid = set.team1_games >= 0
            && set.team2_games >= 0
            && set.team1_games.max(set.team2_games) >= MIN_SET_GAMES
            && set.team1_games != set.team2_games;

        if !valid {
            return Err(MatchError::InvalidSetResult {
                set_number: index + 1,
                team1_games: set.team1_games,
                team2_games: set.team2_games,
            });
        }

        if set.team1_games > set.team2_games {
            team1_sets += 1;
        } else {
            team2_sets += 1;
        }
        team1_games += set.team1_games;
        team2_games += set.team2_games;
    }

    let winner = match team1_sets.cmp(&team2_sets) {
        std::cmp::Ordering::Greater => Side::Team1,
        std::cmp::Ordering::Less => Side::Team2,
        std::cmp::Ordering::Equal => return Err(MatchError::UndecidedMatch(team1_sets)),
    };

    Ok(SetTally {
        team1_sets,
        team2_sets,
        team1_games,
        team2_games,
        winner,
    })
}

pub struct MatchResultService<'a> {
    db: &'a DatabaseConnection,
    locks: &'a ChampionshipLocks,
}

impl<'a> MatchResultService<'a> {
    /// Creates a new instance of [`MatchResultService`]
    pub fn new(db: &'a DatabaseConnection, locks: &'a ChampionshipLocks) -> Self {
        Self { db, locks }
    }

    /// Records the result of a match and recomputes its championship's standings
    ///
    /// # Behavior
    /// - The sets are validated with [`tally_sets`] before anything is written
    /// - Every previous set of the match is deleted and the new ones are inserted numbered
    ///   from 1; resubmitting a result is a full overwrite
    /// - The match totals and winner are stored and its status becomes `finished`
    /// - The standings are recomputed in the same transaction, under the championship's
    ///   write lock, so a failure anywhere leaves the previous result and standings intact
    ///
    /// # Arguments
    /// - `match_id` (`i32`): ID of the match
    /// - `sets` (`&[SetScore]`): Games per side of every set played, in order
    ///
    /// # Returns
    /// - `Ok(MatchModel)`: The updated match
    /// - `Err(Error::NotFound(_))`: The match does not exist
    /// - `Err(Error::MatchError(_))`: The sets are not a valid result
    /// - `Err(Error::DbErr(_))`: Database error
    pub async fn submit_result(
        &self,
        match_id: i32,
        sets: &[SetScore],
    ) -> Result<MatchModel, Error> {
        self.submit(match_id, sets)
            .await
            .inspect(|padel_match| {
                tracing::info!(
                    "Recorded result {}-{} for match {} of championship {}",
                    padel_match.team1_sets,
                    padel_match.team2_sets,
                    padel_match.id,
                    padel_match.championship_id
                )
            })
            .inspect_err(|e| e.log(&format!("Result submission for match {}", match_id)))
    }

    async fn submit(&self, match_id: i32, sets: &[SetScore]) -> Result<MatchModel, Error> {
        let championship_id = MatchRepository::new(self.db)
            .get_by_id(match_id)
            .await?
            .ok_or(NotFoundError::Match(match_id))?
            .championship_id;

        let tally = tally_sets(sets)?;

        let _guard = self.locks.acquire(championship_id).await;

        let txn = self.db.begin().await?;

        // Re-read under the lock, the match may have changed or gone while waiting
        let match_repo = MatchRepository::new(&txn);
        let padel_match = match_repo
            .get_by_id(match_id)
            .await?
            .ok_or(NotFoundError::Match(match_id))?;

        let match_set_repo = MatchSetRepository::new(&txn);
        match_set_repo.delete_by_match(match_id).await?;
        match_set_repo.create_many(match_id, sets).await?;

        let updated = match_repo.update_result(padel_match, &tally).await?;

        standings::recalculate(&txn, championship_id).await?;

        txn.commit().await?;

        Ok(updated)
    }
}
