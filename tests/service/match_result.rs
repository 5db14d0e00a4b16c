//! Tests for MatchResultService::submit_result.
//!
//! This module verifies result storage, the full overwrite of previous sets, standings
//! recomputation and that rejected results leave the stored state untouched.

use entity::sea_orm_active_enums::{ChampionshipFormat, MatchStatus};
use padel_league::{
    error::{match_result::MatchError, not_found::NotFoundError, Error},
    model::{app::AppState, match_result::SetScore},
    service::{
        match_result::MatchResultService, padel_match::MatchService,
        standings::StandingsService,
    },
};
use padel_test_utils::prelude::*;

fn sets(scores: &[(i32, i32)]) -> Vec<SetScore> {
    scores.iter().map(|&(t1, t2)| SetScore::new(t1, t2)).collect()
}

/// Tests submitting a three set result.
///
/// Verifies the match totals, the stored sets and the recomputed standings.
///
/// Expected: match finished 2-1 in sets and 15-12 in games, winner first in the table
#[tokio::test]
async fn records_result_and_recomputes_standings() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_league_tables()
        .with_mock_championship(ChampionshipFormat::Liga)
        .build()
        .await?;
    let alpha = test.championship().insert_mock_team(1, "Alpha", 1).await?;
    let beta = test.championship().insert_mock_team(1, "Beta", 1).await?;
    let pending = test.padel_match().insert_pending_match(&beta, &alpha).await?;
    let state: AppState = test.to_app_state();

    let result = MatchResultService::new(&state.db, &state.locks)
        .submit_result(pending.id, &sets(&[(6, 4), (3, 6), (6, 2)]))
        .await;

    assert!(result.is_ok(), "Error: {:?}", result);
    let updated = result.unwrap();
    assert_eq!(updated.status, MatchStatus::Finished);
    assert_eq!((updated.team1_sets, updated.team2_sets), (2, 1));
    assert_eq!((updated.team1_games, updated.team2_games), (15, 12));
    assert_eq!(updated.winner_id, Some(beta.id));

    let stored = MatchService::new(&state.db, &state.locks)
        .get_match(pending.id)
        .await
        .unwrap();
    assert_eq!(stored.padel_match, updated);
    assert_eq!(stored.sets.len(), 3);

    let standings = StandingsService::new(&state.db, &state.locks)
        .get_standings(1)
        .await
        .unwrap();
    assert_eq!(standings[0].team_id, beta.id);
    assert_eq!(standings[0].points, 3);
    assert_eq!(standings[1].team_id, alpha.id);
    assert_eq!(standings[1].matches_lost, 1);

    Ok(())
}

/// Tests resubmitting the result of a match.
///
/// Verifies every previous set is replaced and the standings follow the new winner.
///
/// Expected: exactly the 2 new sets remain, Alpha now first
#[tokio::test]
async fn resubmission_replaces_previous_sets() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_league_tables()
        .with_mock_championship(ChampionshipFormat::Liga)
        .build()
        .await?;
    let alpha = test.championship().insert_mock_team(1, "Alpha", 1).await?;
    let beta = test.championship().insert_mock_team(1, "Beta", 1).await?;
    let pending = test.padel_match().insert_pending_match(&alpha, &beta).await?;
    let state: AppState = test.to_app_state();
    let result_service = MatchResultService::new(&state.db, &state.locks);

    result_service
        .submit_result(pending.id, &sets(&[(4, 6), (6, 3), (2, 6)]))
        .await
        .unwrap();
    let result = result_service
        .submit_result(pending.id, &sets(&[(6, 1), (6, 0)]))
        .await;

    assert!(result.is_ok(), "Error: {:?}", result);
    assert_eq!(result.unwrap().winner_id, Some(alpha.id));

    let stored = MatchService::new(&state.db, &state.locks)
        .get_match(pending.id)
        .await
        .unwrap();
    let scores: Vec<(i32, i32, i32)> = stored
        .sets
        .iter()
        .map(|s| (s.set_number, s.team1_games, s.team2_games))
        .collect();
    assert_eq!(scores, vec![(1, 6, 1), (2, 6, 0)]);

    let standings = StandingsService::new(&state.db, &state.locks)
        .get_standings(1)
        .await
        .unwrap();
    assert_eq!(standings[0].team_id, alpha.id);
    assert_eq!(standings[0].matches_played, 1);
    assert_eq!(standings[1].points, 0);

    Ok(())
}

/// Tests submitting an invalid result over a stored one.
///
/// Expected: Err(InvalidSetResult) for set 1 and the stored sets unchanged
#[tokio::test]
async fn rejected_result_keeps_previous_sets() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_league_tables()
        .with_mock_championship(ChampionshipFormat::Liga)
        .build()
        .await?;
    let alpha = test.championship().insert_mock_team(1, "Alpha", 1).await?;
    let beta = test.championship().insert_mock_team(1, "Beta", 1).await?;
    let (played, previous_sets) = test
        .padel_match()
        .insert_finished_match(&alpha, &beta, &[(6, 4), (6, 4)])
        .await?;
    let state: AppState = test.to_app_state();

    let result = MatchResultService::new(&state.db, &state.locks)
        .submit_result(played.id, &sets(&[(4, 3)]))
        .await;

    assert!(matches!(
        result,
        Err(Error::MatchError(MatchError::InvalidSetResult { set_number: 1, .. }))
    ));

    let stored = MatchService::new(&state.db, &state.locks)
        .get_match(played.id)
        .await
        .unwrap();
    assert_eq!(stored.padel_match, played);
    assert_eq!(stored.sets, previous_sets);

    Ok(())
}

/// Tests submitting a result split evenly in sets.
///
/// Expected: Err(UndecidedMatch) and the match still pending
#[tokio::test]
async fn rejects_undecided_result() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_league_tables()
        .with_mock_championship(ChampionshipFormat::Liga)
        .build()
        .await?;
    let alpha = test.championship().insert_mock_team(1, "Alpha", 1).await?;
    let beta = test.championship().insert_mock_team(1, "Beta", 1).await?;
    let pending = test.padel_match().insert_pending_match(&alpha, &beta).await?;
    let state: AppState = test.to_app_state();

    let result = MatchResultService::new(&state.db, &state.locks)
        .submit_result(pending.id, &sets(&[(6, 4), (4, 6)]))
        .await;

    assert!(matches!(
        result,
        Err(Error::MatchError(MatchError::UndecidedMatch(1)))
    ));
    let stored = MatchService::new(&state.db, &state.locks)
        .get_match(pending.id)
        .await
        .unwrap();
    assert_eq!(stored.padel_match.status, MatchStatus::Pending);
    assert!(stored.sets.is_empty());

    Ok(())
}

/// Tests submitting a result for a match that does not exist.
///
/// Expected: Err(NotFound(Match))
#[tokio::test]
async fn fails_for_missing_match() -> Result<(), TestError> {
    let test = TestBuilder::new().with_league_tables().build().await?;
    let state: AppState = test.to_app_state();

    let result = MatchResultService::new(&state.db, &state.locks)
        .submit_result(12, &sets(&[(6, 0), (6, 0)]))
        .await;

    assert!(matches!(
        result,
        Err(Error::NotFound(NotFoundError::Match(12)))
    ));

    Ok(())
}

/// Tests two results of the same championship submitted concurrently.
///
/// Verifies the serialized recomputations leave a table that counts both results.
///
/// Expected: both Ok, every team with one match played
#[tokio::test]
async fn concurrent_results_are_both_counted() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_league_tables()
        .with_mock_championship(ChampionshipFormat::Liga)
        .build()
        .await?;
    let alpha = test.championship().insert_mock_team(1, "Alpha", 1).await?;
    let beta = test.championship().insert_mock_team(1, "Beta", 1).await?;
    let gamma = test.championship().insert_mock_team(1, "Gamma", 1).await?;
    let delta = test.championship().insert_mock_team(1, "Delta", 1).await?;
    let first = test.padel_match().insert_pending_match(&alpha, &beta).await?;
    let second = test.padel_match().insert_pending_match(&gamma, &delta).await?;
    let state: AppState = test.to_app_state();
    let result_service = MatchResultService::new(&state.db, &state.locks);
    let first_sets = sets(&[(6, 2), (6, 2)]);
    let second_sets = sets(&[(2, 6), (2, 6)]);

    let (first_result, second_result) = tokio::join!(
        result_service.submit_result(first.id, &first_sets),
        result_service.submit_result(second.id, &second_sets),
    );

    assert!(first_result.is_ok(), "Error: {:?}", first_result);
    assert!(second_result.is_ok(), "Error: {:?}", second_result);

    let standings = StandingsService::new(&state.db, &state.locks)
        .get_standings(1)
        .await
        .unwrap();
    assert_eq!(standings.len(), 4);
    assert!(standings.iter().all(|s| s.matches_played == 1));
    assert_eq!(standings.iter().map(|s| s.points).sum::<i32>(), 6);

    Ok(())
}
