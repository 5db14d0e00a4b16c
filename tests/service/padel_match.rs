//! Tests for MatchService.
//!
//! This module verifies manual match creation checks, match retrieval with sets, detail
//! updates and deletion along with the standings recomputation both may trigger.

use std::time::Duration;

use chrono::NaiveDate;
use entity::sea_orm_active_enums::{ChampionshipFormat, MatchStatus};
use padel_league::{
    error::{match_result::MatchError, not_found::NotFoundError, Error},
    model::{
        app::AppState,
        championship::{MatchUpdate, NewMatch},
        match_result::SetScore,
    },
    service::{
        match_result::MatchResultService, padel_match::MatchService,
        standings::StandingsService,
    },
};
use padel_test_utils::prelude::*;

fn new_match(team1_id: i32, team2_id: i32) -> NewMatch {
    NewMatch {
        team1_id,
        team2_id,
        court_id: None,
        round: 1,
        group_number: 1,
        scheduled_date: None,
    }
}

mod create_match {
    use super::*;

    /// Tests creating a match on a court.
    ///
    /// Expected: Ok with a pending match owned by the teams' championship
    #[tokio::test]
    async fn creates_pending_match() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_league_tables()
            .with_mock_championship(ChampionshipFormat::Liga)
            .build()
            .await?;
        let alpha = test.championship().insert_mock_team(1, "Alpha", 1).await?;
        let beta = test.championship().insert_mock_team(1, "Beta", 1).await?;
        let court = test.championship().insert_mock_court("Pista 1", true).await?;
        let state: AppState = test.to_app_state();

        let result = MatchService::new(&state.db, &state.locks)
            .create_match(NewMatch {
                court_id: Some(court.id),
                ..new_match(alpha.id, beta.id)
            })
            .await;

        assert!(result.is_ok(), "Error: {:?}", result);
        let created = result.unwrap();
        assert_eq!(created.championship_id, 1);
        assert_eq!(created.court_id, Some(court.id));
        assert_eq!(created.status, MatchStatus::Pending);
        assert_eq!(created.winner_id, None);

        Ok(())
    }

    /// Tests creating a match of a team against itself.
    ///
    /// Expected: Err(SameTeam)
    #[tokio::test]
    async fn rejects_same_team() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_league_tables()
            .with_mock_championship(ChampionshipFormat::Liga)
            .build()
            .await?;
        let alpha = test.championship().insert_mock_team(1, "Alpha", 1).await?;
        let state: AppState = test.to_app_state();

        let result = MatchService::new(&state.db, &state.locks)
            .create_match(new_match(alpha.id, alpha.id))
            .await;

        assert!(matches!(
            result,
            Err(Error::MatchError(MatchError::SameTeam(id))) if id == alpha.id
        ));

        Ok(())
    }

    /// Tests creating a match between teams of different championships.
    ///
    /// Expected: Err(TeamsFromDifferentChampionships)
    #[tokio::test]
    async fn rejects_teams_from_different_championships() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_league_tables()
            .with_mock_championship(ChampionshipFormat::Liga)
            .build()
            .await?;
        let other = test
            .championship()
            .insert_mock_championship(ChampionshipFormat::Torneo)
            .await?;
        let alpha = test.championship().insert_mock_team(1, "Alpha", 1).await?;
        let beta = test
            .championship()
            .insert_mock_team(other.id, "Beta", 1)
            .await?;
        let state: AppState = test.to_app_state();

        let result = MatchService::new(&state.db, &state.locks)
            .create_match(new_match(alpha.id, beta.id))
            .await;

        assert!(matches!(
            result,
            Err(Error::MatchError(
                MatchError::TeamsFromDifferentChampionships { .. }
            ))
        ));

        Ok(())
    }

    /// Tests creating a match with an unknown team.
    ///
    /// Expected: Err(NotFound(Team))
    #[tokio::test]
    async fn fails_for_missing_team() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_league_tables()
            .with_mock_championship(ChampionshipFormat::Liga)
            .build()
            .await?;
        let alpha = test.championship().insert_mock_team(1, "Alpha", 1).await?;
        let state: AppState = test.to_app_state();

        let result = MatchService::new(&state.db, &state.locks)
            .create_match(new_match(alpha.id, 99))
            .await;

        assert!(matches!(
            result,
            Err(Error::NotFound(NotFoundError::Team(99)))
        ));

        Ok(())
    }

    /// Tests creating a match on an unknown court.
    ///
    /// Expected: Err(NotFound(Court))
    #[tokio::test]
    async fn fails_for_missing_court() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_league_tables()
            .with_mock_championship(ChampionshipFormat::Liga)
            .build()
            .await?;
        let alpha = test.championship().insert_mock_team(1, "Alpha", 1).await?;
        let beta = test.championship().insert_mock_team(1, "Beta", 1).await?;
        let state: AppState = test.to_app_state();

        let result = MatchService::new(&state.db, &state.locks)
            .create_match(NewMatch {
                court_id: Some(7),
                ..new_match(alpha.id, beta.id)
            })
            .await;

        assert!(matches!(
            result,
            Err(Error::NotFound(NotFoundError::Court(7)))
        ));

        Ok(())
    }

    /// Tests creating a match in a group the championship does not have.
    ///
    /// Expected: Err(InvalidGroup)
    #[tokio::test]
    async fn rejects_group_out_of_range() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_league_tables()
            .with_mock_championship(ChampionshipFormat::Liga)
            .build()
            .await?;
        let alpha = test.championship().insert_mock_team(1, "Alpha", 1).await?;
        let beta = test.championship().insert_mock_team(1, "Beta", 1).await?;
        let state: AppState = test.to_app_state();

        let result = MatchService::new(&state.db, &state.locks)
            .create_match(NewMatch {
                group_number: 2,
                ..new_match(alpha.id, beta.id)
            })
            .await;

        assert!(matches!(
            result,
            Err(Error::MatchError(MatchError::InvalidGroup {
                group_number: 2,
                num_groups: 1,
            }))
        ));

        Ok(())
    }
}

mod get_match {
    use super::*;

    /// Tests fetching a finished match.
    ///
    /// Expected: Ok with the sets ordered by set number
    #[tokio::test]
    async fn returns_match_with_sets() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_league_tables()
            .with_mock_championship(ChampionshipFormat::Liga)
            .build()
            .await?;
        let alpha = test.championship().insert_mock_team(1, "Alpha", 1).await?;
        let beta = test.championship().insert_mock_team(1, "Beta", 1).await?;
        let (played, played_sets) = test
            .padel_match()
            .insert_finished_match(&alpha, &beta, &[(6, 3), (4, 6), (7, 5)])
            .await?;
        let state: AppState = test.to_app_state();

        let result = MatchService::new(&state.db, &state.locks)
            .get_match(played.id)
            .await;

        assert!(result.is_ok(), "Error: {:?}", result);
        let found = result.unwrap();
        assert_eq!(found.padel_match, played);
        assert_eq!(found.sets, played_sets);
        assert_eq!(
            found.sets.iter().map(|s| s.set_number).collect::<Vec<_>>(),
            vec![1, 2, 3]
        );

        Ok(())
    }

    /// Tests listing the matches of an unknown championship.
    ///
    /// Expected: Err(NotFound(Championship))
    #[tokio::test]
    async fn listing_fails_for_missing_championship() -> Result<(), TestError> {
        let test = TestBuilder::new().with_league_tables().build().await?;
        let state: AppState = test.to_app_state();

        let result = MatchService::new(&state.db, &state.locks)
            .get_by_championship(4)
            .await;

        assert!(matches!(
            result,
            Err(Error::NotFound(NotFoundError::Championship(4)))
        ));

        Ok(())
    }
}

mod update_match {
    use super::*;

    /// Tests assigning a court and a schedule to a pending match.
    ///
    /// Expected: Ok with the new court and date, status untouched
    #[tokio::test]
    async fn assigns_court_and_schedule() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_league_tables()
            .with_mock_championship(ChampionshipFormat::Liga)
            .build()
            .await?;
        let alpha = test.championship().insert_mock_team(1, "Alpha", 1).await?;
        let beta = test.championship().insert_mock_team(1, "Beta", 1).await?;
        let court = test.championship().insert_mock_court("Central", true).await?;
        let pending = test.padel_match().insert_pending_match(&alpha, &beta).await?;
        let state: AppState = test.to_app_state();
        let scheduled = NaiveDate::from_ymd_opt(2025, 4, 12)
            .and_then(|date| date.and_hms_opt(18, 30, 0));

        let result = MatchService::new(&state.db, &state.locks)
            .update_match(
                pending.id,
                MatchUpdate {
                    court_id: Some(Some(court.id)),
                    scheduled_date: Some(scheduled),
                    ..Default::default()
                },
            )
            .await;

        assert!(result.is_ok(), "Error: {:?}", result);
        let updated = result.unwrap();
        assert_eq!(updated.court_id, Some(court.id));
        assert_eq!(updated.scheduled_date, scheduled);
        assert_eq!(updated.status, MatchStatus::Pending);

        Ok(())
    }

    /// Tests moving a match to an unknown court.
    ///
    /// Expected: Err(NotFound(Court)) and the match unchanged
    #[tokio::test]
    async fn fails_for_missing_court() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_league_tables()
            .with_mock_championship(ChampionshipFormat::Liga)
            .build()
            .await?;
        let alpha = test.championship().insert_mock_team(1, "Alpha", 1).await?;
        let beta = test.championship().insert_mock_team(1, "Beta", 1).await?;
        let pending = test.padel_match().insert_pending_match(&alpha, &beta).await?;
        let state: AppState = test.to_app_state();
        let match_service = MatchService::new(&state.db, &state.locks);

        let result = match_service
            .update_match(
                pending.id,
                MatchUpdate {
                    court_id: Some(Some(3)),
                    ..Default::default()
                },
            )
            .await;

        assert!(matches!(
            result,
            Err(Error::NotFound(NotFoundError::Court(3)))
        ));
        let stored = match_service.get_match(pending.id).await.unwrap();
        assert_eq!(stored.padel_match, pending);

        Ok(())
    }

    /// Tests reopening a finished match.
    ///
    /// Verifies the match stops counting towards the standings.
    ///
    /// Expected: Ok with status playing and every team back to zero points
    #[tokio::test]
    async fn reopening_finished_match_recomputes_standings() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_league_tables()
            .with_mock_championship(ChampionshipFormat::Liga)
            .build()
            .await?;
        let alpha = test.championship().insert_mock_team(1, "Alpha", 1).await?;
        let beta = test.championship().insert_mock_team(1, "Beta", 1).await?;
        let (played, _) = test
            .padel_match()
            .insert_finished_match(&alpha, &beta, &[(6, 2), (6, 2)])
            .await?;
        let state: AppState = test.to_app_state();
        let standings_service = StandingsService::new(&state.db, &state.locks);
        standings_service.calculate_standings(1).await.unwrap();

        let result = MatchService::new(&state.db, &state.locks)
            .update_match(
                played.id,
                MatchUpdate {
                    status: Some(MatchStatus::Playing),
                    ..Default::default()
                },
            )
            .await;

        assert!(result.is_ok(), "Error: {:?}", result);
        assert_eq!(result.unwrap().status, MatchStatus::Playing);

        let standings = standings_service.get_standings(1).await.unwrap();
        assert_eq!(standings.len(), 2);
        assert!(standings
            .iter()
            .all(|s| s.points == 0 && s.matches_played == 0));

        Ok(())
    }

    /// Tests a status revert queued behind a result submission for the same match.
    ///
    /// Both writers wait on the championship's lock, the result first. The revert must see the
    /// match the result left behind.
    ///
    /// Expected: match pending and the persisted standings no longer counting it
    #[tokio::test]
    async fn revert_queued_behind_result_recomputes_standings() -> Result<(), TestError> {
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
        let match_service = MatchService::new(&state.db, &state.locks);
        let standings_service = StandingsService::new(&state.db, &state.locks);
        let result_sets = vec![SetScore::new(6, 1), SetScore::new(6, 1)];

        let guard = state.locks.acquire(1).await;
        let (submitted, reverted, _) = tokio::join!(
            result_service.submit_result(pending.id, &result_sets),
            async {
                tokio::time::sleep(Duration::from_millis(20)).await;
                match_service
                    .update_match(
                        pending.id,
                        MatchUpdate {
                            status: Some(MatchStatus::Pending),
                            ..Default::default()
                        },
                    )
                    .await
            },
            async move {
                tokio::time::sleep(Duration::from_millis(60)).await;
                drop(guard);
            },
        );

        assert!(submitted.is_ok(), "Error: {:?}", submitted);
        assert!(reverted.is_ok(), "Error: {:?}", reverted);
        assert_eq!(reverted.unwrap().status, MatchStatus::Pending);

        let persisted = standings_service.get_standings(1).await.unwrap();
        assert_eq!(persisted.len(), 2);
        assert!(persisted
            .iter()
            .all(|s| s.matches_played == 0 && s.points == 0));

        let recomputed = standings_service.calculate_standings(1).await.unwrap();
        assert_eq!(persisted, recomputed);

        Ok(())
    }
}

mod delete_match {
    use super::*;

    /// Tests deleting a finished match.
    ///
    /// Expected: Ok, the match and its sets gone, standings recomputed without it
    #[tokio::test]
    async fn deletes_finished_match_and_recomputes() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_league_tables()
            .with_mock_championship(ChampionshipFormat::Liga)
            .build()
            .await?;
        let alpha = test.championship().insert_mock_team(1, "Alpha", 1).await?;
        let beta = test.championship().insert_mock_team(1, "Beta", 1).await?;
        let (played, _) = test
            .padel_match()
            .insert_finished_match(&alpha, &beta, &[(2, 6), (2, 6)])
            .await?;
        let state: AppState = test.to_app_state();
        let standings_service = StandingsService::new(&state.db, &state.locks);
        let before = standings_service.calculate_standings(1).await.unwrap();
        assert_eq!(before[0].team_id, beta.id);

        let match_service = MatchService::new(&state.db, &state.locks);
        let result = match_service.delete_match(played.id).await;

        assert!(result.is_ok(), "Error: {:?}", result);
        assert!(matches!(
            match_service.get_match(played.id).await,
            Err(Error::NotFound(NotFoundError::Match(_)))
        ));
        assert!(match_service.get_by_championship(1).await.unwrap().is_empty());

        let after = standings_service.get_standings(1).await.unwrap();
        assert_eq!(after[0].team_id, alpha.id);
        assert!(after.iter().all(|s| s.matches_played == 0));

        Ok(())
    }

    /// Tests a deletion queued behind a result submission for the same match.
    ///
    /// Expected: match gone and the persisted standings no longer counting it
    #[tokio::test]
    async fn deletion_queued_behind_result_recomputes_standings() -> Result<(), TestError> {
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
        let match_service = MatchService::new(&state.db, &state.locks);
        let standings_service = StandingsService::new(&state.db, &state.locks);
        let result_sets = vec![SetScore::new(6, 1), SetScore::new(6, 1)];

        let guard = state.locks.acquire(1).await;
        let (submitted, deleted, _) = tokio::join!(
            result_service.submit_result(pending.id, &result_sets),
            async {
                tokio::time::sleep(Duration::from_millis(20)).await;
                match_service.delete_match(pending.id).await
            },
            async move {
                tokio::time::sleep(Duration::from_millis(60)).await;
                drop(guard);
            },
        );

        assert!(submitted.is_ok(), "Error: {:?}", submitted);
        assert!(deleted.is_ok(), "Error: {:?}", deleted);
        assert!(matches!(
            match_service.get_match(pending.id).await,
            Err(Error::NotFound(NotFoundError::Match(_)))
        ));

        let persisted = standings_service.get_standings(1).await.unwrap();
        assert_eq!(persisted.len(), 2);
        assert!(persisted.iter().all(|s| s.matches_played == 0));

        let recomputed = standings_service.calculate_standings(1).await.unwrap();
        assert_eq!(persisted, recomputed);

        Ok(())
    }

    /// Tests deleting a match that does not exist.
    ///
    /// Expected: Err(NotFound(Match))
    #[tokio::test]
    async fn fails_for_missing_match() -> Result<(), TestError> {
        let test = TestBuilder::new().with_league_tables().build().await?;
        let state: AppState = test.to_app_state();

        let result = MatchService::new(&state.db, &state.locks)
            .delete_match(8)
            .await;

        assert!(matches!(
            result,
            Err(Error::NotFound(NotFoundError::Match(8)))
        ));

        Ok(())
    }
}
