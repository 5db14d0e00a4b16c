//! Round-robin schedule generation (circle method) and schedule validation.

use std::collections::{BTreeMap, HashMap, HashSet};

use crate::{
    error::fixture::FixtureError,
    model::fixture::{FixtureTeam, GeneratedMatch},
};

/// Generates a single round-robin schedule for every group of `teams`.
///
/// Groups are scheduled in ascending group number and keep the relative order of their teams.
/// A group of `n` teams yields `n * (n - 1) / 2` fixtures spread over `n - 1` rounds, or `n`
/// rounds when `n` is odd and every team sits out once. A group with a single team yields
/// nothing.
///
/// # Errors
/// - [`FixtureError::InsufficientTeams`] when fewer than 2 teams are given overall
pub fn generate_fixtures(teams: &[FixtureTeam]) -> Result<Vec<GeneratedMatch>, FixtureError> {
    if teams.len() < 2 {
        return Err(FixtureError::InsufficientTeams(teams.len()));
    }

    let fixtures = group_team_ids(teams)
        .into_iter()
        .flat_map(|(group_number, team_ids)| schedule_group(group_number, &team_ids))
        .collect();

    Ok(fixtures)
}

/// Checks a schedule against the teams it was generated for.
///
/// Returns false if a fixture references a team outside `teams`, pairs a team with itself or
/// repeats an unordered pair, or if a group's fixture count is not `size * (size - 1) / 2`.
pub fn validate_fixtures(teams: &[FixtureTeam], fixtures: &[GeneratedMatch]) -> bool {
    let team_ids: HashSet<i32> = teams.iter().map(|team| team.id).collect();
    let mut encounters = HashSet::with_capacity(fixtures.len());
    let mut fixtures_per_group: HashMap<i32, usize> = HashMap::new();

    for fixture in fixtures {
        if !team_ids.contains(&fixture.team1_id) || !team_ids.contains(&fixture.team2_id) {
            return false;
        }

        if fixture.team1_id == fixture.team2_id {
            return false;
        }

        let encounter = (
            fixture.team1_id.min(fixture.team2_id),
            fixture.team1_id.max(fixture.team2_id),
        );
        if !encounters.insert(encounter) {
            return false;
        }

        *fixtures_per_group.entry(fixture.group_number).or_default() += 1;
    }

    group_team_ids(teams).iter().all(|(group_number, team_ids)| {
        let size = team_ids.len();
        let expected = size * size.saturating_sub(1) / 2;

        fixtures_per_group.get(group_number).copied().unwrap_or(0) == expected
    })
}

fn group_team_ids(teams: &[FixtureTeam]) -> BTreeMap<i32, Vec<i32>> {
    let mut groups: BTreeMap<i32, Vec<i32>> = BTreeMap::new();

    for team in teams {
        groups.entry(team.group_number).or_default().push(team.id);
    }

    groups
}

fn schedule_group(group_number: i32, team_ids: &[i32]) -> Vec<GeneratedMatch> {
    // `None` is the bye
    let mut slots: Vec<Option<i32>> = team_ids.iter().copied().map(Some).collect();
    if slots.len() % 2 == 1 {
        slots.push(None);
    }

    let slot_count = slots.len();
    let mut fixtures = Vec::with_capacity(team_ids.len() * team_ids.len().saturating_sub(1) / 2);

    for round in 1..slot_count as i32 {
        for position in 0..slot_count / 2 {
            if let (Some(team1_id), Some(team2_id)) =
                (slots[position], slots[slot_count - 1 - position])
            {
                fixtures.push(GeneratedMatch {
                    team1_id,
                    team2_id,
                    round,
                    group_number,
                });
            }
        }

        // Slot 0 stays fixed while every other team moves one position
        slots[1..].rotate_left(1);
    }

    fixtures
}
