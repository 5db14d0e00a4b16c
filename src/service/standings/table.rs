//! Standings table computation: aggregation of finished matches and tie-break ordering.
//!
//! Both phases are pure. [`aggregate`] folds finished matches into one [`StandingCalculation`]
//! per registered team and [`rank`] orders each group with the tie-break cascade:
//!
//! 1. points
//! 2. matches won
//! 3. games won (`americano` only)
//! 4. head-to-head among the teams level on the criteria above, unless their direct results
//!    are circular
//! 5. game difference
//! 6. sets won
//! 7. set difference
//!
//! Teams still level after the last criterion keep their input order.

use std::{
    cmp::Ordering,
    collections::{BTreeMap, HashMap},
};

use entity::sea_orm_active_enums::ChampionshipFormat;

use crate::model::{
    db::{ChampionshipModel, MatchModel, TeamModel},
    standing::StandingCalculation,
};

/// Folds finished matches into one accumulator per team, in team order.
///
/// Every team gets an accumulator even without matches. A match with a winner credits
/// `points_win` and `points_loss`; a match without one only counts as played. Matches naming
/// a team that is not in `teams` are skipped.
pub fn aggregate(
    championship: &ChampionshipModel,
    teams: &[TeamModel],
    matches: &[MatchModel],
) -> Vec<StandingCalculation> {
    let mut standings: Vec<StandingCalculation> = teams
        .iter()
        .map(|team| StandingCalculation::new(team.id, team.group_number))
        .collect();
    let index_of: HashMap<i32, usize> = teams
        .iter()
        .enumerate()
        .map(|(index, team)| (team.id, index))
        .collect();

    for padel_match in matches {
        let (Some(&team1), Some(&team2)) = (
            index_of.get(&padel_match.team1_id),
            index_of.get(&padel_match.team2_id),
        ) else {
            tracing::warn!(
                "Skipping match {} of championship {}: team {} or {} is not registered",
                padel_match.id,
                championship.id,
                padel_match.team1_id,
                padel_match.team2_id
            );
            continue;
        };

        let team1_won = padel_match.winner_id == Some(padel_match.team1_id);
        let team2_won = padel_match.winner_id == Some(padel_match.team2_id);

        record_side(
            &mut standings[team1],
            championship,
            padel_match,
            padel_match.team2_id,
            (padel_match.team1_sets, padel_match.team2_sets),
            (padel_match.team1_games, padel_match.team2_games),
            outcome(team1_won, team2_won),
        );
        record_side(
            &mut standings[team2],
            championship,
            padel_match,
            padel_match.team1_id,
            (padel_match.team2_sets, padel_match.team1_sets),
            (padel_match.team2_games, padel_match.team1_games),
            outcome(team2_won, team1_won),
        );
    }

    standings
}

/// Orders the accumulators of every group, best first.
///
/// Groups are keyed by group number in ascending order; the 1-based position of a team is its
/// index within its group plus one.
pub fn rank(
    format: ChampionshipFormat,
    standings: Vec<StandingCalculation>,
) -> BTreeMap<i32, Vec<StandingCalculation>> {
    let mut groups: BTreeMap<i32, Vec<StandingCalculation>> = BTreeMap::new();
    for standing in standings {
        groups.entry(standing.group_number).or_default().push(standing);
    }

    for group in groups.values_mut() {
        // Stable, so fully level teams keep their input order
        group.sort_by(|a, b| primary_key(b, format).cmp(&primary_key(a, format)));

        let mut ranked = Vec::with_capacity(group.len());
        let mut rest = std::mem::take(group).into_iter().peekable();
        while let Some(first) = rest.next() {
            let key = primary_key(&first, format);
            let mut level = vec![first];
            while let Some(next) = rest.next_if(|s| primary_key(s, format) == key) {
                level.push(next);
            }
            ranked.extend(order_level(level, format));
        }

        *group = ranked;
    }

    groups
}

/// Orders teams level on points, matches won and, for `americano`, games won.
///
/// A team is placed only once every remaining team that beat it head-to-head is placed; among
/// the teams free to go next the lower criteria pick, then input order. When the direct
/// results among the remaining teams are circular, the whole block is ordered on the lower
/// criteria alone.
fn order_level(
    mut level: Vec<StandingCalculation>,
    format: ChampionshipFormat,
) -> Vec<StandingCalculation> {
    let mut remaining: Vec<usize> = (0..level.len()).collect();
    let mut order = Vec::with_capacity(level.len());

    while !remaining.is_empty() {
        let next = remaining
            .iter()
            .copied()
            .filter(|&candidate| {
                remaining.iter().all(|&other| {
                    head_to_head(&level[other], &level[candidate]) != Ordering::Less
                })
            })
            .reduce(|best, candidate| {
                if compare(&level[candidate], &level[best], format, false) == Ordering::Less {
                    candidate
                } else {
                    best
                }
            });

        match next {
            Some(next) => {
                remaining.retain(|&index| index != next);
                order.push(next);
            }
            None => {
                level.sort_by(|a, b| compare(a, b, format, false));
                return level;
            }
        }
    }

    let mut slots: Vec<Option<StandingCalculation>> = level.into_iter().map(Some).collect();
    order
        .into_iter()
        .filter_map(|index| slots[index].take())
        .collect()
}

/// Compares two teams of the same group, `Less` meaning `a` ranks above `b`.
///
/// With `head_to_head_applies` the direct result decides between teams level on points,
/// matches won and, for `americano`, games won. [`rank`] leaves it unset and resolves
/// head-to-head over the whole level block instead, since pairwise direct results among three
/// or more teams can be circular.
pub fn compare(
    a: &StandingCalculation,
    b: &StandingCalculation,
    format: ChampionshipFormat,
    head_to_head_applies: bool,
) -> Ordering {
    b.points
        .cmp(&a.points)
        .then_with(|| b.matches_won.cmp(&a.matches_won))
        .then_with(|| match format {
            ChampionshipFormat::Americano => b.games_won.cmp(&a.games_won),
            ChampionshipFormat::Liga | ChampionshipFormat::Torneo => Ordering::Equal,
        })
        .then_with(|| {
            if head_to_head_applies {
                head_to_head(a, b)
            } else {
                Ordering::Equal
            }
        })
        .then_with(|| b.game_difference().cmp(&a.game_difference()))
        .then_with(|| b.sets_won.cmp(&a.sets_won))
        .then_with(|| b.set_difference().cmp(&a.set_difference()))
}

/// Resolves two teams on their direct encounters.
///
/// The team with more wins against the other ranks first. No encounter, encounters without a
/// winner, or an even split of wins leave them level.
pub fn head_to_head(a: &StandingCalculation, b: &StandingCalculation) -> Ordering {
    let Some(encounters) = a.head_to_head.get(&b.team_id) else {
        return Ordering::Equal;
    };

    let wins_of = |team_id: i32| {
        encounters
            .iter()
            .filter(|encounter| encounter.winner_id == Some(team_id))
            .count()
    };

    wins_of(b.team_id).cmp(&wins_of(a.team_id))
}

#[derive(Clone, Copy)]
enum Outcome {
    Won,
    Lost,
    Undecided,
}

fn outcome(won: bool, opponent_won: bool) -> Outcome {
    match (won, opponent_won) {
        (true, _) => Outcome::Won,
        (false, true) => Outcome::Lost,
        (false, false) => Outcome::Undecided,
    }
}

fn record_side(
    standing: &mut StandingCalculation,
    championship: &ChampionshipModel,
    padel_match: &MatchModel,
    opponent_id: i32,
    (sets_won, sets_lost): (i32, i32),
    (games_won, games_lost): (i32, i32),
    outcome: Outcome,
) {
    standing.matches_played += 1;
    standing.sets_won += sets_won;
    standing.sets_lost += sets_lost;
    standing.games_won += games_won;
    standing.games_lost += games_lost;

    match outcome {
        Outcome::Won => {
            standing.matches_won += 1;
            standing.points += championship.points_win;
        }
        Outcome::Lost => {
            standing.matches_lost += 1;
            standing.points += championship.points_loss;
        }
        Outcome::Undecided => {}
    }

    standing
        .head_to_head
        .entry(opponent_id)
        .or_default()
        .push(padel_match.clone());
}

fn primary_key(standing: &StandingCalculation, format: ChampionshipFormat) -> (i32, i32, i32) {
    let games_won = match format {
        ChampionshipFormat::Americano => standing.games_won,
        ChampionshipFormat::Liga | ChampionshipFormat::Torneo => 0,
    };

    (standing.points, standing.matches_won, games_won)
}
