//! Database model type aliases.
//!
//! Short names for the SeaORM models of the `entity` crate, used across repositories and
//! services.

/// Championship configuration: format, points per win/loss, number of groups.
pub type ChampionshipModel = entity::padel_championship::Model;

pub type CourtModel = entity::padel_court::Model;

/// A registered team (two players) with its group assignment.
///
/// # Fields (from `entity::padel_team::Model`)
/// - `id` - Primary key
/// - `name` - Display name
/// - `player1_name`, `player2_name` - The pair's players
/// - `championship_id` - Owning championship
/// - `group_number` - 1-based group the team plays in
/// - `created_at` - Registration timestamp
pub type TeamModel = entity::padel_team::Model;

/// A scheduled or played match.
///
/// Sets and games totals and `winner_id` are only meaningful once `status` is `finished`.
pub type MatchModel = entity::padel_match::Model;

pub type MatchSetModel = entity::padel_match_set::Model;

/// A persisted standings row, with its 1-based position inside its group.
pub type StandingModel = entity::padel_standing::Model;
