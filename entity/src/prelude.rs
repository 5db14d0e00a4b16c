//! `SeaORM` Entity prelude

pub use super::padel_championship::Entity as PadelChampionship;
pub use super::padel_court::Entity as PadelCourt;
pub use super::padel_match::Entity as PadelMatch;
pub use super::padel_match_set::Entity as PadelMatchSet;
pub use super::padel_standing::Entity as PadelStanding;
pub use super::padel_team::Entity as PadelTeam;
