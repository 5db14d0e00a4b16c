//! `SeaORM` entities for the padel league schema.

pub mod prelude;

pub mod padel_championship;
pub mod padel_court;
pub mod padel_match;
pub mod padel_match_set;
pub mod padel_standing;
pub mod padel_team;
pub mod sea_orm_active_enums;
