//! Test fixtures.
//!
//! - `championship` - championships, courts and teams inserted into the test database
//! - `padel_match` - pending and finished matches with their sets
//! - `factory` - in-memory models for unit tests that never touch a database

pub mod championship;
pub mod factory;
pub mod padel_match;
