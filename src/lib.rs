//! Padel championship management core.
//!
//! This crate holds championship setup, team and court registration, round-robin fixture
//! generation, match result entry and the standings table with its tie-break cascade. All
//! state lives in a SeaORM database; every write that spans several tables runs in one
//! transaction while holding the championship's write lock.

#![warn(rustdoc::missing_crate_level_docs)]

pub mod config;
pub mod data;
pub mod error;
pub mod model;
pub mod service;
pub mod startup;
pub mod util;
