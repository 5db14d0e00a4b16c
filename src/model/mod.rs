//! Application models and type definitions.
//!
//! Application state, database model type aliases, and the in-memory/read models that flow
//! between the fixture generator, the standings engine and their callers.

pub mod app;
pub mod championship;
pub mod db;
pub mod fixture;
pub mod match_result;
pub mod standing;
