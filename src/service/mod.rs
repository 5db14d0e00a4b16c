//! Service layer.
//!
//! Services hold a database connection and the championship write locks, compose repositories
//! and own the transaction boundaries. Pure computations live in [`fixture::round_robin`] and
//! [`standings::table`].

pub mod championship;
pub mod fixture;
pub mod match_result;
pub mod padel_match;
pub mod standings;
