//! Data access layer repositories.
//!
//! Repositories wrap the SeaORM queries for one table each. They are generic over
//! [`sea_orm::ConnectionTrait`] so services can run them on a plain connection or inside a
//! transaction, and they return [`sea_orm::DbErr`] untouched for the service layer to wrap.

pub mod championship;
pub mod court;
pub mod match_set;
pub mod padel_match;
pub mod standing;
pub mod team;

#[cfg(test)]
mod tests;
