//! Error types for the padel league crate.
//!
//! Each domain (configuration, fixtures, match results, lookups) has its own `thiserror`
//! enum. They are aggregated into [`Error`] so services can use `?` across domains, and
//! database failures pass through unchanged as [`Error::DbErr`].

pub mod config;
pub mod fixture;
pub mod match_result;
pub mod not_found;

use thiserror::Error;

use crate::error::{
    config::ConfigError, fixture::FixtureError, match_result::MatchError,
    not_found::NotFoundError,
};

/// Main error type for the padel league crate.
///
/// # Error Categories
/// - Configuration errors (missing/invalid environment variables)
/// - Fixture generation errors (too few teams, invalid schedule)
/// - Match errors (invalid set results, invalid pairings)
/// - Lookup errors (championship, match, team or court missing)
/// - Database errors (query failures, constraint violations, failed commits)
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Fixture generation error.
    #[error(transparent)]
    FixtureError(#[from] FixtureError),
    /// Match creation or result submission error.
    #[error(transparent)]
    MatchError(#[from] MatchError),
    /// A referenced record does not exist.
    #[error(transparent)]
    NotFound(#[from] NotFoundError),
    /// Internal error indicating a bug in the crate.
    ///
    /// This should never occur in normal operation, e.g. a persisted standing whose team row
    /// is missing despite the foreign key.
    #[error("Internal error, this indicates a bug: {0:?}")]
    InternalError(String),
    /// Database error (query failures, connection issues, constraint violations).
    ///
    /// Any transaction open when this is returned has been rolled back.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
}

impl Error {
    /// Whether the error was caused by the caller's input rather than by the system.
    ///
    /// Client errors are not worth retrying until the input changes; everything else is an
    /// infrastructure failure or a bug.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            Self::FixtureError(FixtureError::InsufficientTeams(_))
                | Self::MatchError(_)
                | Self::NotFound(_)
        )
    }

    /// Logs the error at a level matching its category.
    ///
    /// Client errors are expected during normal operation and are logged at `debug`, all
    /// other errors at `error`.
    pub(crate) fn log(&self, operation: &str) {
        if self.is_client_error() {
            tracing::debug!("{} rejected: {}", operation, self);
        } else {
            tracing::error!("{} failed: {}", operation, self);
        }
    }
}
