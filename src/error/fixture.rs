use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum FixtureError {
    /// Fewer than two teams were supplied to fixture generation.
    #[error("At least 2 teams are required to generate fixtures, found {0}")]
    InsufficientTeams(usize),
    /// The generated schedule failed validation before being persisted.
    ///
    /// Generation and validation are deterministic, so this indicates a bug rather than bad input.
    #[error("Generated fixtures failed validation, the existing schedule was left untouched")]
    InvalidSchedule,
}
