use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum NotFoundError {
    #[error("Championship {0} not found")]
    Championship(i32),
    #[error("Match {0} not found")]
    Match(i32),
    #[error("Team {0} not found")]
    Team(i32),
    #[error("Court {0} not found")]
    Court(i32),
}
