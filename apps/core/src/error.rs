use std::io;
use thiserror::Error;

/// Crate-wide error type, consolidating all possible errors into a single enum.
#[derive(Debug, Error)]
pub enum CoachError {
    /// Errors originating from the SQLite blob store, from `sqlx`.
    #[error("Storage error: {0}")]
    Storage(#[from] sqlx::Error),

    /// Standard input/output errors.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Conversation log (de)serialization errors.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Communication failures with the conversation store actor.
    #[error("Store actor error: {0}")]
    Actor(String),

    /// Invalid configuration values.
    #[error("Validation error: {0}")]
    Validation(String),
}

impl From<validator::ValidationErrors> for CoachError {
    fn from(err: validator::ValidationErrors) -> Self {
        CoachError::Validation(err.to_string())
    }
}

impl From<uuid::Error> for CoachError {
    fn from(err: uuid::Error) -> Self {
        CoachError::Validation(format!("UUID error: {}", err))
    }
}

impl From<chrono::ParseError> for CoachError {
    fn from(err: chrono::ParseError) -> Self {
        CoachError::Validation(format!("Date parse error: {}", err))
    }
}
