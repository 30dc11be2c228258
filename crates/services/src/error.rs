//! Shared error types for the services crate.

use thiserror::Error;

use trivia_core::model::{BatchError, TallyError};

/// Errors emitted by question sources.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum TriviaError {
    #[error("trivia request failed with status {0}")]
    HttpStatus(reqwest::StatusCode),
    #[error(transparent)]
    Http(#[from] reqwest::Error),
    #[error(transparent)]
    Batch(#[from] BatchError),
}

/// Errors emitted by the round workflow.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum RoundError {
    #[error("session still has questions left")]
    SessionActive,
    #[error(transparent)]
    Trivia(#[from] TriviaError),
    #[error(transparent)]
    Tally(#[from] TallyError),
}
