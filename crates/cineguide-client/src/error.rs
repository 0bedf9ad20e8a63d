//! Client error types.

use thiserror::Error;

/// Errors surfaced to the capture UI.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("Request failed: {0}")]
    Network(#[from] reqwest::Error),

    /// Server-provided failure message, displayed verbatim.
    #[error("{0}")]
    Analyze(String),

    #[error("History fetch failed with status {0}")]
    History(u16),

    #[error("An analysis is already in flight")]
    AlreadyPending,
}
