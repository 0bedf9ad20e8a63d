//! Vision error types.

use thiserror::Error;

/// Result type for vision operations.
pub type VisionResult<T> = Result<T, VisionError>;

/// Errors that can occur while consulting the vision model.
#[derive(Debug, Error)]
pub enum VisionError {
    #[error("Vision API key not configured")]
    MissingApiKey,

    #[error("Vision request failed: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Vision API returned {status}: {body}")]
    Upstream { status: u16, body: String },

    #[error("No content in vision reply")]
    EmptyReply,

    #[error("Unusable vision reply: {0}")]
    Malformed(String),
}
