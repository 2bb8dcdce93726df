//! Error types for event detection

use thiserror::Error;

/// Errors surfaced by the collaborators around the detection pipeline.
///
/// The pipeline itself never fails; these come from raw message intake,
/// date parsing and configuration loading.
#[derive(Error, Debug)]
pub enum DetectError {
    /// Failed to parse the raw message structure
    #[error("Failed to parse email structure: {0}")]
    Structure(String),

    /// Failed to decode a body part
    #[error("Failed to decode content: {0}")]
    Decode(String),

    /// Missing required header
    #[error("Missing required header: {0}")]
    MissingHeader(String),

    /// Date or time fields out of range, or unknown tokens in strict mode
    #[error("Invalid date: {0}")]
    InvalidDate(String),

    /// Text contains no date or time material
    #[error("No date found in: {0}")]
    NoDate(String),

    /// Configuration could not be deserialized
    #[error("Invalid configuration: {0}")]
    Config(#[from] serde_json::Error),
}

/// Result type for detection collaborators
pub type Result<T> = std::result::Result<T, DetectError>;
