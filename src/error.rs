//! Error types for the visit summarizer
//!
//! The summarization engine itself never fails: malformed notes are skipped
//! and empty inputs degrade to neutral values. Errors only surface at the
//! edges of the crate, when loading configuration or decoding input.

use thiserror::Error;

/// Main error type for summarizer operations
#[derive(Error, Debug)]
pub enum SummarizerError {
    /// Configuration is missing or invalid
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON (de)serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// TOML configuration could not be parsed
    #[error("Failed to parse config: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// Caller supplied an unusable value (unknown style, bad date, ...)
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Generic error with context
    #[error("{0}")]
    Other(String),
}

/// Result type alias for summarizer operations
pub type Result<T> = std::result::Result<T, SummarizerError>;

/// Convert anyhow::Error to SummarizerError
impl From<anyhow::Error> for SummarizerError {
    fn from(err: anyhow::Error) -> Self {
        SummarizerError::Other(err.to_string())
    }
}
