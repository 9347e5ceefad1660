//! Error types for the medtools_core library.

use std::io;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for medtools_core operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// IO error occurred
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML parsing error
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Configuration validation error
    #[error("Configuration error: {0}")]
    Config(String),

    /// A calculation was asked to run on input it cannot evaluate
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// A form value fell outside its accepted domain
    #[error("{field} = {value} is out of range [{min}, {max}]")]
    OutOfRange {
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    /// Unrecognised page identifier
    #[error("Unknown page: {0}")]
    UnknownPage(String),

    /// Unrecognised sex value
    #[error("Unknown sex: {0} (expected male or female)")]
    UnknownSex(String),
}
