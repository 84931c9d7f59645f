use std::io;
use thiserror::Error;

/// Crate-wide error type for the ambient edges (configuration, lexicon loading, logging setup).
///
/// Classification, gating and history analysis never produce one of these; they
/// degrade to defined defaults instead.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Represents configuration-related errors (e.g., malformed environment variables).
    #[error("Configuration error: {0}")]
    Config(String),

    /// Represents data validation errors (e.g., a lexicon entry without keywords).
    #[error("Validation error: {0}")]
    Validation(String),

    /// Represents standard input/output errors.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Represents malformed JSON input (lexicon files).
    #[error("JSON error: {0}")]
    Json(String),

    /// Represents a failure to install the global tracing subscriber.
    #[error("Telemetry error: {0}")]
    Telemetry(String),
}

impl Clone for CoreError {
    fn clone(&self) -> Self {
        match self {
            CoreError::Config(s) => CoreError::Config(s.clone()),
            CoreError::Validation(s) => CoreError::Validation(s.clone()),
            CoreError::Io(e) => CoreError::Io(io::Error::new(e.kind(), e.to_string())),
            CoreError::Json(s) => CoreError::Json(s.clone()),
            CoreError::Telemetry(s) => CoreError::Telemetry(s.clone()),
        }
    }
}

impl From<serde_json::Error> for CoreError {
    fn from(err: serde_json::Error) -> Self {
        CoreError::Json(err.to_string())
    }
}

impl From<validator::ValidationErrors> for CoreError {
    fn from(err: validator::ValidationErrors) -> Self {
        CoreError::Validation(format!("Validation errors: {}", err))
    }
}

impl From<std::num::ParseIntError> for CoreError {
    fn from(err: std::num::ParseIntError) -> Self {
        CoreError::Config(format!("Integer parse error: {}", err))
    }
}

pub type Result<T> = std::result::Result<T, CoreError>;
