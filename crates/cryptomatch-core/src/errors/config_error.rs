//! Configuration errors.

use super::error_code::{self, MatchErrorCode};

/// Errors that can occur during configuration loading and validation.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Config file not found: {path}")]
    FileNotFound { path: String },

    #[error("Config parse error in {path}: {message}")]
    ParseError { path: String, message: String },

    #[error("Config validation failed for {field}: {message}")]
    ValidationFailed { field: String, message: String },

    /// Startup-fatal: the engine must not run with these weights.
    #[error("Scoring weights are invalid (sum = {sum}): {message}")]
    InvalidWeights { sum: f64, message: String },
}

impl MatchErrorCode for ConfigError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidWeights { .. } => error_code::INVALID_WEIGHTS,
            _ => error_code::CONFIG_ERROR,
        }
    }
}
