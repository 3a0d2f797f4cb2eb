//! Personality catalog errors.

use super::error_code::{self, MatchErrorCode};

/// Raised when a boundary value does not name one of the closed categories.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Unknown personality category: {value}")]
    InvalidCategory { value: String },
}

impl MatchErrorCode for CatalogError {
    fn error_code(&self) -> &'static str {
        error_code::INVALID_CATEGORY
    }
}
