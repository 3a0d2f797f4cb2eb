//! Top-level error aggregating every subsystem error.

use super::error_code::MatchErrorCode;
use super::{CatalogError, CollaboratorError, ConfigError};

#[derive(Debug, thiserror::Error)]
pub enum MatchError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    #[error("Collaborator error: {0}")]
    Collaborator(#[from] CollaboratorError),
}

impl MatchErrorCode for MatchError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Config(e) => e.error_code(),
            Self::Catalog(e) => e.error_code(),
            Self::Collaborator(e) => e.error_code(),
        }
    }
}
