//! Errors reported by downstream collaborators (narrative, rendering, classifier).

use super::error_code::{self, MatchErrorCode};

#[derive(Debug, thiserror::Error)]
pub enum CollaboratorError {
    #[error("{service} unavailable: {reason}")]
    Unavailable { service: String, reason: String },

    #[error("{service} returned unusable output: {reason}")]
    InvalidOutput { service: String, reason: String },
}

impl MatchErrorCode for CollaboratorError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Unavailable { .. } => error_code::COLLABORATOR_UNAVAILABLE,
            Self::InvalidOutput { .. } => error_code::COLLABORATOR_INVALID_OUTPUT,
        }
    }
}
