//! Collaborators the engine hands its results to.
//!
//! The core never implements narrative generation or rendering; the request
//! layer injects implementations of these traits into the staged pipeline.

use crate::errors::CollaboratorError;
use crate::models::{MatchTier, PersonalityAnalysis, PersonalityProfile, RenderedArtifact};

use super::random::RandomSource;

/// Assigns a personality to a user.
pub trait Classifier: Send + Sync {
    fn classify(
        &self,
        user_id: &str,
        rng: &mut dyn RandomSource,
    ) -> Result<PersonalityAnalysis, CollaboratorError>;
}

/// Produces display text for a scored pair.
pub trait NarrativeGenerator: Send + Sync {
    fn narrate(
        &self,
        profile1: &PersonalityProfile,
        profile2: &PersonalityProfile,
        total_score: u8,
        tier: MatchTier,
    ) -> Result<String, CollaboratorError>;
}

/// Produces a shareable artifact for a scored pair.
pub trait Renderer: Send + Sync {
    fn render(
        &self,
        profile1: &PersonalityProfile,
        profile2: &PersonalityProfile,
        total_score: u8,
        tier: MatchTier,
        display_text: &str,
    ) -> Result<RenderedArtifact, CollaboratorError>;
}
