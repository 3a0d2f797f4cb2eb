use serde::{Deserialize, Serialize};

use super::match_result::MatchResult;
use super::profile::PersonalityAnalysis;

/// Opaque output of the rendering collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderedArtifact {
    pub media_type: String,
    pub uri: String,
}

/// Everything the staged pipeline produces for one pair of users.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchReport {
    pub user: PersonalityAnalysis,
    pub matched: PersonalityAnalysis,
    pub result: MatchResult,
    pub display_text: String,
    pub artifact: RenderedArtifact,
}
