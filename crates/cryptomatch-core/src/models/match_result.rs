use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::factors::ScoreBreakdown;
use super::profile::{Personality, PersonalitySummary};
use crate::constants::{HIGH_TIER_THRESHOLD, MEDIUM_TIER_THRESHOLD};

/// Score band of a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MatchTier {
    #[serde(rename = "high_match")]
    High,
    #[serde(rename = "medium_match")]
    Medium,
    #[serde(rename = "low_match")]
    Low,
}

impl MatchTier {
    /// Classify a total score. Each band includes its lower edge.
    pub fn from_score(total: u8) -> Self {
        if total >= HIGH_TIER_THRESHOLD {
            Self::High
        } else if total >= MEDIUM_TIER_THRESHOLD {
            Self::Medium
        } else {
            Self::Low
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::High => "high_match",
            Self::Medium => "medium_match",
            Self::Low => "low_match",
        }
    }
}

impl fmt::Display for MatchTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of scoring one profile pair. Immutable once built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    /// Rounded weighted total, [0, 100].
    pub total_score: u8,
    pub tier: MatchTier,
    pub breakdown: ScoreBreakdown,
    pub common_tokens: BTreeSet<String>,
    pub personality1: PersonalitySummary,
    pub personality2: PersonalitySummary,
}

/// A candidate paired with its score against the subject.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedMatch {
    pub candidate: Personality,
    pub result: MatchResult,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tier_boundaries_include_lower_edge() {
        assert_eq!(MatchTier::from_score(100), MatchTier::High);
        assert_eq!(MatchTier::from_score(80), MatchTier::High);
        assert_eq!(MatchTier::from_score(79), MatchTier::Medium);
        assert_eq!(MatchTier::from_score(60), MatchTier::Medium);
        assert_eq!(MatchTier::from_score(59), MatchTier::Low);
        assert_eq!(MatchTier::from_score(0), MatchTier::Low);
    }

    #[test]
    fn tier_serializes_with_match_suffix() {
        let json = serde_json::to_string(&MatchTier::Medium).unwrap();
        assert_eq!(json, "\"medium_match\"");
    }
}
