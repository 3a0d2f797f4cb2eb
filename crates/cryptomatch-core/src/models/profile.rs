use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::category::{PersonalityCategory, RiskLevel};

/// Descriptive attributes of a personality category.
///
/// Trait labels and token symbols are sets: order is irrelevant and
/// duplicates collapse.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonalityProfile {
    pub title: String,
    pub description: String,
    pub traits: BTreeSet<String>,
    pub tokens: BTreeSet<String>,
    pub risk_level: RiskLevel,
    pub emoji: String,
    pub tagline: String,
}

/// A profile tagged with the category it belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Personality {
    pub category: PersonalityCategory,
    pub profile: PersonalityProfile,
}

impl Personality {
    pub fn new(category: PersonalityCategory, profile: PersonalityProfile) -> Self {
        Self { category, profile }
    }

    pub fn summary(&self) -> PersonalitySummary {
        PersonalitySummary::of(self.category, &self.profile)
    }
}

/// Display-only view of a personality carried on a match result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonalitySummary {
    #[serde(rename = "type")]
    pub category: PersonalityCategory,
    pub title: String,
    pub emoji: String,
}

impl PersonalitySummary {
    pub fn of(category: PersonalityCategory, profile: &PersonalityProfile) -> Self {
        Self {
            category,
            title: profile.title.clone(),
            emoji: profile.emoji.clone(),
        }
    }
}

/// Output of the classifier: an assigned personality and how sure it is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonalityAnalysis {
    pub personality: Personality,
    /// Percentage in [0, 100].
    pub confidence: u8,
}

/// Collect string-like items into a label set.
pub fn label_set<I, S>(items: I) -> BTreeSet<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    items.into_iter().map(Into::into).collect()
}
