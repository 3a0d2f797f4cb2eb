use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Raw factor values computed for one profile pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompatibilityFactors {
    /// Affinity matrix value, [0, 100].
    pub base_affinity: u8,
    /// Shared tokens relative to the larger token set, [0, 100].
    pub token_overlap_pct: f64,
    /// 100 for the same risk level, 50 otherwise.
    pub risk_match_pct: u8,
    pub common_tokens: BTreeSet<String>,
}

/// One weighted term of a total score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreComponent {
    /// Factor value in [0, 100].
    pub value: f64,
    pub weight: f64,
}

impl ScoreComponent {
    pub fn new(value: f64, weight: f64) -> Self {
        Self { value, weight }
    }

    pub fn weighted(&self) -> f64 {
        self.value * self.weight
    }
}

/// The five named components of a total score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub personality_base: ScoreComponent,
    pub token_overlap: ScoreComponent,
    pub risk_tolerance: ScoreComponent,
    pub trait_similarity: ScoreComponent,
    pub residual_signal: ScoreComponent,
}

impl ScoreBreakdown {
    /// Components with their names, in weight order.
    pub fn components(&self) -> [(&'static str, ScoreComponent); 5] {
        [
            ("personality_base", self.personality_base),
            ("token_overlap", self.token_overlap),
            ("risk_tolerance", self.risk_tolerance),
            ("trait_similarity", self.trait_similarity),
            ("residual_signal", self.residual_signal),
        ]
    }

    /// Unrounded weighted sum.
    pub fn weighted_total(&self) -> f64 {
        self.components().iter().map(|(_, c)| c.weighted()).sum()
    }
}
