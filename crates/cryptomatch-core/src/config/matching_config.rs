//! Matchmaking configuration.

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_PARALLEL_THRESHOLD, DEFAULT_TOP_N};

/// Configuration for candidate ranking.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct MatchingConfig {
    /// Matches returned when the caller does not ask for a count. Default: 3.
    pub default_top_n: Option<usize>,
    /// Candidate count at which scoring runs on the rayon pool. Default: 64.
    pub parallel_threshold: Option<usize>,
}

impl MatchingConfig {
    pub fn effective_default_top_n(&self) -> usize {
        self.default_top_n.unwrap_or(DEFAULT_TOP_N)
    }

    pub fn effective_parallel_threshold(&self) -> usize {
        self.parallel_threshold.unwrap_or(DEFAULT_PARALLEL_THRESHOLD)
    }
}
