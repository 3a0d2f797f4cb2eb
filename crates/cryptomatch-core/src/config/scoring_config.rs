//! Scoring configuration.

use serde::{Deserialize, Serialize};

use crate::constants::{
    WEIGHT_PERSONALITY_BASE, WEIGHT_RESIDUAL_SIGNAL, WEIGHT_RISK_TOLERANCE, WEIGHT_SUM_TOLERANCE,
    WEIGHT_TOKEN_OVERLAP, WEIGHT_TRAIT_SIMILARITY,
};
use crate::errors::ConfigError;

/// Configuration for the scoring engine.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ScoringConfig {
    /// Weight override. `None` uses the compiled constants.
    pub weights: Option<WeightsConfig>,
}

impl ScoringConfig {
    /// Returns the effective weights, defaulting to the compiled constants.
    pub fn effective_weights(&self) -> WeightsConfig {
        self.weights.clone().unwrap_or_default()
    }
}

/// The five factor weights. Must sum to 1.0.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WeightsConfig {
    pub personality_base: f64,
    pub token_overlap: f64,
    pub risk_tolerance: f64,
    pub trait_similarity: f64,
    pub residual_signal: f64,
}

impl Default for WeightsConfig {
    fn default() -> Self {
        Self {
            personality_base: WEIGHT_PERSONALITY_BASE,
            token_overlap: WEIGHT_TOKEN_OVERLAP,
            risk_tolerance: WEIGHT_RISK_TOLERANCE,
            trait_similarity: WEIGHT_TRAIT_SIMILARITY,
            residual_signal: WEIGHT_RESIDUAL_SIGNAL,
        }
    }
}

impl WeightsConfig {
    fn values(&self) -> [(&'static str, f64); 5] {
        [
            ("personality_base", self.personality_base),
            ("token_overlap", self.token_overlap),
            ("risk_tolerance", self.risk_tolerance),
            ("trait_similarity", self.trait_similarity),
            ("residual_signal", self.residual_signal),
        ]
    }

    pub fn sum(&self) -> f64 {
        self.values().iter().map(|(_, w)| w).sum()
    }

    /// Every weight finite and non-negative, total within 1e-6 of 1.0.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let sum = self.sum();
        if let Some((name, w)) = self
            .values()
            .into_iter()
            .find(|(_, w)| !w.is_finite() || *w < 0.0)
        {
            return Err(ConfigError::InvalidWeights {
                sum,
                message: format!("{name} = {w} must be a finite, non-negative number"),
            });
        }
        if (sum - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
            return Err(ConfigError::InvalidWeights {
                sum,
                message: "weights must sum to 1.0".to_string(),
            });
        }
        Ok(())
    }
}
