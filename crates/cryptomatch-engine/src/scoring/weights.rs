use cryptomatch_core::config::WeightsConfig;
use cryptomatch_core::errors::ConfigError;

/// Validated factor weights. Only constructible through [`ScoringWeights::new`],
/// so a value of this type always sums to 1.0 within tolerance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoringWeights {
    personality_base: f64,
    token_overlap: f64,
    risk_tolerance: f64,
    trait_similarity: f64,
    residual_signal: f64,
}

impl ScoringWeights {
    /// Validate and freeze a weight set.
    pub fn new(config: &WeightsConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            personality_base: config.personality_base,
            token_overlap: config.token_overlap,
            risk_tolerance: config.risk_tolerance,
            trait_similarity: config.trait_similarity,
            residual_signal: config.residual_signal,
        })
    }

    /// The compiled 0.30 / 0.25 / 0.20 / 0.15 / 0.10 weights.
    pub fn standard() -> Result<Self, ConfigError> {
        Self::new(&WeightsConfig::default())
    }

    pub fn personality_base(&self) -> f64 {
        self.personality_base
    }

    pub fn token_overlap(&self) -> f64 {
        self.token_overlap
    }

    pub fn risk_tolerance(&self) -> f64 {
        self.risk_tolerance
    }

    pub fn trait_similarity(&self) -> f64 {
        self.trait_similarity
    }

    pub fn residual_signal(&self) -> f64 {
        self.residual_signal
    }

    pub fn sum(&self) -> f64 {
        self.personality_base
            + self.token_overlap
            + self.risk_tolerance
            + self.trait_similarity
            + self.residual_signal
    }
}
