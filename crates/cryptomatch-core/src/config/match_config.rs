//! Top-level CryptoMatch configuration with layered resolution.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::warn;

use super::{MatchingConfig, RandomConfig, ScoringConfig};
use crate::errors::ConfigError;

/// Project config file name, looked up in the root passed to [`MatchConfig::load`].
pub const PROJECT_CONFIG_FILE: &str = "cryptomatch.toml";

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Explicit overrides (applied via `apply_overrides`)
/// 2. Environment variables (`CRYPTOMATCH_*`)
/// 3. Project config (`cryptomatch.toml` in the project root)
/// 4. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct MatchConfig {
    pub scoring: ScoringConfig,
    pub matching: MatchingConfig,
    pub random: RandomConfig,
}

/// Override arguments supplied by the embedding application.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub default_top_n: Option<usize>,
    pub parallel_threshold: Option<usize>,
    pub seed: Option<u64>,
}

impl MatchConfig {
    /// Load configuration with layered resolution, then validate it.
    pub fn load(root: &Path, overrides: Option<&ConfigOverrides>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        let project_config_path = root.join(PROJECT_CONFIG_FILE);
        if project_config_path.exists() {
            Self::merge_toml_file(&mut config, &project_config_path)?;
        }

        Self::apply_env_overrides(&mut config);

        if let Some(overrides) = overrides {
            Self::apply_overrides(&mut config, overrides);
        }

        Self::validate(&config)?;

        Ok(config)
    }

    /// Load configuration from a TOML string (for testing).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })?;
        Self::validate(&config)?;
        Ok(config)
    }

    /// Validate the configuration values.
    pub fn validate(config: &MatchConfig) -> Result<(), ConfigError> {
        if let Some(ref weights) = config.scoring.weights {
            if let Err(e) = weights.validate() {
                warn!(error = %e, "rejecting configured scoring weights");
                return Err(e);
            }
        }
        if config.matching.default_top_n == Some(0) {
            return Err(ConfigError::ValidationFailed {
                field: "matching.default_top_n".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        if config.matching.parallel_threshold == Some(0) {
            return Err(ConfigError::ValidationFailed {
                field: "matching.parallel_threshold".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        Ok(())
    }

    /// Merge a TOML file into the existing config.
    /// Unknown keys are silently ignored (forward-compatible).
    fn merge_toml_file(config: &mut MatchConfig, path: &Path) -> Result<(), ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        let file_config: MatchConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::merge(config, &file_config);
        Ok(())
    }

    /// Merge `other` into `base`; `Some` values in `other` win.
    fn merge(base: &mut MatchConfig, other: &MatchConfig) {
        if other.scoring.weights.is_some() {
            base.scoring.weights = other.scoring.weights.clone();
        }
        if other.matching.default_top_n.is_some() {
            base.matching.default_top_n = other.matching.default_top_n;
        }
        if other.matching.parallel_threshold.is_some() {
            base.matching.parallel_threshold = other.matching.parallel_threshold;
        }
        if other.random.seed.is_some() {
            base.random.seed = other.random.seed;
        }
    }

    /// Apply environment variable overrides.
    /// Pattern: `CRYPTOMATCH_MATCHING_DEFAULT_TOP_N`, `CRYPTOMATCH_RANDOM_SEED`, etc.
    fn apply_env_overrides(config: &mut MatchConfig) {
        if let Ok(val) = std::env::var("CRYPTOMATCH_MATCHING_DEFAULT_TOP_N") {
            if let Ok(v) = val.parse::<usize>() {
                config.matching.default_top_n = Some(v);
            }
        }
        if let Ok(val) = std::env::var("CRYPTOMATCH_MATCHING_PARALLEL_THRESHOLD") {
            if let Ok(v) = val.parse::<usize>() {
                config.matching.parallel_threshold = Some(v);
            }
        }
        if let Ok(val) = std::env::var("CRYPTOMATCH_RANDOM_SEED") {
            if let Ok(v) = val.parse::<u64>() {
                config.random.seed = Some(v);
            }
        }
    }

    /// Apply explicit overrides (highest priority).
    fn apply_overrides(config: &mut MatchConfig, overrides: &ConfigOverrides) {
        if let Some(v) = overrides.default_top_n {
            config.matching.default_top_n = Some(v);
        }
        if let Some(v) = overrides.parallel_threshold {
            config.matching.parallel_threshold = Some(v);
        }
        if let Some(v) = overrides.seed {
            config.random.seed = Some(v);
        }
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }
}
