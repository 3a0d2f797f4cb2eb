//! Configuration system for CryptoMatch.
//! TOML-based, 3-layer resolution: overrides > env > project > defaults.

pub mod match_config;
pub mod matching_config;
pub mod random_config;
pub mod scoring_config;

pub use match_config::{ConfigOverrides, MatchConfig};
pub use matching_config::MatchingConfig;
pub use random_config::RandomConfig;
pub use scoring_config::{ScoringConfig, WeightsConfig};
