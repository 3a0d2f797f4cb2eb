//! # cryptomatch-core
//!
//! Foundation crate for the CryptoMatch compatibility engine.
//! Defines the personality taxonomy, match result types, traits, errors,
//! config, tracing, and constants. The engine crate depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod tracing;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::MatchConfig;
pub use errors::{MatchError, MatchErrorCode};
pub use models::{
    MatchResult, MatchTier, Personality, PersonalityCategory, PersonalityProfile, RiskLevel,
    ScoreBreakdown,
};
pub use traits::{FixedSequence, RandomSource, RngSource};
