//! # cryptomatch-engine
//!
//! Compatibility scoring for personality profiles: the built-in catalog, the
//! affinity matrix, five independent factors, weighted scoring with tier
//! classification, and top-N ranking of candidates.

pub mod affinity;
pub mod catalog;
pub mod classifier;
pub mod factors;
pub mod matchmaking;
pub mod pipeline;
pub mod scoring;

pub use affinity::AffinityMatrix;
pub use catalog::PersonalityCatalog;
pub use classifier::PersonalityAnalyzer;
pub use matchmaking::Matchmaker;
pub use pipeline::MatchPipeline;
pub use scoring::{ScoringEngine, ScoringWeights};
