//! Weighted aggregation of the five factors into a single score.

pub mod engine;
pub mod weights;

pub use engine::{round_total, ScoringEngine};
pub use weights::ScoringWeights;
