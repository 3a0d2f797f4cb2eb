//! Data model: the personality taxonomy and the values the engine produces.

pub mod category;
pub mod factors;
pub mod match_result;
pub mod profile;
pub mod report;

pub use category::{PersonalityCategory, RiskLevel};
pub use factors::{CompatibilityFactors, ScoreBreakdown, ScoreComponent};
pub use match_result::{MatchResult, MatchTier, RankedMatch};
pub use profile::{label_set, Personality, PersonalityAnalysis, PersonalityProfile, PersonalitySummary};
pub use report::{MatchReport, RenderedArtifact};
