//! Independent compatibility factors.
//!
//! Each factor is a pure function of a profile pair (plus the affinity matrix
//! or the random source where noted) and returns a value in [0, 100].

pub mod residual;
pub mod risk_match;
pub mod token_overlap;
pub mod trait_similarity;

use cryptomatch_core::models::{CompatibilityFactors, PersonalityCategory, PersonalityProfile};

use crate::affinity::AffinityMatrix;

/// Compute the deterministic factors for a pair: affinity, token overlap,
/// risk match and the shared tokens. Trait similarity and the residual
/// are computed separately by the scoring engine.
pub fn compatibility_factors(
    affinity: &AffinityMatrix,
    category1: PersonalityCategory,
    category2: PersonalityCategory,
    profile1: &PersonalityProfile,
    profile2: &PersonalityProfile,
) -> CompatibilityFactors {
    CompatibilityFactors {
        base_affinity: affinity.base_affinity(category1, category2),
        token_overlap_pct: token_overlap::calculate(&profile1.tokens, &profile2.tokens),
        risk_match_pct: risk_match::calculate(profile1.risk_level, profile2.risk_level),
        common_tokens: token_overlap::common(&profile1.tokens, &profile2.tokens),
    }
}
