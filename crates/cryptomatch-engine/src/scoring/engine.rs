//! ScoringEngine: five factors → weighted total → rounded score → tier.

use tracing::debug;

use cryptomatch_core::config::ScoringConfig;
use cryptomatch_core::constants::TOTAL_SNAP_DECIMALS;
use cryptomatch_core::errors::ConfigError;
use cryptomatch_core::models::{
    CompatibilityFactors, MatchResult, MatchTier, Personality, PersonalityCategory,
    PersonalityProfile, PersonalitySummary, ScoreBreakdown, ScoreComponent,
};
use cryptomatch_core::score_span;
use cryptomatch_core::traits::RandomSource;

use crate::affinity::AffinityMatrix;
use crate::catalog::PersonalityCatalog;
use crate::factors::{self, residual, trait_similarity};

use super::weights::ScoringWeights;

/// Scores profile pairs. Borrows the catalog and affinity matrix, which are
/// built once and shared read-only across every scoring call.
#[derive(Debug, Clone)]
pub struct ScoringEngine<'a> {
    catalog: &'a PersonalityCatalog,
    affinity: &'a AffinityMatrix,
    weights: ScoringWeights,
}

impl<'a> ScoringEngine<'a> {
    pub fn new(
        catalog: &'a PersonalityCatalog,
        affinity: &'a AffinityMatrix,
        weights: ScoringWeights,
    ) -> Self {
        Self {
            catalog,
            affinity,
            weights,
        }
    }

    /// Engine with the compiled weights.
    pub fn standard(
        catalog: &'a PersonalityCatalog,
        affinity: &'a AffinityMatrix,
    ) -> Result<Self, ConfigError> {
        Ok(Self::new(catalog, affinity, ScoringWeights::standard()?))
    }

    /// Engine with the configured weights. Fails if they do not sum to 1.0.
    pub fn from_config(
        catalog: &'a PersonalityCatalog,
        affinity: &'a AffinityMatrix,
        config: &ScoringConfig,
    ) -> Result<Self, ConfigError> {
        let weights = ScoringWeights::new(&config.effective_weights())?;
        Ok(Self::new(catalog, affinity, weights))
    }

    pub fn catalog(&self) -> &'a PersonalityCatalog {
        self.catalog
    }

    pub fn affinity(&self) -> &'a AffinityMatrix {
        self.affinity
    }

    pub fn weights(&self) -> &ScoringWeights {
        &self.weights
    }

    /// Deterministic factors for a pair.
    pub fn factors(
        &self,
        profile1: &PersonalityProfile,
        profile2: &PersonalityProfile,
        category1: PersonalityCategory,
        category2: PersonalityCategory,
    ) -> CompatibilityFactors {
        factors::compatibility_factors(self.affinity, category1, category2, profile1, profile2)
    }

    /// Score a pair, drawing the residual signal from `rng`.
    pub fn score<R: RandomSource + ?Sized>(
        &self,
        profile1: &PersonalityProfile,
        profile2: &PersonalityProfile,
        category1: PersonalityCategory,
        category2: PersonalityCategory,
        rng: &mut R,
    ) -> MatchResult {
        let residual = residual::draw(rng);
        self.score_with_residual(profile1, profile2, category1, category2, residual)
    }

    /// Score two categorized personalities.
    pub fn score_pair<R: RandomSource + ?Sized>(
        &self,
        first: &Personality,
        second: &Personality,
        rng: &mut R,
    ) -> MatchResult {
        self.score(
            &first.profile,
            &second.profile,
            first.category,
            second.category,
            rng,
        )
    }

    /// Score two categories using their catalog profiles.
    pub fn score_categories<R: RandomSource + ?Sized>(
        &self,
        category1: PersonalityCategory,
        category2: PersonalityCategory,
        rng: &mut R,
    ) -> MatchResult {
        self.score(
            self.catalog.profile_of(category1),
            self.catalog.profile_of(category2),
            category1,
            category2,
            rng,
        )
    }

    /// Score a pair with an already-drawn residual. Pure.
    pub fn score_with_residual(
        &self,
        profile1: &PersonalityProfile,
        profile2: &PersonalityProfile,
        category1: PersonalityCategory,
        category2: PersonalityCategory,
        residual: u8,
    ) -> MatchResult {
        let _span = score_span!(category1, category2).entered();

        let factors = self.factors(profile1, profile2, category1, category2);
        let traits = trait_similarity::calculate(&profile1.traits, &profile2.traits);

        let w = &self.weights;
        let breakdown = ScoreBreakdown {
            personality_base: ScoreComponent::new(
                f64::from(factors.base_affinity),
                w.personality_base(),
            ),
            token_overlap: ScoreComponent::new(factors.token_overlap_pct, w.token_overlap()),
            risk_tolerance: ScoreComponent::new(
                f64::from(factors.risk_match_pct),
                w.risk_tolerance(),
            ),
            trait_similarity: ScoreComponent::new(traits, w.trait_similarity()),
            residual_signal: ScoreComponent::new(f64::from(residual), w.residual_signal()),
        };

        let total_score = round_total(breakdown.weighted_total());
        let tier = MatchTier::from_score(total_score);

        debug!(
            %category1,
            %category2,
            total_score,
            tier = tier.as_str(),
            "scored pair"
        );

        MatchResult {
            total_score,
            tier,
            breakdown,
            common_tokens: factors.common_tokens,
            personality1: PersonalitySummary::of(category1, profile1),
            personality2: PersonalitySummary::of(category2, profile2),
        }
    }
}

/// Round a weighted total to an integer score in [0, 100].
///
/// The total is first snapped to 9 decimal places so float error cannot
/// move a value off a .5 tie, then rounded half away from zero, then clamped.
pub fn round_total(weighted: f64) -> u8 {
    let scale = 10f64.powi(TOTAL_SNAP_DECIMALS);
    let snapped = (weighted * scale).round() / scale;
    // NaN casts to 0.
    snapped.round().clamp(0.0, 100.0) as u8
}
