//! Matchmaker: score a subject against every candidate, rank, keep the top N.

use rayon::prelude::*;
use tracing::{debug, info};

use cryptomatch_core::config::MatchingConfig;
use cryptomatch_core::constants::{DEFAULT_PARALLEL_THRESHOLD, DEFAULT_TOP_N};
use cryptomatch_core::match_span;
use cryptomatch_core::models::{Personality, RankedMatch};
use cryptomatch_core::traits::RandomSource;

use crate::factors::residual;
use crate::scoring::ScoringEngine;

/// Ranks candidates against a subject.
///
/// Residual signals are drawn from the random source once per candidate, in
/// input order, before any scoring starts. Sequential and parallel scoring
/// therefore agree for the same random state.
#[derive(Debug, Clone)]
pub struct Matchmaker<'a> {
    engine: ScoringEngine<'a>,
    default_top_n: usize,
    parallel_threshold: usize,
}

impl<'a> Matchmaker<'a> {
    pub fn new(engine: ScoringEngine<'a>) -> Self {
        Self {
            engine,
            default_top_n: DEFAULT_TOP_N,
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
        }
    }

    pub fn from_config(engine: ScoringEngine<'a>, config: &MatchingConfig) -> Self {
        Self {
            engine,
            default_top_n: config.effective_default_top_n(),
            parallel_threshold: config.effective_parallel_threshold(),
        }
    }

    /// Candidate count at which scoring moves onto the rayon pool.
    pub fn with_parallel_threshold(mut self, threshold: usize) -> Self {
        self.parallel_threshold = threshold.max(1);
        self
    }

    pub fn engine(&self) -> &ScoringEngine<'a> {
        &self.engine
    }

    pub fn default_top_n(&self) -> usize {
        self.default_top_n
    }

    /// Top `top_n` candidates by descending total score.
    ///
    /// Equal scores keep their input order. `top_n == 0` or no candidates
    /// yields an empty result and consumes no randomness.
    pub fn find_matches<R: RandomSource + ?Sized>(
        &self,
        subject: &Personality,
        candidates: &[Personality],
        top_n: usize,
        rng: &mut R,
    ) -> Vec<RankedMatch> {
        let _span = match_span!(subject.category, candidates.len(), top_n).entered();

        if top_n == 0 || candidates.is_empty() {
            debug!("nothing to rank");
            return Vec::new();
        }

        let residuals: Vec<u8> = candidates.iter().map(|_| residual::draw(rng)).collect();

        let parallel = candidates.len() >= self.parallel_threshold;
        let mut ranked: Vec<RankedMatch> = if parallel {
            candidates
                .par_iter()
                .zip(residuals.par_iter())
                .map(|(candidate, residual)| self.rank_one(subject, candidate, *residual))
                .collect()
        } else {
            candidates
                .iter()
                .zip(residuals.iter())
                .map(|(candidate, residual)| self.rank_one(subject, candidate, *residual))
                .collect()
        };

        // Stable: ties keep input order.
        ranked.sort_by(|a, b| b.result.total_score.cmp(&a.result.total_score));
        ranked.truncate(top_n);

        info!(
            candidates = candidates.len(),
            returned = ranked.len(),
            parallel,
            best = ranked.first().map(|m| m.result.total_score),
            "matchmaking complete"
        );

        ranked
    }

    /// [`Self::find_matches`] with the configured default count.
    pub fn find_default_matches<R: RandomSource + ?Sized>(
        &self,
        subject: &Personality,
        candidates: &[Personality],
        rng: &mut R,
    ) -> Vec<RankedMatch> {
        self.find_matches(subject, candidates, self.default_top_n, rng)
    }

    fn rank_one(&self, subject: &Personality, candidate: &Personality, residual: u8) -> RankedMatch {
        let result = self.engine.score_with_residual(
            &subject.profile,
            &candidate.profile,
            subject.category,
            candidate.category,
            residual,
        );
        RankedMatch {
            candidate: candidate.clone(),
            result,
        }
    }
}
