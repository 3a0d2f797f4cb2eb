//! MatchPipeline: classify → score → narrate → render.
//!
//! The scoring stage is pure data. Narrative and rendering are injected
//! collaborators that only ever see a finished [`MatchResult`].

use tracing::{debug, info};

use cryptomatch_core::errors::MatchError;
use cryptomatch_core::models::{MatchReport, MatchResult, PersonalityAnalysis, PersonalityProfile, RenderedArtifact};
use cryptomatch_core::pipeline_span;
use cryptomatch_core::traits::{Classifier, NarrativeGenerator, RandomSource, Renderer};

use crate::scoring::ScoringEngine;

pub struct MatchPipeline<'a> {
    engine: ScoringEngine<'a>,
    classifier: &'a dyn Classifier,
    narrator: &'a dyn NarrativeGenerator,
    renderer: &'a dyn Renderer,
}

impl<'a> MatchPipeline<'a> {
    pub fn new(
        engine: ScoringEngine<'a>,
        classifier: &'a dyn Classifier,
        narrator: &'a dyn NarrativeGenerator,
        renderer: &'a dyn Renderer,
    ) -> Self {
        Self {
            engine,
            classifier,
            narrator,
            renderer,
        }
    }

    /// Run every stage for two users. The first collaborator failure aborts
    /// the run; nothing is partially returned.
    pub fn run(
        &self,
        user_id: &str,
        match_id: &str,
        rng: &mut dyn RandomSource,
    ) -> Result<MatchReport, MatchError> {
        let _span = pipeline_span!(user_id, match_id).entered();

        let user = self.classifier.classify(user_id, rng)?;
        let matched = self.classifier.classify(match_id, rng)?;
        debug!(
            user = %user.personality.category,
            matched = %matched.personality.category,
            "classified users"
        );

        self.present(user, matched, rng)
    }

    /// Score two already-classified users and run the downstream stages.
    pub fn present(
        &self,
        user: PersonalityAnalysis,
        matched: PersonalityAnalysis,
        rng: &mut dyn RandomSource,
    ) -> Result<MatchReport, MatchError> {
        let result = self
            .engine
            .score_pair(&user.personality, &matched.personality, rng);

        let (display_text, artifact) = self.describe(
            &user.personality.profile,
            &matched.personality.profile,
            &result,
        )?;

        info!(
            total_score = result.total_score,
            tier = result.tier.as_str(),
            "match report ready"
        );

        Ok(MatchReport {
            user,
            matched,
            result,
            display_text,
            artifact,
        })
    }

    fn describe(
        &self,
        profile1: &PersonalityProfile,
        profile2: &PersonalityProfile,
        result: &MatchResult,
    ) -> Result<(String, RenderedArtifact), MatchError> {
        let text = self
            .narrator
            .narrate(profile1, profile2, result.total_score, result.tier)?;
        let artifact =
            self.renderer
                .render(profile1, profile2, result.total_score, result.tier, &text)?;
        Ok((text, artifact))
    }
}
