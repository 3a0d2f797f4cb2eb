//! Reference classifier: assigns personalities at random.
//!
//! Stands in for real signal extraction. Swap in another [`Classifier`]
//! implementation without touching the engine.

use cryptomatch_core::constants::{ANALYSIS_CONFIDENCE_MAX, ANALYSIS_CONFIDENCE_MIN};
use cryptomatch_core::errors::CollaboratorError;
use cryptomatch_core::models::PersonalityAnalysis;
use cryptomatch_core::traits::{Classifier, RandomSource};

use crate::catalog::PersonalityCatalog;

#[derive(Debug, Clone, Copy)]
pub struct PersonalityAnalyzer<'a> {
    catalog: &'a PersonalityCatalog,
}

impl<'a> PersonalityAnalyzer<'a> {
    pub fn new(catalog: &'a PersonalityCatalog) -> Self {
        Self { catalog }
    }

    /// Draw a category, then a confidence in [85, 99]. Two draws from `rng`.
    pub fn analyze<R: RandomSource + ?Sized>(&self, rng: &mut R) -> PersonalityAnalysis {
        let category = self.catalog.random_category(rng);
        // ANALYSIS_CONFIDENCE_MAX < 256
        let confidence =
            rng.next_in_range(ANALYSIS_CONFIDENCE_MIN, ANALYSIS_CONFIDENCE_MAX) as u8;
        PersonalityAnalysis {
            personality: self.catalog.personality(category),
            confidence,
        }
    }
}

impl Classifier for PersonalityAnalyzer<'_> {
    fn classify(
        &self,
        _user_id: &str,
        rng: &mut dyn RandomSource,
    ) -> Result<PersonalityAnalysis, CollaboratorError> {
        Ok(self.analyze(rng))
    }
}
