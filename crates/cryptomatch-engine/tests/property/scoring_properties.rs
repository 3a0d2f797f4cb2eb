use std::collections::BTreeSet;

use cryptomatch_core::models::*;
use cryptomatch_core::traits::{FixedSequence, RngSource};
use cryptomatch_engine::factors::{token_overlap, trait_similarity};
use cryptomatch_engine::{AffinityMatrix, Matchmaker, PersonalityCatalog, ScoringEngine};
use proptest::prelude::*;

fn category() -> impl Strategy<Value = PersonalityCategory> {
    (0..PersonalityCategory::COUNT).prop_map(|i| PersonalityCategory::ALL[i])
}

fn risk() -> impl Strategy<Value = RiskLevel> {
    prop_oneof![
        Just(RiskLevel::DiamondHands),
        Just(RiskLevel::PaperHands),
        Just(RiskLevel::Balanced),
    ]
}

fn labels() -> impl Strategy<Value = BTreeSet<String>> {
    prop::collection::btree_set("[A-F]{1,2}", 0..6)
}

fn profile() -> impl Strategy<Value = PersonalityProfile> {
    (labels(), labels(), risk()).prop_map(|(traits, tokens, risk_level)| PersonalityProfile {
        title: "Generated".to_string(),
        description: String::new(),
        traits,
        tokens,
        risk_level,
        emoji: "?".to_string(),
        tagline: String::new(),
    })
}

fn personality() -> impl Strategy<Value = Personality> {
    (category(), profile()).prop_map(|(c, p)| Personality::new(c, p))
}

proptest! {
    #[test]
    fn total_is_bounded_and_tier_consistent(
        a in personality(),
        b in personality(),
        residual in 60u32..=95,
    ) {
        let catalog = PersonalityCatalog::builtin();
        let affinity = AffinityMatrix::builtin();
        let engine = ScoringEngine::standard(&catalog, &affinity).unwrap();
        let result = engine.score_pair(&a, &b, &mut FixedSequence::constant(residual));
        prop_assert!(result.total_score <= 100);
        prop_assert_eq!(result.tier, MatchTier::from_score(result.total_score));
    }

    #[test]
    fn scoring_is_symmetric_for_equal_residuals(
        a in personality(),
        b in personality(),
        residual in 60u32..=95,
    ) {
        let catalog = PersonalityCatalog::builtin();
        let affinity = AffinityMatrix::builtin();
        let engine = ScoringEngine::standard(&catalog, &affinity).unwrap();
        let ab = engine.score_pair(&a, &b, &mut FixedSequence::constant(residual));
        let ba = engine.score_pair(&b, &a, &mut FixedSequence::constant(residual));
        prop_assert_eq!(ab.total_score, ba.total_score);
        prop_assert_eq!(ab.common_tokens, ba.common_tokens);
    }

    #[test]
    fn affinity_lookup_is_symmetric(a in category(), b in category()) {
        let affinity = AffinityMatrix::builtin();
        prop_assert_eq!(affinity.base_affinity(a, b), affinity.base_affinity(b, a));
        prop_assert!(affinity.base_affinity(a, b) <= 100);
    }

    #[test]
    fn custom_affinity_tables_stay_symmetric(
        entries in prop::collection::vec((category(), category(), 0u8..=255), 0..40),
        a in category(),
        b in category(),
    ) {
        let affinity = AffinityMatrix::from_entries(entries);
        prop_assert_eq!(affinity.base_affinity(a, b), affinity.base_affinity(b, a));
        prop_assert!(affinity.base_affinity(a, b) <= 100);
    }

    #[test]
    fn token_overlap_is_a_percentage(a in labels(), b in labels()) {
        let pct = token_overlap::calculate(&a, &b);
        prop_assert!((0.0..=100.0).contains(&pct));
        if a.is_empty() || b.is_empty() {
            prop_assert_eq!(pct, 0.0);
        }
    }

    #[test]
    fn trait_similarity_is_neutral_on_empty(a in labels(), b in labels()) {
        let pct = trait_similarity::calculate(&a, &b);
        prop_assert!((0.0..=100.0).contains(&pct));
        if a.is_empty() || b.is_empty() {
            prop_assert_eq!(pct, 50.0);
        }
    }

    #[test]
    fn ranking_is_sorted_and_sized(
        subject in personality(),
        candidates in prop::collection::vec(personality(), 0..20),
        top_n in 0usize..25,
        seed in any::<u64>(),
    ) {
        let catalog = PersonalityCatalog::builtin();
        let affinity = AffinityMatrix::builtin();
        let matchmaker = Matchmaker::new(ScoringEngine::standard(&catalog, &affinity).unwrap());
        let ranked = matchmaker.find_matches(&subject, &candidates, top_n, &mut RngSource::seeded(seed));

        prop_assert_eq!(ranked.len(), top_n.min(candidates.len()));
        prop_assert!(ranked
            .windows(2)
            .all(|w| w[0].result.total_score >= w[1].result.total_score));
    }

    #[test]
    fn parallel_ranking_matches_sequential(
        subject in personality(),
        candidates in prop::collection::vec(personality(), 1..30),
        seed in any::<u64>(),
    ) {
        let catalog = PersonalityCatalog::builtin();
        let affinity = AffinityMatrix::builtin();
        let engine = ScoringEngine::standard(&catalog, &affinity).unwrap();
        let sequential = Matchmaker::new(engine.clone()).with_parallel_threshold(usize::MAX);
        let parallel = Matchmaker::new(engine).with_parallel_threshold(1);
        let n = candidates.len();

        let a = sequential.find_matches(&subject, &candidates, n, &mut RngSource::seeded(seed));
        let b = parallel.find_matches(&subject, &candidates, n, &mut RngSource::seeded(seed));
        prop_assert_eq!(a, b);
    }
}
