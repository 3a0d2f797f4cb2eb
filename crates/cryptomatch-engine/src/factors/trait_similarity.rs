use std::collections::BTreeSet;

use cryptomatch_core::constants::NEUTRAL_TRAIT_SIMILARITY;

/// Trait similarity factor (Jaccard index).
///
/// Formula: `|S1 ∩ S2| / |S1 ∪ S2| × 100`
/// Either set empty → 50: missing data is neutral, unlike disjoint traits (0).
pub fn calculate(traits1: &BTreeSet<String>, traits2: &BTreeSet<String>) -> f64 {
    if traits1.is_empty() || traits2.is_empty() {
        return NEUTRAL_TRAIT_SIMILARITY;
    }
    let intersection = traits1.intersection(traits2).count();
    let union = traits1.union(traits2).count();
    intersection as f64 / union as f64 * 100.0
}
