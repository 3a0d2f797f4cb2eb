use std::collections::BTreeSet;

/// Token overlap factor.
///
/// Formula: `|T1 ∩ T2| / max(|T1|, |T2|) × 100`
/// Range: 0 – 100. Either set empty → 0.
pub fn calculate(tokens1: &BTreeSet<String>, tokens2: &BTreeSet<String>) -> f64 {
    if tokens1.is_empty() || tokens2.is_empty() {
        return 0.0;
    }
    let shared = tokens1.intersection(tokens2).count();
    let larger = tokens1.len().max(tokens2.len());
    shared as f64 / larger as f64 * 100.0
}

/// Tokens held by both profiles.
pub fn common(tokens1: &BTreeSet<String>, tokens2: &BTreeSet<String>) -> BTreeSet<String> {
    tokens1.intersection(tokens2).cloned().collect()
}
