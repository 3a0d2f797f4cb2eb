//! Category → category base affinity.
//!
//! The table is sparse and direction-sensitive: an entry may exist for
//! (A → B) with nothing stored for (B → A). Lookup tries the directed pair,
//! then the reverse pair, then falls back to [`DEFAULT_AFFINITY`], which makes
//! the effective relation symmetric.

use rustc_hash::FxHashMap;
use tracing::{debug, warn};

use cryptomatch_core::constants::DEFAULT_AFFINITY;
use cryptomatch_core::models::PersonalityCategory;

use PersonalityCategory::*;

/// Sparse directed affinity table with symmetric-fallback lookup.
#[derive(Debug, Clone, Default)]
pub struct AffinityMatrix {
    entries: FxHashMap<(PersonalityCategory, PersonalityCategory), u8>,
}

impl AffinityMatrix {
    /// A matrix with no entries: every pair resolves to the default.
    pub fn empty() -> Self {
        Self::default()
    }

    /// The reference table.
    ///
    /// Stablecoin, altcoin, whale and shitcoin archetypes have no self entry
    /// and resolve to the default when paired with themselves.
    pub fn builtin() -> Self {
        let matrix = Self::from_entries([
            (BitcoinMaxi, BitcoinMaxi, 95),
            (BitcoinMaxi, DefiDegen, 30),
            (BitcoinMaxi, NftCollector, 25),
            (BitcoinMaxi, MemeLord, 10),
            (BitcoinMaxi, StablecoinSafe, 70),
            (BitcoinMaxi, AltcoinHunter, 20),
            (BitcoinMaxi, Whale, 85),
            (BitcoinMaxi, ShitcoinSurfer, 5),
            (DefiDegen, DefiDegen, 90),
            (DefiDegen, NftCollector, 60),
            (DefiDegen, AltcoinHunter, 75),
            (DefiDegen, ShitcoinSurfer, 80),
            (NftCollector, NftCollector, 95),
            (NftCollector, Whale, 70),
            (MemeLord, MemeLord, 100),
            (MemeLord, ShitcoinSurfer, 90),
            (MemeLord, DefiDegen, 65),
        ]);
        debug!(
            entries = matrix.len(),
            missing_self = ?matrix.missing_self_affinity(),
            "built affinity matrix"
        );
        matrix
    }

    /// Build from directed `(from, to, percent)` entries.
    /// Percentages above 100 are clamped. A later entry for the same pair,
    /// in either direction, replaces an earlier one.
    pub fn from_entries(
        entries: impl IntoIterator<Item = (PersonalityCategory, PersonalityCategory, u8)>,
    ) -> Self {
        let mut matrix = Self::empty();
        for (from, to, value) in entries {
            matrix.insert(from, to, value);
        }
        matrix
    }

    /// Builder-style insert.
    pub fn with_entry(mut self, from: PersonalityCategory, to: PersonalityCategory, value: u8) -> Self {
        self.insert(from, to, value);
        self
    }

    /// Both stored directions of a pair always hold the same value.
    fn insert(&mut self, from: PersonalityCategory, to: PersonalityCategory, value: u8) {
        let value = value.min(100);
        if from != to {
            if let Some(reverse) = self.entries.get_mut(&(to, from)) {
                if *reverse != value {
                    warn!(
                        %from,
                        %to,
                        previous = *reverse,
                        value,
                        "conflicting reverse affinity entry replaced"
                    );
                    *reverse = value;
                }
            }
        }
        self.entries.insert((from, to), value);
    }

    /// Stored value for exactly (from → to), ignoring the reverse direction.
    pub fn directed(&self, from: PersonalityCategory, to: PersonalityCategory) -> Option<u8> {
        self.entries.get(&(from, to)).copied()
    }

    /// Base affinity in [0, 100].
    ///
    /// Forward entry, else reverse entry, else [`DEFAULT_AFFINITY`].
    pub fn base_affinity(&self, a: PersonalityCategory, b: PersonalityCategory) -> u8 {
        self.directed(a, b)
            .or_else(|| self.directed(b, a))
            .unwrap_or(DEFAULT_AFFINITY)
    }

    /// Categories whose self-pair is not stored and falls back to the default.
    pub fn missing_self_affinity(&self) -> Vec<PersonalityCategory> {
        PersonalityCategory::ALL
            .iter()
            .copied()
            .filter(|c| self.directed(*c, *c).is_none())
            .collect()
    }

    /// Number of stored directed entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn forward_entry_wins() {
        let m = AffinityMatrix::builtin();
        assert_eq!(m.base_affinity(BitcoinMaxi, Whale), 85);
    }

    #[test]
    fn reverse_entry_is_used_when_forward_missing() {
        let m = AffinityMatrix::builtin();
        assert_eq!(m.directed(Whale, BitcoinMaxi), None);
        assert_eq!(m.base_affinity(Whale, BitcoinMaxi), 85);
        assert_eq!(m.base_affinity(ShitcoinSurfer, MemeLord), 90);
    }

    #[test]
    fn one_directional_entry_resolves_in_both_orders() {
        // Stored only as MemeLord -> DefiDegen.
        let m = AffinityMatrix::builtin();
        assert_eq!(m.directed(DefiDegen, MemeLord), None);
        assert_eq!(m.base_affinity(DefiDegen, MemeLord), 65);
        assert_eq!(m.base_affinity(MemeLord, DefiDegen), 65);
    }

    #[test]
    fn reverse_lookup_applies_even_when_row_exists() {
        // DefiDegen has a row, but no DefiDegen -> MemeLord cell.
        let m = AffinityMatrix::builtin();
        assert!(m.directed(DefiDegen, DefiDegen).is_some());
        assert_eq!(m.base_affinity(DefiDegen, MemeLord), 65);
    }

    #[test]
    fn unspecified_pair_defaults_to_fifty() {
        let m = AffinityMatrix::builtin();
        assert_eq!(m.base_affinity(StablecoinSafe, AltcoinHunter), DEFAULT_AFFINITY);
        assert_eq!(m.base_affinity(Whale, Whale), DEFAULT_AFFINITY);
    }

    #[test]
    fn builtin_self_affinity_gaps_are_known() {
        let m = AffinityMatrix::builtin();
        assert_eq!(
            m.missing_self_affinity(),
            vec![StablecoinSafe, AltcoinHunter, Whale, ShitcoinSurfer]
        );
        assert_eq!(m.base_affinity(MemeLord, MemeLord), 100);
    }

    #[test]
    fn conflicting_reverse_entry_keeps_lookup_symmetric() {
        let m = AffinityMatrix::empty()
            .with_entry(Whale, MemeLord, 10)
            .with_entry(MemeLord, Whale, 90);
        assert_eq!(m.base_affinity(Whale, MemeLord), 90);
        assert_eq!(m.base_affinity(MemeLord, Whale), 90);
        assert_eq!(m.directed(Whale, MemeLord), Some(90));
    }

    #[test]
    fn conflicting_entries_in_one_batch_resolve_to_the_later() {
        let m = AffinityMatrix::from_entries([
            (DefiDegen, Whale, 40),
            (Whale, DefiDegen, 75),
        ]);
        assert_eq!(m.base_affinity(DefiDegen, Whale), 75);
        assert_eq!(m.base_affinity(Whale, DefiDegen), 75);
    }

    #[test]
    fn builtin_table_has_no_conflicting_directions() {
        let builtin = AffinityMatrix::builtin();
        for a in PersonalityCategory::ALL {
            for b in PersonalityCategory::ALL {
                if let (Some(x), Some(y)) = (builtin.directed(a, b), builtin.directed(b, a)) {
                    assert_eq!(x, y, "{a} / {b}");
                }
            }
        }
    }

    #[test]
    fn values_above_one_hundred_are_clamped() {
        let m = AffinityMatrix::empty().with_entry(Whale, Whale, 250);
        assert_eq!(m.base_affinity(Whale, Whale), 100);
    }

    #[test]
    fn empty_matrix_defaults_everything() {
        let m = AffinityMatrix::empty();
        assert!(m.is_empty());
        for a in PersonalityCategory::ALL {
            for b in PersonalityCategory::ALL {
                assert_eq!(m.base_affinity(a, b), DEFAULT_AFFINITY);
            }
        }
    }
}
