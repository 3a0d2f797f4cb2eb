//! The built-in personality catalog.
//!
//! One profile per [`PersonalityCategory`], fixed at construction. Lookup is
//! indexed by the category's position, so it is total over the enumeration.

use cryptomatch_core::models::{label_set, Personality, PersonalityCategory, PersonalityProfile, RiskLevel};
use cryptomatch_core::traits::RandomSource;

/// Immutable registry mapping each category to its profile.
#[derive(Debug, Clone)]
pub struct PersonalityCatalog {
    profiles: [PersonalityProfile; PersonalityCategory::COUNT],
}

impl PersonalityCatalog {
    /// Catalog with the eight reference archetypes.
    pub fn builtin() -> Self {
        Self {
            profiles: PersonalityCategory::ALL.map(builtin_profile),
        }
    }

    /// Catalog with caller-supplied profiles, one per category in
    /// [`PersonalityCategory::ALL`] order.
    pub fn from_profiles(profiles: [PersonalityProfile; PersonalityCategory::COUNT]) -> Self {
        Self { profiles }
    }

    /// Profile of a category. Never fails.
    pub fn profile_of(&self, category: PersonalityCategory) -> &PersonalityProfile {
        &self.profiles[category.index()]
    }

    /// Category and an owned copy of its profile.
    pub fn personality(&self, category: PersonalityCategory) -> Personality {
        Personality::new(category, self.profile_of(category).clone())
    }

    /// Every category, in enumeration order.
    pub fn all_categories(&self) -> &'static [PersonalityCategory] {
        &PersonalityCategory::ALL
    }

    /// `(category, profile)` pairs in enumeration order.
    pub fn entries(&self) -> impl Iterator<Item = (PersonalityCategory, &PersonalityProfile)> {
        PersonalityCategory::ALL.iter().copied().zip(self.profiles.iter())
    }

    /// Uniform draw over the enumeration. Consumes one value from `rng`.
    pub fn random_category<R: RandomSource + ?Sized>(&self, rng: &mut R) -> PersonalityCategory {
        PersonalityCategory::ALL[rng.pick_index(PersonalityCategory::COUNT)]
    }
}

impl Default for PersonalityCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

fn profile(
    title: &str,
    description: &str,
    traits: &[&str],
    tokens: &[&str],
    risk_level: RiskLevel,
    emoji: &str,
    tagline: &str,
) -> PersonalityProfile {
    PersonalityProfile {
        title: title.to_string(),
        description: description.to_string(),
        traits: label_set(traits.iter().copied()),
        tokens: label_set(tokens.iter().copied()),
        risk_level,
        emoji: emoji.to_string(),
        tagline: tagline.to_string(),
    }
}

fn builtin_profile(category: PersonalityCategory) -> PersonalityProfile {
    match category {
        PersonalityCategory::BitcoinMaxi => profile(
            "Bitcoin Maximalist 🟠",
            "BTC is the only true crypto. Everything else is a shitcoin!",
            &["Skeptical of altcoins", "Long-term HODLer", "Believes in sound money"],
            &["BTC", "LIGHTNING"],
            RiskLevel::DiamondHands,
            "🟠",
            "In Bitcoin we trust, everything else is just noise",
        ),
        PersonalityCategory::DefiDegen => profile(
            "DeFi Degenerate 🦄",
            "Lives and breathes yield farming. APY is life!",
            &["Yield farming addict", "Gas fee complainer", "Protocol hopper"],
            &["ETH", "UNI", "AAVE", "COMP", "CRV"],
            RiskLevel::PaperHands,
            "🦄",
            "If it's not earning 1000% APY, I'm not interested",
        ),
        PersonalityCategory::NftCollector => profile(
            "NFT Connoisseur 🎨",
            "Appreciates digital art and exclusive communities",
            &["Art lover", "Community focused", "Status symbol seeker"],
            &["ETH", "PUNK", "BAYC", "MAYC", "AZUKI"],
            RiskLevel::Balanced,
            "🎨",
            "My PFP is worth more than your house",
        ),
        PersonalityCategory::MemeLord => profile(
            "Meme Coin King 🐕",
            "Only invests based on Twitter hype and memes",
            &["Hype chaser", "Shitposter", "FOMO expert"],
            &["DOGE", "SHIB", "PEPE", "BONK", "WIF"],
            RiskLevel::PaperHands,
            "🐕",
            "Wen moon? Wen Lambo? Wen 100x?",
        ),
        PersonalityCategory::StablecoinSafe => profile(
            "Stablecoin Safety Player 💵",
            "Prefers stability over moonshots. Boring but safe!",
            &["Risk averse", "Stable yield seeker", "Crypto traditionalist"],
            &["USDC", "USDT", "DAI"],
            RiskLevel::DiamondHands,
            "💵",
            "3% APY is good enough for me",
        ),
        PersonalityCategory::AltcoinHunter => profile(
            "Altcoin Adventurer 🚀",
            "Searches for the next 100x gem in obscure chains",
            &["Research enthusiast", "Multi-chain user", "Early adopter"],
            &["SOL", "ADA", "DOT", "AVAX", "ATOM"],
            RiskLevel::Balanced,
            "🚀",
            "Bitcoin is boring, I want that 1000x!",
        ),
        PersonalityCategory::Whale => profile(
            "Crypto Whale 🐋",
            "Moves markets with a single transaction",
            &["Market mover", "Patient investor", "Big money player"],
            &["BTC", "ETH", "BNB"],
            RiskLevel::DiamondHands,
            "🐋",
            "My trades show up on the charts",
        ),
        PersonalityCategory::ShitcoinSurfer => profile(
            "Shitcoin Surfer 🏄",
            "Rides every pump and dump wave. High risk, high reward!",
            &["Degen trader", "Quick profit seeker", "No research needed"],
            &["RANDOM_TOKEN", "PUMP", "DUMP", "RUG", "SCAM"],
            RiskLevel::PaperHands,
            "🏄",
            "If it's not a rugpull, is it even crypto?",
        ),
    }
}

#[cfg(test)]
mod tests {
    use cryptomatch_core::traits::FixedSequence;

    use super::*;

    #[test]
    fn every_category_has_a_populated_profile() {
        let catalog = PersonalityCatalog::builtin();
        for category in PersonalityCategory::ALL {
            let p = catalog.profile_of(category);
            assert!(!p.title.is_empty(), "{category} has no title");
            assert_eq!(p.traits.len(), 3, "{category} should have 3 traits");
            assert!(!p.tokens.is_empty(), "{category} has no tokens");
        }
    }

    #[test]
    fn entries_follow_enumeration_order() {
        let catalog = PersonalityCatalog::builtin();
        let order: Vec<_> = catalog.entries().map(|(c, _)| c).collect();
        assert_eq!(order, PersonalityCategory::ALL.to_vec());
        assert_eq!(catalog.all_categories().len(), 8);
    }

    #[test]
    fn whale_shares_tokens_with_maxi_and_degen() {
        let catalog = PersonalityCatalog::builtin();
        let whale = catalog.profile_of(PersonalityCategory::Whale);
        assert!(whale.tokens.contains("BTC"));
        assert!(whale.tokens.contains("ETH"));
        assert_eq!(whale.risk_level, RiskLevel::DiamondHands);
    }

    #[test]
    fn random_category_is_driven_by_the_source() {
        let catalog = PersonalityCatalog::builtin();
        let mut rng = FixedSequence::new(vec![0, 6, 7, 3]);
        assert_eq!(catalog.random_category(&mut rng), PersonalityCategory::BitcoinMaxi);
        assert_eq!(catalog.random_category(&mut rng), PersonalityCategory::Whale);
        assert_eq!(catalog.random_category(&mut rng), PersonalityCategory::ShitcoinSurfer);
        assert_eq!(catalog.random_category(&mut rng), PersonalityCategory::MemeLord);
        assert_eq!(rng.draws(), 4);
    }
}
