use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::CatalogError;

/// The closed set of personality archetypes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PersonalityCategory {
    BitcoinMaxi,
    DefiDegen,
    NftCollector,
    MemeLord,
    StablecoinSafe,
    AltcoinHunter,
    Whale,
    ShitcoinSurfer,
}

impl PersonalityCategory {
    /// Every category, in declaration order.
    pub const ALL: [PersonalityCategory; 8] = [
        Self::BitcoinMaxi,
        Self::DefiDegen,
        Self::NftCollector,
        Self::MemeLord,
        Self::StablecoinSafe,
        Self::AltcoinHunter,
        Self::Whale,
        Self::ShitcoinSurfer,
    ];

    /// Number of categories.
    pub const COUNT: usize = Self::ALL.len();

    /// Position of this category in [`Self::ALL`].
    pub fn index(self) -> usize {
        self as usize
    }

    /// Stable snake_case identifier.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::BitcoinMaxi => "bitcoin_maxi",
            Self::DefiDegen => "defi_degen",
            Self::NftCollector => "nft_collector",
            Self::MemeLord => "meme_lord",
            Self::StablecoinSafe => "stablecoin_safe",
            Self::AltcoinHunter => "altcoin_hunter",
            Self::Whale => "whale",
            Self::ShitcoinSurfer => "shitcoin_surfer",
        }
    }
}

impl fmt::Display for PersonalityCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PersonalityCategory {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| CatalogError::InvalidCategory {
                value: s.to_string(),
            })
    }
}

/// Risk tolerance of a personality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    /// Never sells.
    DiamondHands,
    /// Sells at the first dip.
    PaperHands,
    /// Strategic trader.
    Balanced,
}

impl RiskLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::DiamondHands => "diamond_hands",
            Self::PaperHands => "paper_hands",
            Self::Balanced => "balanced",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
