/// CryptoMatch engine version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Weight of the base personality affinity factor.
pub const WEIGHT_PERSONALITY_BASE: f64 = 0.30;
/// Weight of the token overlap factor.
pub const WEIGHT_TOKEN_OVERLAP: f64 = 0.25;
/// Weight of the risk tolerance factor.
pub const WEIGHT_RISK_TOLERANCE: f64 = 0.20;
/// Weight of the trait similarity factor.
pub const WEIGHT_TRAIT_SIMILARITY: f64 = 0.15;
/// Weight of the residual signal factor.
pub const WEIGHT_RESIDUAL_SIGNAL: f64 = 0.10;

/// Maximum distance of the weight sum from 1.0.
pub const WEIGHT_SUM_TOLERANCE: f64 = 1e-6;

/// Totals at or above this are a high match.
pub const HIGH_TIER_THRESHOLD: u8 = 80;
/// Totals at or above this (and below high) are a medium match.
pub const MEDIUM_TIER_THRESHOLD: u8 = 60;

/// Affinity returned when neither direction of a pair is in the matrix.
pub const DEFAULT_AFFINITY: u8 = 50;

/// Risk factor when both profiles share a risk level.
pub const RISK_MATCH_SAME: u8 = 100;
/// Risk factor when risk levels differ.
pub const RISK_MATCH_DIFFERENT: u8 = 50;

/// Trait similarity when either trait set is empty.
pub const NEUTRAL_TRAIT_SIMILARITY: f64 = 50.0;

/// Inclusive lower bound of the residual signal.
pub const RESIDUAL_MIN: u32 = 60;
/// Inclusive upper bound of the residual signal.
pub const RESIDUAL_MAX: u32 = 95;

/// Inclusive bounds of the reference classifier's confidence.
pub const ANALYSIS_CONFIDENCE_MIN: u32 = 85;
pub const ANALYSIS_CONFIDENCE_MAX: u32 = 99;

/// Decimal places a weighted total is snapped to before rounding.
/// Keeps float representation error (96.49999999999999) from flipping a .5 tie.
pub const TOTAL_SNAP_DECIMALS: i32 = 9;

/// Default number of matches returned by the request layer.
pub const DEFAULT_TOP_N: usize = 3;

/// Candidate count at which ranking fans out across the rayon pool.
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 64;
