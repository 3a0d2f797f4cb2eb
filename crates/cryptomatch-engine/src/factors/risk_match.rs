use cryptomatch_core::constants::{RISK_MATCH_DIFFERENT, RISK_MATCH_SAME};
use cryptomatch_core::models::RiskLevel;

/// Risk alignment factor: 100 for the same level, 50 otherwise. Binary, not graded.
pub fn calculate(risk1: RiskLevel, risk2: RiskLevel) -> u8 {
    if risk1 == risk2 {
        RISK_MATCH_SAME
    } else {
        RISK_MATCH_DIFFERENT
    }
}
