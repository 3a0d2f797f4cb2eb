//! MatchErrorCode trait for the request-handling boundary.

/// Every error enum implements this so the request layer can map failures
/// to a stable code string without matching on variants.
pub trait MatchErrorCode {
    /// Returns the code string (e.g., "CONFIG_ERROR").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted boundary string: `[ERROR_CODE] message`.
    fn boundary_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const INVALID_WEIGHTS: &str = "INVALID_WEIGHTS";
pub const INVALID_CATEGORY: &str = "INVALID_CATEGORY";
pub const COLLABORATOR_UNAVAILABLE: &str = "COLLABORATOR_UNAVAILABLE";
pub const COLLABORATOR_INVALID_OUTPUT: &str = "COLLABORATOR_INVALID_OUTPUT";
