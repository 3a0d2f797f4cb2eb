//! Span definitions per operation: scoring, matchmaking, pipeline.

/// Create a pair-scoring span.
#[macro_export]
macro_rules! score_span {
    ($category1:expr, $category2:expr) => {
        tracing::debug_span!("cryptomatch.score", category1 = %$category1, category2 = %$category2)
    };
}

/// Create a matchmaking span.
#[macro_export]
macro_rules! match_span {
    ($subject:expr, $candidates:expr, $top_n:expr) => {
        tracing::info_span!(
            "cryptomatch.match",
            subject = %$subject,
            candidates = $candidates,
            top_n = $top_n
        )
    };
}

/// Create a pipeline span.
#[macro_export]
macro_rules! pipeline_span {
    ($user_id:expr, $match_id:expr) => {
        tracing::info_span!("cryptomatch.pipeline", user_id = %$user_id, match_id = %$match_id)
    };
}

/// Span names as constants for programmatic use.
pub mod names {
    pub const SCORE: &str = "cryptomatch.score";
    pub const MATCH: &str = "cryptomatch.match";
    pub const PIPELINE: &str = "cryptomatch.pipeline";
}
