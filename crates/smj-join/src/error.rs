//! Error types for the sort-merge join engine.

use smj_cursor::CursorError;

/// Errors that can occur while building or draining a merge join.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum JoinError {
    /// The merged sequence has no more elements.
    #[error("merge join exhausted: no more elements")]
    Exhausted,

    /// A required join function was never supplied to the builder.
    #[error("missing join function: {0}")]
    MissingFunction(&'static str),

    /// A cursor was consumed with no head available.
    #[error("cursor error: {0}")]
    Cursor(#[from] CursorError),
}

/// Convenience alias for join results.
pub type JoinResult<T> = Result<T, JoinError>;
