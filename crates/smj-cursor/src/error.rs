//! Error types for lookahead cursors.

/// Errors produced by cursor operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum CursorError {
    /// `consume` was called with no cached head and an exhausted source.
    #[error("cursor exhausted: no head element to consume")]
    Exhausted,
}

/// Convenience alias for cursor results.
pub type CursorResult<T> = Result<T, CursorError>;
