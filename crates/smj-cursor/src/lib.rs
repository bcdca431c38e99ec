//! Lookahead cursors for the sort-merge join engine.
//!
//! A merge join needs to look at the next element of each side before
//! deciding which side to advance. Plain iterators are forward-only, so this
//! crate decorates them with a single cached *head* element.
//!
//! # Key Types
//!
//! - [`LookaheadCursor`] -- presence check, peek, and consume over any [`Iterator`]
//! - [`CursorError`] -- usage errors (consuming past the end)

pub mod cursor;
pub mod error;

pub use cursor::LookaheadCursor;
pub use error::{CursorError, CursorResult};
