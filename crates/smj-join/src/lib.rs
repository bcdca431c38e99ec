//! Sort-merge join engine.
//!
//! Joins two finite sequences of possibly different element types into one
//! lazily computed full outer join. Both sides are sorted eagerly with
//! caller-supplied comparators, then merged one step at a time as the result
//! iterator is pulled. Matching elements are folded together by
//! caller-supplied merge functions; unmatched elements are emitted on their
//! own.
//!
//! Equal keys pair positionally: each match consumes exactly one element
//! from each side, so duplicates never expand into a cross product.
//!
//! # Key Types
//!
//! - [`SortMergeJoin`] -- the five join functions plus `merge` / `try_merge`
//! - [`MergeJoin`] -- the lazy merge driver (an [`Iterator`])
//! - [`FnJoin`] / [`KeyedJoin`] / [`JoinBuilder`] -- ways to assemble a join
//! - [`JoinConfig`] -- presort settings
//! - [`JoinError`] -- exhaustion and construction errors
//!
//! # Example
//!
//! ```
//! use smj_join::{KeyedJoin, SortMergeJoin};
//!
//! let join = KeyedJoin::new(
//!     |l: &(char, i32)| l.0,
//!     |r: &(char, i32)| r.0,
//!     |m: Option<(char, Option<i32>, Option<i32>)>, l: (char, i32)| {
//!         let (_, _, right) = m.unwrap_or((l.0, None, None));
//!         (l.0, Some(l.1), right)
//!     },
//!     |m: Option<(char, Option<i32>, Option<i32>)>, r: (char, i32)| {
//!         let (_, left, _) = m.unwrap_or((r.0, None, None));
//!         (r.0, left, Some(r.1))
//!     },
//! );
//!
//! let rows: Vec<_> = join.merge(vec![('b', 2), ('a', 1)], vec![('b', 20)]).collect();
//! assert_eq!(rows, vec![('a', Some(1), None), ('b', Some(2), Some(20))]);
//! ```

pub mod builder;
pub mod config;
pub mod driver;
pub mod error;
pub mod functions;
pub mod join;

pub use builder::{BoxedJoin, CompareFn, JoinBuilder, MergeFn};
pub use config::{JoinConfig, SortStrategy};
pub use driver::{MergeJoin, Step};
pub use error::{JoinError, JoinResult};
pub use functions::{FnJoin, KeyedJoin};
pub use join::SortMergeJoin;
