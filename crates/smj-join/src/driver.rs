//! The merge driver: a lazy full outer join over two presorted sides.
//!
//! [`MergeJoin`] owns one [`LookaheadCursor`] per side and a single pending
//! slot. Each time the consumer asks for an element the driver either
//! releases the pending value or classifies the two heads and runs one step:
//!
//! | heads               | action                                         |
//! |---------------------|------------------------------------------------|
//! | both, left < right  | `left_merge(None, left)`                        |
//! | both, left > right  | `right_merge(None, right)`                      |
//! | both, equal         | `left_merge(Some(right_merge(None, right)), left)` |
//! | left only           | `left_merge(None, left)`                        |
//! | right only          | `right_merge(None, right)`                      |
//! | neither             | exhausted                                       |
//!
//! # Invariants
//!
//! - At most one merged value is pending at any time.
//! - A matched step consumes exactly one element from each side. Duplicate
//!   keys therefore pair up positionally instead of forming a cross product.
//! - Every input element is consumed exactly once by the time the driver is
//!   exhausted.

use std::cmp::Ordering;
use std::iter::FusedIterator;
use std::mem;
use std::vec;

use smj_cursor::LookaheadCursor;
use tracing::{debug, trace};

use crate::config::SortStrategy;
use crate::error::{JoinError, JoinResult};
use crate::join::SortMergeJoin;

/// Presence of a head on each side, with the cross comparison when both
/// are present.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Heads {
    Both(Ordering),
    LeftOnly,
    RightOnly,
    Neither,
}

/// What a single merge step consumed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Step {
    /// One element from each side was folded into one value.
    Matched,
    /// One left element was emitted on its own.
    Left,
    /// One right element was emitted on its own.
    Right,
}

/// A merged value computed by a step but not yet handed to the consumer.
#[derive(Debug)]
enum Pending<M> {
    Empty,
    Ready(M),
}

impl<M> Pending<M> {
    fn is_ready(&self) -> bool {
        matches!(self, Pending::Ready(_))
    }

    fn take(&mut self) -> Option<M> {
        match mem::replace(self, Pending::Empty) {
            Pending::Ready(m) => Some(m),
            Pending::Empty => None,
        }
    }
}

/// Lazy full outer join of two sorted sides.
///
/// Created by [`SortMergeJoin::merge`]. The sequence is single-pass; call
/// `merge` again with fresh inputs to start over.
pub struct MergeJoin<'a, J, L, R>
where
    J: SortMergeJoin<L, R> + ?Sized,
{
    join: &'a J,
    left: LookaheadCursor<vec::IntoIter<L>>,
    right: LookaheadCursor<vec::IntoIter<R>>,
    pending: Pending<J::Output>,
    emitted: usize,
    exhausted: bool,
}

impl<'a, J, L, R> MergeJoin<'a, J, L, R>
where
    J: SortMergeJoin<L, R> + ?Sized,
{
    /// Sort both sides with the join's side comparators and set up the
    /// cursors. No merge step runs until the first pull.
    pub(crate) fn new(join: &'a J, sort: SortStrategy, mut left: Vec<L>, mut right: Vec<R>) -> Self {
        sort.sort_by(&mut left, |a, b| join.left_compare(a, b));
        sort.sort_by(&mut right, |a, b| join.right_compare(a, b));
        debug!(left = left.len(), right = right.len(), ?sort, "sorted merge join inputs");

        Self {
            join,
            left: LookaheadCursor::new(left.into_iter()),
            right: LookaheadCursor::new(right.into_iter()),
            pending: Pending::Empty,
            emitted: 0,
            exhausted: false,
        }
    }

    /// Returns `true` if another merged value is available.
    ///
    /// Computes and stages the value if needed; repeated calls do not
    /// advance the join.
    pub fn has_next(&mut self) -> bool {
        matches!(self.fill(), Ok(true))
    }

    /// The next merged value.
    ///
    /// Fails with [`JoinError::Exhausted`] once both sides are drained, on
    /// this and every later call.
    pub fn next_merged(&mut self) -> JoinResult<J::Output> {
        if !self.fill()? {
            return Err(JoinError::Exhausted);
        }
        let merged = self.pending.take().ok_or(JoinError::Exhausted)?;
        self.emitted += 1;
        Ok(merged)
    }

    /// Number of merged values handed out so far.
    pub fn emitted(&self) -> usize {
        self.emitted
    }

    /// Ensure a value is pending. Returns `false` when both sides are drained.
    fn fill(&mut self) -> JoinResult<bool> {
        if self.pending.is_ready() {
            return Ok(true);
        }

        let (step, merged) = match self.heads() {
            Heads::Neither => {
                if !self.exhausted {
                    self.exhausted = true;
                    debug!(emitted = self.emitted, "merge join exhausted");
                }
                return Ok(false);
            }
            Heads::Both(Ordering::Equal) => {
                let right = self.join.right_merge(None, self.right.consume()?);
                let merged = self.join.left_merge(Some(right), self.left.consume()?);
                (Step::Matched, merged)
            }
            Heads::Both(Ordering::Greater) | Heads::RightOnly => {
                (Step::Right, self.join.right_merge(None, self.right.consume()?))
            }
            Heads::Both(Ordering::Less) | Heads::LeftOnly => {
                (Step::Left, self.join.left_merge(None, self.left.consume()?))
            }
        };

        trace!(?step, emitted = self.emitted, "merge step");
        self.pending = Pending::Ready(merged);
        Ok(true)
    }

    fn heads(&mut self) -> Heads {
        match (self.left.peek(), self.right.peek()) {
            (Some(left), Some(right)) => Heads::Both(self.join.compare(left, right)),
            (Some(_), None) => Heads::LeftOnly,
            (None, Some(_)) => Heads::RightOnly,
            (None, None) => Heads::Neither,
        }
    }
}

impl<J, L, R> Iterator for MergeJoin<'_, J, L, R>
where
    J: SortMergeJoin<L, R> + ?Sized,
{
    type Item = J::Output;

    fn next(&mut self) -> Option<J::Output> {
        // Exhaustion is the only error the driver's own steps can produce.
        self.next_merged().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let staged = usize::from(self.pending.is_ready());
        let (left, _) = self.left.size_hint();
        let (right, _) = self.right.size_hint();
        (left.max(right) + staged, Some(left + right + staged))
    }
}

impl<J, L, R> FusedIterator for MergeJoin<'_, J, L, R> where J: SortMergeJoin<L, R> + ?Sized {}
