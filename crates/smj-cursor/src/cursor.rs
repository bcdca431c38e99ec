//! One-element lookahead over a forward-only iterator.
//!
//! [`LookaheadCursor`] owns the underlying iterator plus at most one fetched
//! element, the *head*. The head is fetched lazily by [`has_next`] or
//! [`peek`] and handed out by [`consume`] (or [`Iterator::next`]).
//!
//! # Invariants
//!
//! - Every element of the underlying iterator is fetched at most once.
//! - A cached head is returned by every `peek` until it is consumed.
//! - `consume` never invents a value: with nothing left it returns
//!   [`CursorError::Exhausted`].
//!
//! [`has_next`]: LookaheadCursor::has_next
//! [`peek`]: LookaheadCursor::peek
//! [`consume`]: LookaheadCursor::consume

use std::iter::FusedIterator;

use crate::error::{CursorError, CursorResult};

/// Decorates an iterator with one-element lookahead.
#[derive(Clone, Debug)]
pub struct LookaheadCursor<I: Iterator> {
    /// Underlying source.
    inner: I,
    /// Element fetched from `inner` but not yet consumed.
    head: Option<I::Item>,
}

impl<I: Iterator> LookaheadCursor<I> {
    /// Wrap the given iterator. Nothing is fetched until the cursor is used.
    pub fn new(inner: I) -> Self {
        Self { inner, head: None }
    }

    /// Returns `true` if a head is cached or the source yields one more
    /// element (which becomes the cached head).
    pub fn has_next(&mut self) -> bool {
        self.fill().is_some()
    }

    /// The next element without consuming it.
    ///
    /// Returns `None` only when the source is exhausted.
    pub fn peek(&mut self) -> Option<&I::Item> {
        self.fill()
    }

    /// Take the head, fetching it first if nothing is cached.
    ///
    /// The next `has_next`/`peek` fetches from the source again.
    pub fn consume(&mut self) -> CursorResult<I::Item> {
        self.fill();
        self.head.take().ok_or(CursorError::Exhausted)
    }

    /// Returns `true` if a head has been fetched and not yet consumed.
    pub fn is_cached(&self) -> bool {
        self.head.is_some()
    }

    /// Release the cached head (if any) and the underlying iterator.
    pub fn into_inner(self) -> (Option<I::Item>, I) {
        (self.head, self.inner)
    }

    fn fill(&mut self) -> Option<&I::Item> {
        if self.head.is_none() {
            self.head = self.inner.next();
        }
        self.head.as_ref()
    }
}

impl<I: Iterator> Iterator for LookaheadCursor<I> {
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        match self.head.take() {
            Some(head) => Some(head),
            None => self.inner.next(),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let cached = usize::from(self.head.is_some());
        let (lo, hi) = self.inner.size_hint();
        (
            lo.saturating_add(cached),
            hi.and_then(|hi| hi.checked_add(cached)),
        )
    }
}

impl<I: FusedIterator> FusedIterator for LookaheadCursor<I> {}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use proptest::prelude::*;

    use super::*;

    fn letters() -> LookaheadCursor<std::vec::IntoIter<&'static str>> {
        LookaheadCursor::new(vec!["a", "b", "c"].into_iter())
    }

    #[test]
    fn next_iteration() {
        let mut cursor = letters();
        assert!(cursor.has_next());
        assert_eq!(cursor.consume(), Ok("a"));
        assert_eq!(cursor.peek(), Some(&"b"));
        assert!(cursor.has_next());
        assert_eq!(cursor.consume(), Ok("b"));
        assert_eq!(cursor.peek(), Some(&"c"));
        assert!(cursor.has_next());
        assert_eq!(cursor.consume(), Ok("c"));
        assert_eq!(cursor.peek(), None);
        assert!(!cursor.has_next());
    }

    #[test]
    fn peek_is_idempotent() {
        let mut cursor = letters();
        for _ in 0..5 {
            assert_eq!(cursor.peek(), Some(&"a"));
        }
        assert_eq!(cursor.consume(), Ok("a"));
        assert_eq!(cursor.peek(), Some(&"b"));
    }

    #[test]
    fn each_element_fetched_once() {
        let fetches = Cell::new(0usize);
        let source = (0..4).inspect(|_| fetches.set(fetches.get() + 1));
        let mut cursor = LookaheadCursor::new(source);

        assert!(cursor.has_next());
        assert!(cursor.has_next());
        assert_eq!(cursor.peek(), Some(&0));
        assert_eq!(fetches.get(), 1);

        assert_eq!(cursor.consume(), Ok(0));
        assert_eq!(fetches.get(), 1);

        assert_eq!(cursor.peek(), Some(&1));
        assert_eq!(fetches.get(), 2);

        let rest: Vec<i32> = cursor.collect();
        assert_eq!(rest, vec![1, 2, 3]);
        assert_eq!(fetches.get(), 4);
    }

    #[test]
    fn consume_without_peek_fetches() {
        let mut cursor = letters();
        assert!(!cursor.is_cached());
        assert_eq!(cursor.consume(), Ok("a"));
        assert!(!cursor.is_cached());
    }

    #[test]
    fn consume_past_end_fails() {
        let mut cursor = LookaheadCursor::new(std::iter::empty::<u8>());
        assert_eq!(cursor.consume(), Err(CursorError::Exhausted));
        assert_eq!(cursor.consume(), Err(CursorError::Exhausted));
        assert!(!cursor.has_next());
    }

    #[test]
    fn into_inner_returns_cached_head() {
        let mut cursor = letters();
        assert_eq!(cursor.peek(), Some(&"a"));
        let (head, rest) = cursor.into_inner();
        assert_eq!(head, Some("a"));
        assert_eq!(rest.collect::<Vec<_>>(), vec!["b", "c"]);
    }

    #[test]
    fn size_hint_counts_cached_head() {
        let mut cursor = letters();
        assert_eq!(cursor.size_hint(), (3, Some(3)));
        cursor.peek();
        assert_eq!(cursor.size_hint(), (3, Some(3)));
        cursor.next();
        assert_eq!(cursor.size_hint(), (2, Some(2)));
    }

    proptest! {
        #[test]
        fn peeking_never_changes_the_sequence(
            items in proptest::collection::vec(any::<u16>(), 0..64),
            peeks in proptest::collection::vec(0usize..3, 0..64),
        ) {
            let mut cursor = LookaheadCursor::new(items.clone().into_iter());
            let mut seen = Vec::new();
            let mut peeks = peeks.into_iter();
            while cursor.has_next() {
                for _ in 0..peeks.next().unwrap_or(0) {
                    let peeked = cursor.peek().copied();
                    prop_assert_eq!(peeked, items.get(seen.len()).copied());
                }
                seen.push(cursor.consume().unwrap());
            }
            prop_assert_eq!(seen, items);
            prop_assert_eq!(cursor.consume(), Err(CursorError::Exhausted));
        }
    }
}
