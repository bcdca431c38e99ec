use std::cmp::Ordering;
use std::fmt;

use crate::config::JoinConfig;
use crate::error::{JoinError, JoinResult};
use crate::functions::FnJoin;

/// Boxed comparator between an `A` and a `B`.
pub type CompareFn<A, B> = Box<dyn Fn(&A, &B) -> Ordering>;

/// Boxed merge function folding a `T` into a partial `M`.
pub type MergeFn<M, T> = Box<dyn Fn(Option<M>, T) -> M>;

/// The join produced by [`JoinBuilder::build`].
pub type BoxedJoin<L, R, M> =
    FnJoin<M, CompareFn<L, R>, MergeFn<M, L>, MergeFn<M, R>, CompareFn<L, L>, CompareFn<R, R>>;

/// Step-by-step construction of a join from named functions.
///
/// All five functions are required; [`build`](JoinBuilder::build) reports
/// the first one that is missing.
pub struct JoinBuilder<L, R, M> {
    compare: Option<CompareFn<L, R>>,
    left_merge: Option<MergeFn<M, L>>,
    right_merge: Option<MergeFn<M, R>>,
    left_compare: Option<CompareFn<L, L>>,
    right_compare: Option<CompareFn<R, R>>,
    config: JoinConfig,
}

impl<L, R, M> JoinBuilder<L, R, M> {
    pub fn new() -> Self {
        Self {
            compare: None,
            left_merge: None,
            right_merge: None,
            left_compare: None,
            right_compare: None,
            config: JoinConfig::default(),
        }
    }

    pub fn compare(mut self, f: impl Fn(&L, &R) -> Ordering + 'static) -> Self {
        self.compare = Some(Box::new(f));
        self
    }

    pub fn left_merge(mut self, f: impl Fn(Option<M>, L) -> M + 'static) -> Self {
        self.left_merge = Some(Box::new(f));
        self
    }

    pub fn right_merge(mut self, f: impl Fn(Option<M>, R) -> M + 'static) -> Self {
        self.right_merge = Some(Box::new(f));
        self
    }

    pub fn left_compare(mut self, f: impl Fn(&L, &L) -> Ordering + 'static) -> Self {
        self.left_compare = Some(Box::new(f));
        self
    }

    pub fn right_compare(mut self, f: impl Fn(&R, &R) -> Ordering + 'static) -> Self {
        self.right_compare = Some(Box::new(f));
        self
    }

    pub fn config(mut self, config: JoinConfig) -> Self {
        self.config = config;
        self
    }

    /// Assemble the join, failing with [`JoinError::MissingFunction`] if any
    /// of the five functions was not supplied.
    pub fn build(self) -> JoinResult<BoxedJoin<L, R, M>> {
        let compare = self.compare.ok_or(JoinError::MissingFunction("compare"))?;
        let left_merge = self
            .left_merge
            .ok_or(JoinError::MissingFunction("left_merge"))?;
        let right_merge = self
            .right_merge
            .ok_or(JoinError::MissingFunction("right_merge"))?;
        let left_compare = self
            .left_compare
            .ok_or(JoinError::MissingFunction("left_compare"))?;
        let right_compare = self
            .right_compare
            .ok_or(JoinError::MissingFunction("right_compare"))?;

        Ok(FnJoin::new::<L, R>(compare, left_merge, right_merge, left_compare, right_compare)
            .with_config(self.config))
    }
}

impl<L, R, M> Default for JoinBuilder<L, R, M> {
    fn default() -> Self {
        Self::new()
    }
}

impl<L, R, M> fmt::Debug for JoinBuilder<L, R, M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JoinBuilder")
            .field("compare", &self.compare.is_some())
            .field("left_merge", &self.left_merge.is_some())
            .field("right_merge", &self.right_merge.is_some())
            .field("left_compare", &self.left_compare.is_some())
            .field("right_compare", &self.right_compare.is_some())
            .field("config", &self.config)
            .finish()
    }
}
