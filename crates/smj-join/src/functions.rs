//! Ready-made [`SortMergeJoin`] implementations built from closures.
//!
//! - [`FnJoin`] -- all five functions supplied directly
//! - [`KeyedJoin`] -- comparators derived from an [`Ord`] key on each side

use std::cmp::Ordering;
use std::fmt;
use std::marker::PhantomData;

use crate::config::JoinConfig;
use crate::join::SortMergeJoin;

/// A join assembled from five closures.
pub struct FnJoin<M, CF, LM, RM, LC, RC> {
    compare: CF,
    left_merge: LM,
    right_merge: RM,
    left_compare: LC,
    right_compare: RC,
    config: JoinConfig,
    _output: PhantomData<fn() -> M>,
}

impl<M, CF, LM, RM, LC, RC> FnJoin<M, CF, LM, RM, LC, RC> {
    /// Bundle the cross comparator, the two merge functions, and the two
    /// side comparators into a join.
    pub fn new<L, R>(
        compare: CF,
        left_merge: LM,
        right_merge: RM,
        left_compare: LC,
        right_compare: RC,
    ) -> Self
    where
        CF: Fn(&L, &R) -> Ordering,
        LM: Fn(Option<M>, L) -> M,
        RM: Fn(Option<M>, R) -> M,
        LC: Fn(&L, &L) -> Ordering,
        RC: Fn(&R, &R) -> Ordering,
    {
        Self {
            compare,
            left_merge,
            right_merge,
            left_compare,
            right_compare,
            config: JoinConfig::default(),
            _output: PhantomData,
        }
    }

    /// Replace the configuration used by `merge`.
    pub fn with_config(mut self, config: JoinConfig) -> Self {
        self.config = config;
        self
    }
}

impl<M, CF, LM, RM, LC, RC> fmt::Debug for FnJoin<M, CF, LM, RM, LC, RC> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnJoin")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl<L, R, M, CF, LM, RM, LC, RC> SortMergeJoin<L, R> for FnJoin<M, CF, LM, RM, LC, RC>
where
    CF: Fn(&L, &R) -> Ordering,
    LM: Fn(Option<M>, L) -> M,
    RM: Fn(Option<M>, R) -> M,
    LC: Fn(&L, &L) -> Ordering,
    RC: Fn(&R, &R) -> Ordering,
{
    type Output = M;

    fn compare(&self, left: &L, right: &R) -> Ordering {
        (self.compare)(left, right)
    }

    fn left_merge(&self, merged: Option<M>, left: L) -> M {
        (self.left_merge)(merged, left)
    }

    fn right_merge(&self, merged: Option<M>, right: R) -> M {
        (self.right_merge)(merged, right)
    }

    fn left_compare(&self, a: &L, b: &L) -> Ordering {
        (self.left_compare)(a, b)
    }

    fn right_compare(&self, a: &R, b: &R) -> Ordering {
        (self.right_compare)(a, b)
    }

    fn config(&self) -> JoinConfig {
        self.config
    }
}

/// A join keyed by a projection on each side.
///
/// The cross comparator and both side comparators all compare the projected
/// keys, so the three orders agree by construction.
pub struct KeyedJoin<K, M, FL, FR, LM, RM> {
    left_key: FL,
    right_key: FR,
    left_merge: LM,
    right_merge: RM,
    config: JoinConfig,
    _types: PhantomData<fn() -> (K, M)>,
}

impl<K, M, FL, FR, LM, RM> KeyedJoin<K, M, FL, FR, LM, RM> {
    /// Build a join from two key projections and two merge functions.
    pub fn new<L, R>(left_key: FL, right_key: FR, left_merge: LM, right_merge: RM) -> Self
    where
        K: Ord,
        FL: Fn(&L) -> K,
        FR: Fn(&R) -> K,
        LM: Fn(Option<M>, L) -> M,
        RM: Fn(Option<M>, R) -> M,
    {
        Self {
            left_key,
            right_key,
            left_merge,
            right_merge,
            config: JoinConfig::default(),
            _types: PhantomData,
        }
    }

    /// Replace the configuration used by `merge`.
    pub fn with_config(mut self, config: JoinConfig) -> Self {
        self.config = config;
        self
    }
}

impl<K, M, FL, FR, LM, RM> fmt::Debug for KeyedJoin<K, M, FL, FR, LM, RM> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyedJoin")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl<L, R, K, M, FL, FR, LM, RM> SortMergeJoin<L, R> for KeyedJoin<K, M, FL, FR, LM, RM>
where
    K: Ord,
    FL: Fn(&L) -> K,
    FR: Fn(&R) -> K,
    LM: Fn(Option<M>, L) -> M,
    RM: Fn(Option<M>, R) -> M,
{
    type Output = M;

    fn compare(&self, left: &L, right: &R) -> Ordering {
        (self.left_key)(left).cmp(&(self.right_key)(right))
    }

    fn left_merge(&self, merged: Option<M>, left: L) -> M {
        (self.left_merge)(merged, left)
    }

    fn right_merge(&self, merged: Option<M>, right: R) -> M {
        (self.right_merge)(merged, right)
    }

    fn left_compare(&self, a: &L, b: &L) -> Ordering {
        (self.left_key)(a).cmp(&(self.left_key)(b))
    }

    fn right_compare(&self, a: &R, b: &R) -> Ordering {
        (self.right_key)(a).cmp(&(self.right_key)(b))
    }

    fn config(&self) -> JoinConfig {
        self.config
    }
}
