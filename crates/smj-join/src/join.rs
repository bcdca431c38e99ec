use std::cmp::Ordering;

use crate::config::JoinConfig;
use crate::driver::MergeJoin;

/// A sort-merge join between a left sequence of `L` and a right sequence
/// of `R`.
///
/// Implementors supply five pure functions: a cross comparator, one
/// comparator per side for the presort, and one merge function per side that
/// folds an element into a (possibly absent) partial result. The provided
/// [`merge`](SortMergeJoin::merge) method sorts both sides eagerly and returns
/// a lazy [`MergeJoin`] producing the full outer join.
///
/// All functions must agree on one key order. A comparator that is not a
/// total order consistent with the others voids the ordering guarantee; the
/// engine does not check this.
pub trait SortMergeJoin<L, R> {
    /// Merged result type.
    type Output;

    /// Order a left element relative to a right element.
    fn compare(&self, left: &L, right: &R) -> Ordering;

    /// Fold a left element into the partial result.
    ///
    /// `merged` is `Some` only for a matched pair, in which case it already
    /// holds the right element's contribution.
    fn left_merge(&self, merged: Option<Self::Output>, left: L) -> Self::Output;

    /// Fold a right element into the partial result.
    ///
    /// The engine always calls this with `None`; the right side is merged
    /// first when a pair matches.
    fn right_merge(&self, merged: Option<Self::Output>, right: R) -> Self::Output;

    /// Order two left elements.
    fn left_compare(&self, a: &L, b: &L) -> Ordering;

    /// Order two right elements.
    fn right_compare(&self, a: &R, b: &R) -> Ordering;

    /// Settings used by [`merge`](SortMergeJoin::merge) and
    /// [`try_merge`](SortMergeJoin::try_merge).
    fn config(&self) -> JoinConfig {
        JoinConfig::default()
    }

    /// Join two finite sequences.
    ///
    /// Both sides are collected and sorted before this returns; the merge
    /// itself runs as the returned iterator is pulled.
    fn merge<IL, IR>(&self, left: IL, right: IR) -> MergeJoin<'_, Self, L, R>
    where
        IL: IntoIterator<Item = L>,
        IR: IntoIterator<Item = R>,
    {
        let config = self.config();
        self.merge_with(&config, left, right)
    }

    /// Join two finite sequences with an explicit configuration.
    fn merge_with<IL, IR>(
        &self,
        config: &JoinConfig,
        left: IL,
        right: IR,
    ) -> MergeJoin<'_, Self, L, R>
    where
        IL: IntoIterator<Item = L>,
        IR: IntoIterator<Item = R>,
    {
        MergeJoin::new(
            self,
            config.sort,
            left.into_iter().collect(),
            right.into_iter().collect(),
        )
    }

    /// Join two fallible sequences.
    ///
    /// Both sides are drained up front, so the first error from either side
    /// is returned unchanged and no merging takes place.
    fn try_merge<IL, IR, E>(&self, left: IL, right: IR) -> Result<MergeJoin<'_, Self, L, R>, E>
    where
        IL: IntoIterator<Item = Result<L, E>>,
        IR: IntoIterator<Item = Result<R, E>>,
    {
        let left = left.into_iter().collect::<Result<Vec<_>, E>>()?;
        let right = right.into_iter().collect::<Result<Vec<_>, E>>()?;
        Ok(MergeJoin::new(self, self.config().sort, left, right))
    }
}
