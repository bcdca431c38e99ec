use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

/// How each side is ordered before the lazy merge starts.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortStrategy {
    /// Equal elements keep their input order, so duplicate keys pair up
    /// positionally in the order they were supplied.
    #[default]
    Stable,
    /// Equal elements may be reordered.
    Unstable,
}

impl SortStrategy {
    /// Sort `items` in place with `compare` according to this strategy.
    pub fn sort_by<T, F>(self, items: &mut [T], compare: F)
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        match self {
            SortStrategy::Stable => items.sort_by(compare),
            SortStrategy::Unstable => items.sort_unstable_by(compare),
        }
    }
}

/// Configuration for a merge join.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct JoinConfig {
    /// Sort applied to both sides in the eager presort phase.
    pub sort: SortStrategy,
}

impl Default for JoinConfig {
    fn default() -> Self {
        Self {
            sort: SortStrategy::Stable,
        }
    }
}

impl JoinConfig {
    /// A configuration that sorts both sides with an unstable sort.
    pub fn unstable() -> Self {
        Self {
            sort: SortStrategy::Unstable,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let c = JoinConfig::default();
        assert_eq!(c.sort, SortStrategy::Stable);
        assert_eq!(JoinConfig::unstable().sort, SortStrategy::Unstable);
    }

    #[test]
    fn parse_from_toml() {
        let c: JoinConfig = toml::from_str(r#"sort = "unstable""#).unwrap();
        assert_eq!(c, JoinConfig::unstable());
    }

    #[test]
    fn empty_toml_uses_defaults() {
        let c: JoinConfig = toml::from_str("").unwrap();
        assert_eq!(c, JoinConfig::default());
    }

    #[test]
    fn unknown_strategy_rejected() {
        assert!(toml::from_str::<JoinConfig>(r#"sort = "random""#).is_err());
    }

    #[test]
    fn stable_sort_keeps_input_order_of_ties() {
        let mut items = vec![(2, 'a'), (1, 'b'), (2, 'c'), (1, 'd')];
        SortStrategy::Stable.sort_by(&mut items, |a, b| a.0.cmp(&b.0));
        assert_eq!(items, vec![(1, 'b'), (1, 'd'), (2, 'a'), (2, 'c')]);
    }

    #[test]
    fn unstable_sort_orders_keys() {
        let mut items = vec![5, 3, 9, 1, 3];
        SortStrategy::Unstable.sort_by(&mut items, |a, b| a.cmp(b));
        assert_eq!(items, vec![1, 3, 3, 5, 9]);
    }
}
