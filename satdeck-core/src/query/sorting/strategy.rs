//! Strategy pattern for composable sorting
//!
//! A strategy reorders a slice in place. Single-field strategies extract
//! their keys once (decorate-sort-undecorate), and chained strategies layer
//! stable passes so the first strategy in the chain dominates.

use super::keys::FieldKey;
use crate::query::types::SortDirection;
use satdeck_model::Record;

/// A sorting strategy that can be composed
pub trait SortStrategy<T>: Send + Sync {
    /// Apply this sorting strategy to the given items
    fn sort(&self, items: &mut [T]);

    /// Estimate the computational cost of this sorting strategy
    fn cost_estimate(&self) -> SortCost;
}

/// Estimated cost of a sorting operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum SortCost {
    /// O(1) - no-op
    Trivial,
    /// O(n log n) - standard sorting algorithm
    Moderate,
}

/// Single field sort strategy
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSort {
    pub key: String,
    pub direction: SortDirection,
}

impl FieldSort {
    /// Create a new field sort strategy
    pub fn new(key: impl Into<String>, direction: SortDirection) -> Self {
        Self {
            key: key.into(),
            direction,
        }
    }
}

impl<T> SortStrategy<T> for FieldSort
where
    T: Record + Clone + Send + Sync,
{
    fn sort(&self, items: &mut [T]) {
        let mut keyed: Vec<(usize, FieldKey)> = items
            .iter()
            .enumerate()
            .map(|(i, item)| (i, FieldKey::extract(item, &self.key)))
            .collect();

        let order = |a: &(usize, FieldKey), b: &(usize, FieldKey)| {
            self.direction.apply(a.1.cmp(&b.1))
        };
        if keyed.is_sorted_by(|a, b| order(a, b).is_le()) {
            return;
        }

        // Stable, so equal keys keep their index order in both directions
        keyed.sort_by(order);
        apply_permutation(items, keyed.iter().map(|(i, _)| *i));
    }

    fn cost_estimate(&self) -> SortCost {
        SortCost::Moderate
    }
}

/// Rewrite `items` so that position `n` holds what was at the `n`th source
/// index. `sources` must be a permutation of `0..items.len()`.
fn apply_permutation<T: Clone>(
    items: &mut [T],
    sources: impl Iterator<Item = usize>,
) {
    let arranged: Vec<T> = sources.map(|src| items[src].clone()).collect();
    debug_assert_eq!(arranged.len(), items.len());
    items.clone_from_slice(&arranged);
}

/// Multi-field sort with stable sorting
pub struct ChainedSort<T> {
    strategies: Vec<Box<dyn SortStrategy<T>>>,
}

impl<T> std::fmt::Debug for ChainedSort<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChainedSort")
            .field("strategy_count", &self.strategies.len())
            .finish()
    }
}

impl<T> Default for ChainedSort<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> ChainedSort<T> {
    /// Create a new chained sort
    pub fn new() -> Self {
        Self {
            strategies: Vec::new(),
        }
    }

    /// Add a sorting strategy to the chain
    pub fn then_by(mut self, strategy: impl SortStrategy<T> + 'static) -> Self {
        self.strategies.push(Box::new(strategy));
        self
    }

    pub fn is_empty(&self) -> bool {
        self.strategies.is_empty()
    }
}

impl<T: Clone> SortStrategy<T> for ChainedSort<T> {
    fn sort(&self, items: &mut [T]) {
        // Apply strategies in reverse order for stable sorting
        // This ensures primary sort takes precedence
        for strategy in self.strategies.iter().rev() {
            strategy.sort(items);
        }
    }

    fn cost_estimate(&self) -> SortCost {
        self.strategies
            .iter()
            .map(|s| s.cost_estimate())
            .max()
            .unwrap_or(SortCost::Trivial)
    }
}
