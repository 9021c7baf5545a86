//! Core traits for sort keys
//!
//! Keys are extracted once per record and compared many times, so they own
//! their data and carry a total order that handles missing values.

/// Keys that can be compared for sorting
///
/// All sort keys must be comparable and handle missing data gracefully.
pub trait SortKey: Ord + Clone + Send + Sync {
    /// Create a key representing missing/null data
    fn missing() -> Self;

    /// Check if this key represents missing data
    fn is_missing(&self) -> bool;
}
