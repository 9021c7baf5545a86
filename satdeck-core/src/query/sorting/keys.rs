//! Sort key types for comparing catalog records
//!
//! These types wrap the values extracted from records and handle missing data
//! in their Ord implementations: a missing value is greater than any present
//! one, and the sort direction is applied on top of that.

use super::traits::SortKey;
use ordered_float::OrderedFloat;
use satdeck_model::{FieldValue, Record};
use std::cmp::Ordering;

/// Owned scalar extracted from a record field
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum ScalarKey {
    // Variant order is significant: numbers sort before text.
    Number(OrderedFloat<f64>),
    Text(String),
}

impl From<FieldValue<'_>> for ScalarKey {
    fn from(value: FieldValue<'_>) -> Self {
        match value {
            FieldValue::Number(number) => ScalarKey::Number(OrderedFloat(number)),
            FieldValue::Text(text) => ScalarKey::Text(text.to_owned()),
        }
    }
}

/// Key for a single field, possibly missing
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FieldKey(Option<ScalarKey>);

impl FieldKey {
    pub fn new(value: Option<ScalarKey>) -> Self {
        FieldKey(value)
    }

    /// Extract the key for `field` from a record.
    pub fn extract<R: Record + ?Sized>(record: &R, field: &str) -> Self {
        FieldKey(record.field(field).map(ScalarKey::from))
    }
}

impl Ord for FieldKey {
    fn cmp(&self, other: &Self) -> Ordering {
        match (&self.0, &other.0) {
            (Some(a), Some(b)) => a.cmp(b),
            (Some(_), None) => Ordering::Less, // Items with values come first
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        }
    }
}

impl PartialOrd for FieldKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl SortKey for FieldKey {
    fn missing() -> Self {
        FieldKey(None)
    }

    fn is_missing(&self) -> bool {
        self.0.is_none()
    }
}
