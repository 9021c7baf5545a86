use crate::query::types::SortDirection;
use satdeck_model::Record;
use std::cmp::Ordering;

/// Compare two records by `key`.
///
/// A missing value is treated as larger than any present value, then the
/// direction is applied: missing values land last under `Asc` and first under
/// `Desc`. Two missing values compare equal.
pub fn compare_records<R: Record + ?Sized>(
    a: &R,
    b: &R,
    key: &str,
    direction: SortDirection,
) -> Ordering {
    let ord = match (a.field(key), b.field(key)) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Greater,
        (Some(_), None) => Ordering::Less,
        (Some(a), Some(b)) => a.natural_cmp(&b),
    };
    direction.apply(ord)
}

/// Return a copy of `records` stably sorted by `key`.
///
/// The input is left untouched. Unknown keys read as missing on every record,
/// which leaves the copy in input order.
pub fn sort_records<R: Record + Clone>(
    records: &[R],
    key: &str,
    direction: SortDirection,
) -> Vec<R> {
    let mut sorted = records.to_vec();
    sorted.sort_by(|a, b| compare_records(a, b, key, direction));
    tracing::debug!(
        key,
        %direction,
        count = sorted.len(),
        "sorted records"
    );
    sorted
}
