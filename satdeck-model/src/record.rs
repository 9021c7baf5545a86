//! Field-level access to catalog rows.
//!
//! The sort and search engines only ever see a row through [`Record`], so the
//! same code handles typed satellites and loosely shaped JSON objects.

use std::borrow::Cow;
use std::cmp::Ordering;

/// A scalar read from a record field. Absent or null fields are `None` at the
/// [`Record::field`] level and never reach this type.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldValue<'a> {
    Text(&'a str),
    Number(f64),
}

impl<'a> FieldValue<'a> {
    /// Display text used for matching and table cells.
    ///
    /// Numbers use Rust's shortest round-trip formatting, so integral values
    /// render without a fractional part (`25544`, not `25544.0`).
    pub fn as_text(&self) -> Cow<'a, str> {
        match *self {
            FieldValue::Text(text) => Cow::Borrowed(text),
            FieldValue::Number(value) => Cow::Owned(value.to_string()),
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match *self {
            FieldValue::Number(value) => Some(value),
            FieldValue::Text(_) => None,
        }
    }

    /// Natural ordering between two present values.
    ///
    /// Numbers compare numerically with NaN above every other number, text by
    /// code point, and a number always orders before text. The result is a
    /// total order, so it is safe to hand to `sort_by`.
    pub fn natural_cmp(&self, other: &FieldValue<'_>) -> Ordering {
        match (self, other) {
            (FieldValue::Number(a), FieldValue::Number(b)) => a
                .partial_cmp(b)
                .unwrap_or_else(|| a.is_nan().cmp(&b.is_nan())),
            (FieldValue::Text(a), FieldValue::Text(b)) => a.cmp(b),
            (FieldValue::Number(_), FieldValue::Text(_)) => Ordering::Less,
            (FieldValue::Text(_), FieldValue::Number(_)) => Ordering::Greater,
        }
    }
}

/// An opaque mapping from field name to scalar value.
pub trait Record {
    /// Read a field by its wire key. Unknown keys and null values are `None`.
    fn field(&self, key: &str) -> Option<FieldValue<'_>>;
}

impl<R: Record + ?Sized> Record for &R {
    fn field(&self, key: &str) -> Option<FieldValue<'_>> {
        (**self).field(key)
    }
}

#[cfg(feature = "serde")]
impl Record for serde_json::Map<String, serde_json::Value> {
    fn field(&self, key: &str) -> Option<FieldValue<'_>> {
        use serde_json::Value;

        match self.get(key)? {
            Value::String(text) => Some(FieldValue::Text(text)),
            Value::Number(number) => number.as_f64().map(FieldValue::Number),
            Value::Bool(true) => Some(FieldValue::Text("true")),
            Value::Bool(false) => Some(FieldValue::Text("false")),
            Value::Null | Value::Array(_) | Value::Object(_) => None,
        }
    }
}

#[cfg(feature = "serde")]
impl Record for serde_json::Value {
    fn field(&self, key: &str) -> Option<FieldValue<'_>> {
        self.as_object().and_then(|object| object.field(key))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integral_numbers_render_without_fraction() {
        assert_eq!(FieldValue::Number(25544.0).as_text(), "25544");
        assert_eq!(FieldValue::Number(1.5).as_text(), "1.5");
        assert_eq!(FieldValue::Text("ISS").as_text(), "ISS");
    }

    #[test]
    fn natural_ordering_puts_numbers_before_text() {
        let number = FieldValue::Number(9.0);
        let text = FieldValue::Text("1");
        assert_eq!(number.natural_cmp(&text), Ordering::Less);
        assert_eq!(text.natural_cmp(&number), Ordering::Greater);
        assert_eq!(
            FieldValue::Number(2.0).natural_cmp(&FieldValue::Number(10.0)),
            Ordering::Less
        );
        assert_eq!(
            FieldValue::Text("10").natural_cmp(&FieldValue::Text("2")),
            Ordering::Less
        );
    }

    #[test]
    fn nan_sorts_above_other_numbers() {
        let nan = FieldValue::Number(f64::NAN);
        assert_eq!(nan.natural_cmp(&FieldValue::Number(1.0)), Ordering::Greater);
        assert_eq!(FieldValue::Number(1.0).natural_cmp(&nan), Ordering::Less);
        assert_eq!(nan.natural_cmp(&nan), Ordering::Equal);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn json_objects_expose_scalars_only() {
        let value = serde_json::json!({
            "name": "HUBBLE",
            "noradCatId": 20580,
            "active": true,
            "decayDate": null,
            "tags": ["a"],
        });

        assert_eq!(value.field("name"), Some(FieldValue::Text("HUBBLE")));
        assert_eq!(value.field("noradCatId"), Some(FieldValue::Number(20580.0)));
        assert_eq!(value.field("active"), Some(FieldValue::Text("true")));
        assert_eq!(value.field("decayDate"), None);
        assert_eq!(value.field("tags"), None);
        assert_eq!(value.field("missing"), None);
    }
}
