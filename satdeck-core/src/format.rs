//! Display formatters for catalog values. Independent of the sort and search
//! engines, which always see raw values.

use satdeck_model::FieldValue;

/// Strip the braces the API wraps orbit codes in (`{LEO}` -> `LEO`).
/// Absent values render as an empty string.
pub fn clean_orbit_code(raw: Option<&str>) -> String {
    raw.map(|code| code.replace(['{', '}'], ""))
        .unwrap_or_default()
}

/// Plain cell text for a field value; absent values render empty.
pub fn display_value(value: Option<FieldValue<'_>>) -> String {
    value
        .map(|value| value.as_text().into_owned())
        .unwrap_or_default()
}

/// [`clean_orbit_code`] lifted to the cell formatter signature.
pub fn orbit_code_cell(value: Option<FieldValue<'_>>) -> String {
    match value {
        Some(FieldValue::Text(raw)) => clean_orbit_code(Some(raw)),
        other => display_value(other),
    }
}
