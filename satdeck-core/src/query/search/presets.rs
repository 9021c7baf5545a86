//! Search configurations for the two catalog views.

use satdeck_model::Attribute;

use super::config::{FieldDescriptor, FieldValidator, SearchConfig};

fn name_field() -> FieldDescriptor {
    FieldDescriptor::text(Attribute::Name.key(), "Name")
}

fn norad_field() -> FieldDescriptor {
    FieldDescriptor::number(Attribute::NoradCatId.key(), "NORAD ID")
        .with_validator(FieldValidator::digits_only())
}

/// Search over the full catalog table: name and NORAD id, submitted
/// explicitly rather than on every keystroke.
pub fn all_satellites_config() -> SearchConfig {
    SearchConfig::new(vec![name_field(), norad_field()])
        .allow_partial_match(true)
        .case_sensitive(false)
        .min_query_length(1)
        .search_on_type(false)
}

/// Search over the tracked (selected) satellites, which also matches the
/// country code and runs as the user types.
pub fn tracked_satellites_config() -> SearchConfig {
    SearchConfig::new(vec![
        name_field(),
        norad_field(),
        FieldDescriptor::text(Attribute::CountryCode.key(), "Country Code"),
    ])
    .allow_partial_match(true)
    .case_sensitive(false)
    .min_query_length(1)
    .search_on_type(true)
    .placeholder("Search tracked satellites by name, NORAD ID, or country...")
}
