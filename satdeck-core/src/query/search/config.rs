//! Declarative search configuration
//!
//! A [`SearchConfig`] names the fields that take part in a search, how each
//! field is typed, and an optional validator that decides per query whether
//! the field is eligible at all.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

static DIGITS_ONLY: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[0-9]+$").expect("digits-only pattern is valid")
});

/// Declared value type of a searchable field.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum ValueType {
    #[default]
    Text,
    Number,
}

/// Predicate over the trimmed raw query that gates a field's participation.
#[derive(Clone)]
pub struct FieldValidator {
    name: &'static str,
    predicate: Arc<dyn Fn(&str) -> bool + Send + Sync>,
}

impl fmt::Debug for FieldValidator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldValidator")
            .field("name", &self.name)
            .finish()
    }
}

impl FieldValidator {
    pub fn from_fn(
        name: &'static str,
        predicate: impl Fn(&str) -> bool + Send + Sync + 'static,
    ) -> Self {
        Self {
            name,
            predicate: Arc::new(predicate),
        }
    }

    /// Accepts queries made only of ASCII digits, e.g. NORAD catalog ids.
    pub fn digits_only() -> Self {
        Self::from_fn("digits_only", |query| DIGITS_ONLY.is_match(query.trim()))
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn accepts(&self, query: &str) -> bool {
        (self.predicate)(query)
    }
}

/// One searchable field.
#[derive(Debug, Clone)]
pub struct FieldDescriptor {
    pub key: String,
    pub label: String,
    pub value_type: ValueType,
    pub validator: Option<FieldValidator>,
}

impl FieldDescriptor {
    pub fn text(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            value_type: ValueType::Text,
            validator: None,
        }
    }

    pub fn number(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value_type: ValueType::Number,
            ..Self::text(key, label)
        }
    }

    pub fn with_validator(mut self, validator: FieldValidator) -> Self {
        self.validator = Some(validator);
        self
    }

    /// Whether this field takes part in matching `query`. Fields without a
    /// validator are always eligible.
    pub fn accepts(&self, query: &str) -> bool {
        self.validator
            .as_ref()
            .is_none_or(|validator| validator.accepts(query))
    }
}

/// Search behaviour for one view. Built once, shared read-only.
#[derive(Debug, Clone)]
pub struct SearchConfig {
    pub fields: Vec<FieldDescriptor>,
    pub allow_partial_match: bool,
    pub case_sensitive: bool,
    pub min_query_length: usize,
    pub search_on_type: bool,
    pub placeholder: Option<String>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            fields: Vec::new(),
            allow_partial_match: true,
            case_sensitive: false,
            min_query_length: 1,
            search_on_type: false,
            placeholder: None,
        }
    }
}

impl SearchConfig {
    pub fn new(fields: Vec<FieldDescriptor>) -> Self {
        Self {
            fields,
            ..Self::default()
        }
    }

    pub fn allow_partial_match(mut self, allow: bool) -> Self {
        self.allow_partial_match = allow;
        self
    }

    pub fn case_sensitive(mut self, sensitive: bool) -> Self {
        self.case_sensitive = sensitive;
        self
    }

    pub fn min_query_length(mut self, length: usize) -> Self {
        self.min_query_length = length;
        self
    }

    pub fn search_on_type(mut self, enabled: bool) -> Self {
        self.search_on_type = enabled;
        self
    }

    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    /// Fields whose validators accept `query`, in configuration order.
    pub fn eligible_fields<'a>(
        &'a self,
        query: &'a str,
    ) -> impl Iterator<Item = &'a FieldDescriptor> + 'a {
        self.fields.iter().filter(move |field| field.accepts(query))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digits_only_accepts_ascii_digits() {
        let validator = FieldValidator::digits_only();
        assert!(validator.accepts("25544"));
        assert!(validator.accepts(" 42 "));
        assert!(!validator.accepts("abc"));
        assert!(!validator.accepts("255a"));
        assert!(!validator.accepts(""));
        // Non-ASCII digits are rejected
        assert!(!validator.accepts("٣"));
    }

    #[test]
    fn eligible_fields_respect_validators() {
        let config = SearchConfig::new(vec![
            FieldDescriptor::text("name", "Name"),
            FieldDescriptor::number("noradCatId", "NORAD ID")
                .with_validator(FieldValidator::digits_only()),
        ]);

        let for_text: Vec<_> =
            config.eligible_fields("hubble").map(|f| f.key.as_str()).collect();
        assert_eq!(for_text, vec!["name"]);

        let for_digits: Vec<_> =
            config.eligible_fields("205").map(|f| f.key.as_str()).collect();
        assert_eq!(for_digits, vec!["name", "noradCatId"]);
    }

    #[test]
    fn defaults_are_partial_and_case_insensitive() {
        let config = SearchConfig::default();
        assert!(config.allow_partial_match);
        assert!(!config.case_sensitive);
        assert_eq!(config.min_query_length, 1);
        assert!(!config.search_on_type);
        assert!(config.fields.is_empty());
    }
}
