//! Search execution
//!
//! Trims the query, applies the length gate and matches each record across
//! the fields whose validators accept the query. Matching rows keep their
//! input order.

use satdeck_model::Record;
use serde::Serialize;
use tracing::debug;

use super::config::SearchConfig;

/// Outcome of one search invocation. Treat as an immutable snapshot.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult<R> {
    pub results: Vec<R>,
    pub total_count: usize,
    pub filtered_count: usize,
    pub is_active: bool,
    /// The trimmed query that produced this result.
    pub query: String,
}

impl<R> SearchResult<R> {
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    pub fn into_results(self) -> Vec<R> {
        self.results
    }
}

/// Case-folding comparison of a normalized query against field text.
struct QueryMatcher {
    needle: String,
    partial: bool,
    fold_case: bool,
}

impl QueryMatcher {
    fn new(trimmed: &str, config: &SearchConfig) -> Self {
        let fold_case = !config.case_sensitive;
        Self {
            needle: if fold_case {
                trimmed.to_lowercase()
            } else {
                trimmed.to_string()
            },
            partial: config.allow_partial_match,
            fold_case,
        }
    }

    fn matches(&self, candidate: &str) -> bool {
        if self.fold_case {
            self.compare(&candidate.to_lowercase())
        } else {
            self.compare(candidate)
        }
    }

    fn compare(&self, candidate: &str) -> bool {
        if self.partial {
            candidate.contains(self.needle.as_str())
        } else {
            candidate == self.needle
        }
    }
}

/// Filter `records` down to those matching `query` under `config`.
///
/// The query is trimmed first. Queries shorter than
/// `config.min_query_length` characters leave the search inactive and return
/// every record. Otherwise a record matches when any field whose validator
/// accepts the query holds a value that contains (partial mode) or equals
/// (exact mode) the query. Null and unknown fields never match. Matching
/// records keep their input order.
pub fn search<R: Record + Clone>(
    records: &[R],
    config: &SearchConfig,
    query: &str,
) -> SearchResult<R> {
    let trimmed = query.trim();
    let total_count = records.len();

    if trimmed.chars().count() < config.min_query_length {
        return SearchResult {
            results: records.to_vec(),
            total_count,
            filtered_count: total_count,
            is_active: false,
            query: trimmed.to_string(),
        };
    }

    let eligible: Vec<&str> = config
        .eligible_fields(trimmed)
        .map(|field| field.key.as_str())
        .collect();
    let matcher = QueryMatcher::new(trimmed, config);

    let results: Vec<R> = records
        .iter()
        .filter(|record| {
            eligible.iter().any(|key| {
                record
                    .field(key)
                    .is_some_and(|value| matcher.matches(&value.as_text()))
            })
        })
        .cloned()
        .collect();

    debug!(
        query = trimmed,
        eligible_fields = ?eligible,
        matched = results.len(),
        total = total_count,
        "search executed"
    );

    SearchResult {
        filtered_count: results.len(),
        results,
        total_count,
        is_active: true,
        query: trimmed.to_string(),
    }
}
