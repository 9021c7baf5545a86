pub mod filtering;
pub mod search;
pub mod sorting;
pub mod types;

pub use filtering::{apply_filters, matches_filters, query_params_for};
pub use search::{
    FieldDescriptor, FieldValidator, SearchConfig, SearchResult, ValueType,
    all_satellites_config, search, tracked_satellites_config,
};
pub use sorting::{
    ChainedSort, FieldKey, FieldSort, SortCost, SortStrategy, compare_records,
    sort_records,
};
pub use types::*;
