//! Config-driven client-side search
//!
//! - [`config`]: field descriptors, validators and per-view settings
//! - [`engine`]: the pure `search` function and its result snapshot
//! - [`presets`]: the catalog and tracked-satellite configurations

pub mod config;
pub mod engine;
pub mod presets;

pub use config::{FieldDescriptor, FieldValidator, SearchConfig, ValueType};
pub use engine::{SearchResult, search};
pub use presets::{all_satellites_config, tracked_satellites_config};
