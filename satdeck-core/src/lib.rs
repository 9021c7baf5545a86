//! # satdeck core
//!
//! Catalog plumbing and the in-memory engines behind the satellite dashboard.
//!
//! ## Overview
//!
//! - **Sorting**: stable single-key sort over any [`Record`](satdeck_model::Record),
//!   with absent values ordered as the largest value
//! - **Search**: configurable multi-field text search with per-field validators
//! - **Filtering**: object-type and orbit-code panel filters
//! - **Catalog access**: the `/v1/satellites` client and an offline file source
//! - **State**: the dashboard store and persisted filter selections
//!
//! ## Examples
//!
//! ```
//! use satdeck_core::query::{SortDirection, all_satellites_config, search, sort_records};
//! use satdeck_model::SatelliteData;
//!
//! let rows = vec![
//!     SatelliteData::new("25544", "ISS (ZARYA)"),
//!     SatelliteData::new("20580", "HST"),
//! ];
//!
//! let sorted = sort_records(&rows, "name", SortDirection::Asc);
//! assert_eq!(sorted[0].name, "HST");
//!
//! let hits = search(&rows, &all_satellites_config(), "255");
//! assert_eq!(hits.filtered_count, 1);
//! ```

#![allow(missing_docs)]

/// Catalog client, file source and loader service
pub mod api;

pub mod error;

/// Cell formatters
pub mod format;

/// Filter panel persistence
pub mod persistence;

/// Sorting, searching and attribute filtering
pub mod query;

pub mod store;

/// Table column configuration
pub mod table;

pub use api::{CatalogClient, CatalogService, FileSource, SatelliteSource};
pub use error::{CatalogError, Result};
pub use persistence::FilterStore;
pub use store::DashboardStore;
pub use table::{ColumnKind, TableColumn, default_columns, tracked_columns};
