//! Catalog access: the `/v1/satellites` HTTP client, an offline file source,
//! and the service that loads either into the dashboard store.

pub mod client;
pub mod service;
pub mod source;

pub use client::{CatalogClient, DEFAULT_TIMEOUT, SATELLITES_PATH};
pub use service::CatalogService;
pub use source::{FileSource, SatelliteSource};
