//! Core data model definitions shared across satdeck crates.
#![allow(missing_docs)]

pub mod error;
pub mod filter_types;
pub mod record;
pub mod satellite;

pub use error::{ModelError, Result as ModelResult};
pub use filter_types::{Attribute, ObjectType, OrbitCode};
pub use record::{FieldValue, Record};
pub use satellite::{
    Filters, SatelliteData, SatelliteQueryParams, TrackedSatellite,
};
