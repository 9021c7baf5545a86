//! Configuration loading for satdeck.
//!
//! Settings come from one file (explicit, `$SATDECK_CONFIG_PATH`, or a
//! well-known location), inline JSON in `$SATDECK_CONFIG_JSON`, or built-in
//! defaults, and are then adjusted by individual `SATDECK_*` environment
//! variables.

pub mod env;
pub mod loader;
pub mod models;

pub use env::EnvOverrides;
pub use loader::{
    ConfigLoad, ConfigLoadError, ConfigLoader, ConfigLoaderOptions,
    ConfigSource,
};
pub use models::{ApiConfig, DashboardConfig, LoggingConfig, StorageConfig};
