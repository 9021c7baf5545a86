//! `SATDECK_*` environment variables.

use std::env;
use std::path::PathBuf;

use crate::loader::ConfigLoadError;
use crate::models::DashboardConfig;

pub const CONFIG_PATH_VAR: &str = "SATDECK_CONFIG_PATH";
pub const CONFIG_JSON_VAR: &str = "SATDECK_CONFIG_JSON";
pub const API_URL_VAR: &str = "SATDECK_API_URL";
pub const API_TIMEOUT_VAR: &str = "SATDECK_API_TIMEOUT_SECS";
pub const FILTERS_PATH_VAR: &str = "SATDECK_FILTERS_PATH";
pub const LOG_VAR: &str = "SATDECK_LOG";

/// Snapshot of the environment relevant to configuration. Blank values are
/// treated as unset.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvOverrides {
    pub config_path: Option<PathBuf>,
    pub config_json: Option<String>,
    pub api_url: Option<String>,
    pub api_timeout_secs: Option<String>,
    pub filters_path: Option<PathBuf>,
    pub log_filter: Option<String>,
}

impl EnvOverrides {
    pub fn gather() -> Self {
        Self {
            config_path: var(CONFIG_PATH_VAR).map(PathBuf::from),
            config_json: var(CONFIG_JSON_VAR),
            api_url: var(API_URL_VAR),
            api_timeout_secs: var(API_TIMEOUT_VAR),
            filters_path: var(FILTERS_PATH_VAR).map(PathBuf::from),
            log_filter: var(LOG_VAR),
        }
    }

    /// Apply the per-setting overrides on top of `config`.
    pub fn apply(
        &self,
        config: &mut DashboardConfig,
    ) -> Result<(), ConfigLoadError> {
        if let Some(url) = &self.api_url {
            config.api.base_url = url.clone();
        }
        if let Some(raw) = &self.api_timeout_secs {
            config.api.timeout_secs = raw.trim().parse().map_err(|source| {
                ConfigLoadError::InvalidEnv {
                    var: API_TIMEOUT_VAR,
                    value: raw.clone(),
                    source,
                }
            })?;
        }
        if let Some(path) = &self.filters_path {
            config.storage.filters_path = path.clone();
        }
        if let Some(filter) = &self.log_filter {
            config.logging.filter = filter.clone();
        }
        Ok(())
    }
}

fn var(key: &str) -> Option<String> {
    env::var(key).ok().filter(|value| !value.trim().is_empty())
}
