use std::fs;
use std::num::ParseIntError;
use std::path::{Path, PathBuf};

use once_cell::sync::Lazy;
use thiserror::Error;
use tracing::{debug, info};

use crate::env::{CONFIG_JSON_VAR, EnvOverrides};
use crate::models::DashboardConfig;

static DEFAULT_CONFIG_LOCATIONS: Lazy<Vec<PathBuf>> = Lazy::new(|| {
    vec![
        PathBuf::from("satdeck.toml"),
        PathBuf::from("satdeck.json"),
        PathBuf::from("config/satdeck.toml"),
        PathBuf::from("config/satdeck.json"),
    ]
});

/// Where the loaded configuration came from.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ConfigSource {
    #[default]
    Default,
    Explicit(PathBuf),
    EnvPath(PathBuf),
    EnvInline,
    File(PathBuf),
}

impl ConfigSource {
    pub fn describe(&self) -> String {
        match self {
            ConfigSource::Default => "built-in defaults".to_string(),
            ConfigSource::Explicit(path) => {
                format!("{} (--config)", path.display())
            }
            ConfigSource::EnvPath(path) => {
                format!("{} (SATDECK_CONFIG_PATH)", path.display())
            }
            ConfigSource::EnvInline => CONFIG_JSON_VAR.to_string(),
            ConfigSource::File(path) => path.display().to_string(),
        }
    }
}

#[derive(Debug, Default, Clone)]
pub struct ConfigLoaderOptions {
    pub config_path: Option<PathBuf>,
    pub env_file: Option<PathBuf>,
    /// Directory the well-known config locations are resolved against.
    /// Defaults to the working directory.
    pub search_root: Option<PathBuf>,
}

#[derive(Debug)]
pub struct ConfigLoad {
    pub config: DashboardConfig,
    pub source: ConfigSource,
    pub env_file_loaded: bool,
}

#[derive(Debug, Default)]
pub struct ConfigLoader {
    options: ConfigLoaderOptions,
}

impl ConfigLoader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: ConfigLoaderOptions) -> Self {
        Self { options }
    }

    pub fn with_config_path<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.options.config_path = Some(path.into());
        self
    }

    pub fn with_env_file<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.options.env_file = Some(path.into());
        self
    }

    pub fn with_search_root<P: Into<PathBuf>>(mut self, root: P) -> Self {
        self.options.search_root = Some(root.into());
        self
    }

    /// Resolve the configuration.
    ///
    /// The `.env` file is applied to the process environment first. The base
    /// document is then taken from the first of: the explicit path,
    /// `$SATDECK_CONFIG_PATH`, `$SATDECK_CONFIG_JSON`, the first existing
    /// well-known file, or the defaults. Individual `SATDECK_*` variables are
    /// applied last.
    pub fn load(&self) -> Result<ConfigLoad, ConfigLoadError> {
        let env_file_loaded = self.load_env_file()?;
        let env = EnvOverrides::gather();

        let (mut config, source) = self.load_base(&env)?;
        env.apply(&mut config)?;

        info!(source = %source.describe(), "loaded configuration");
        Ok(ConfigLoad {
            config,
            source,
            env_file_loaded,
        })
    }

    fn load_env_file(&self) -> Result<bool, ConfigLoadError> {
        let loaded = match &self.options.env_file {
            Some(path) => dotenvy::from_path(path).map(|_| true),
            None => dotenvy::dotenv().map(|_| true),
        };
        match loaded {
            Ok(loaded) => Ok(loaded),
            Err(dotenvy::Error::Io(_)) => Ok(false),
            Err(err) => Err(err.into()),
        }
    }

    fn load_base(
        &self,
        env: &EnvOverrides,
    ) -> Result<(DashboardConfig, ConfigSource), ConfigLoadError> {
        if let Some(path) = &self.options.config_path {
            let config = load_from_file(path)?;
            return Ok((config, ConfigSource::Explicit(path.clone())));
        }

        if let Some(path) = &env.config_path {
            let config = load_from_file(path)?;
            return Ok((config, ConfigSource::EnvPath(path.clone())));
        }

        if let Some(raw) = &env.config_json {
            let config = serde_json::from_str(raw).map_err(|source| {
                ConfigLoadError::Json {
                    origin: CONFIG_JSON_VAR.to_string(),
                    source,
                }
            })?;
            return Ok((config, ConfigSource::EnvInline));
        }

        if let Some(path) = self.find_default_file() {
            let config = load_from_file(&path)?;
            return Ok((config, ConfigSource::File(path)));
        }

        debug!("no configuration file found, using defaults");
        Ok((DashboardConfig::default(), ConfigSource::Default))
    }

    fn find_default_file(&self) -> Option<PathBuf> {
        DEFAULT_CONFIG_LOCATIONS
            .iter()
            .map(|candidate| match &self.options.search_root {
                Some(root) => root.join(candidate),
                None => candidate.clone(),
            })
            .find(|path| path.exists())
    }
}

/// Read a TOML or JSON document, chosen by extension. Other extensions are
/// tried as TOML, then JSON.
pub fn load_from_file(path: &Path) -> Result<DashboardConfig, ConfigLoadError> {
    if !path.exists() {
        return Err(ConfigLoadError::MissingConfig {
            path: path.to_path_buf(),
        });
    }

    let contents =
        fs::read_to_string(path).map_err(|source| ConfigLoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;

    let parse_json = |source| ConfigLoadError::Json {
        origin: path.display().to_string(),
        source,
    };
    let parse_toml = |source| ConfigLoadError::Parse {
        path: path.to_path_buf(),
        source,
    };

    match path.extension().and_then(|ext| ext.to_str()) {
        Some("json") => serde_json::from_str(&contents).map_err(parse_json),
        Some("toml") => toml::from_str(&contents).map_err(parse_toml),
        _ => toml::from_str(&contents).or_else(|toml_err| {
            serde_json::from_str(&contents).map_err(|_| parse_toml(toml_err))
        }),
    }
}

#[derive(Debug, Error)]
pub enum ConfigLoadError {
    #[error("configuration file missing: {path}")]
    MissingConfig { path: PathBuf },
    #[error("failed to read configuration {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse configuration {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("failed to parse JSON configuration from {origin}")]
    Json {
        origin: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("invalid value '{value}' for {var}")]
    InvalidEnv {
        var: &'static str,
        value: String,
        #[source]
        source: ParseIntError,
    },
    #[error(transparent)]
    EnvFile(#[from] dotenvy::Error),
}
