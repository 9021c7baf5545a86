use std::path::{Path, PathBuf};

use async_trait::async_trait;
use satdeck_model::{SatelliteData, SatelliteQueryParams};
use serde::Deserialize;
use tracing::debug;

use crate::error::{CatalogError, Result};

/// Anything that can produce catalog rows for a request.
#[async_trait]
pub trait SatelliteSource: Send + Sync {
    async fn fetch_satellites(
        &self,
        params: &SatelliteQueryParams,
    ) -> Result<Vec<SatelliteData>>;
}

#[async_trait]
impl<T: SatelliteSource + ?Sized> SatelliteSource for Box<T> {
    async fn fetch_satellites(
        &self,
        params: &SatelliteQueryParams,
    ) -> Result<Vec<SatelliteData>> {
        (**self).fetch_satellites(params).await
    }
}

/// The `{ "data": [...] }` response body. A missing or null `data` is an
/// empty catalog.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct SatellitesEnvelope {
    #[serde(default)]
    data: Option<Vec<SatelliteData>>,
}

impl SatellitesEnvelope {
    pub(crate) fn into_satellites(self) -> Vec<SatelliteData> {
        self.data.unwrap_or_default()
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum CatalogDump {
    Bare(Vec<SatelliteData>),
    Envelope(SatellitesEnvelope),
}

/// Catalog rows read from a JSON dump, either a bare array or the API
/// envelope. Object-type restrictions are applied locally the way the API
/// applies them; attribute projection is not.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl SatelliteSource for FileSource {
    async fn fetch_satellites(
        &self,
        params: &SatelliteQueryParams,
    ) -> Result<Vec<SatelliteData>> {
        let raw = tokio::fs::read(&self.path)
            .await
            .map_err(|err| CatalogError::io(&self.path, err))?;

        let satellites = match serde_json::from_slice::<CatalogDump>(&raw)? {
            CatalogDump::Bare(rows) => rows,
            CatalogDump::Envelope(envelope) => envelope.into_satellites(),
        };

        let satellites: Vec<SatelliteData> = if params.is_unrestricted() {
            satellites
        } else {
            satellites
                .into_iter()
                .filter(|sat| {
                    sat.object_type
                        .is_some_and(|t| params.object_types.contains(&t))
                })
                .collect()
        };

        debug!(
            path = %self.path.display(),
            count = satellites.len(),
            "loaded satellites from file"
        );
        Ok(satellites)
    }
}
