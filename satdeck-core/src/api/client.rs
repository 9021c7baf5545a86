use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use satdeck_model::{SatelliteData, SatelliteQueryParams};
use tracing::{debug, info, warn};
use url::Url;

use super::source::{SatelliteSource, SatellitesEnvelope};
use crate::error::{CatalogError, Result};

/// Path of the catalog listing, relative to the base URL.
pub const SATELLITES_PATH: &str = "/v1/satellites";

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// HTTP client for the satellite catalog API.
#[derive(Clone)]
pub struct CatalogClient {
    client: Client,
    base_url: String,
}

impl std::fmt::Debug for CatalogClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CatalogClient")
            .field("base_url", &self.base_url)
            .finish()
    }
}

impl CatalogClient {
    /// Create a client for `base_url` with the given request timeout.
    ///
    /// Users commonly pass `localhost:3000`, which reqwest rejects, so a
    /// missing scheme becomes `http://` and a trailing slash is dropped.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let base_url = normalize_base_url(base_url);
        Url::parse(&base_url).map_err(|source| CatalogError::InvalidBaseUrl {
            raw: base_url.clone(),
            source,
        })?;

        let client = Client::builder().timeout(timeout).build()?;

        info!(%base_url, ?timeout, "created catalog client");
        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn satellites_url(&self) -> String {
        format!("{}{}", self.base_url, SATELLITES_PATH)
    }
}

fn normalize_base_url(raw: &str) -> String {
    let trimmed = raw.trim().trim_end_matches('/');
    let with_scheme =
        if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
            trimmed.to_string()
        } else {
            format!("http://{trimmed}")
        };
    if with_scheme != raw {
        warn!(
            "Normalized catalog base URL from '{}' to '{}'",
            raw, with_scheme
        );
    }
    with_scheme
}

/// Query pairs for a catalog request. Empty selections expand to every
/// variant, comma-joined by wire name.
pub(crate) fn query_pairs(
    params: &SatelliteQueryParams,
) -> [(&'static str, String); 2] {
    let object_types = params
        .effective_object_types()
        .iter()
        .map(|t| t.api_name())
        .collect::<Vec<_>>()
        .join(",");
    let attributes = params
        .effective_attributes()
        .iter()
        .map(|a| a.key())
        .collect::<Vec<_>>()
        .join(",");
    [("objectTypes", object_types), ("attributes", attributes)]
}

#[async_trait]
impl SatelliteSource for CatalogClient {
    async fn fetch_satellites(
        &self,
        params: &SatelliteQueryParams,
    ) -> Result<Vec<SatelliteData>> {
        let url = self.satellites_url();
        let response = self
            .client
            .get(&url)
            .query(&query_pairs(params))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(CatalogError::Status { status, url });
        }

        let envelope: SatellitesEnvelope = response.json().await?;
        let satellites = envelope.into_satellites();
        debug!(count = satellites.len(), %url, "fetched satellites");
        Ok(satellites)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use satdeck_model::{Attribute, ObjectType};

    #[test]
    fn base_url_gains_scheme_and_loses_trailing_slash() {
        assert_eq!(normalize_base_url("localhost:3000/"), "http://localhost:3000");
        assert_eq!(
            normalize_base_url(" https://api.example.test "),
            "https://api.example.test"
        );
        assert_eq!(normalize_base_url("http://x:1"), "http://x:1");
    }

    #[test]
    fn invalid_base_url_is_rejected() {
        let err = CatalogClient::new("http://exa mple", DEFAULT_TIMEOUT)
            .expect_err("spaces are not valid in a host");
        assert!(matches!(err, CatalogError::InvalidBaseUrl { .. }));
    }

    #[test]
    fn empty_params_request_every_variant() {
        let [(_, object_types), (_, attributes)] =
            query_pairs(&SatelliteQueryParams::default());
        assert_eq!(object_types, "ROCKET BODY,DEBRIS,UNKNOWN,PAYLOAD");
        assert_eq!(attributes.split(',').count(), Attribute::all().len());
        assert!(attributes.starts_with("noradCatId,"));
    }

    #[test]
    fn explicit_params_are_kept_in_order() {
        let params = SatelliteQueryParams {
            object_types: vec![ObjectType::Payload, ObjectType::Debris],
            attributes: vec![Attribute::Name],
        };
        let [(k1, object_types), (k2, attributes)] = query_pairs(&params);
        assert_eq!((k1, object_types.as_str()), ("objectTypes", "PAYLOAD,DEBRIS"));
        assert_eq!((k2, attributes.as_str()), ("attributes", "name"));
    }
}
