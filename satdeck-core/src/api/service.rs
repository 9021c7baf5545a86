use satdeck_model::SatelliteQueryParams;
use tracing::{info, warn};

use super::source::SatelliteSource;
use crate::error::Result;
use crate::store::DashboardStore;

/// Loads catalog rows from a [`SatelliteSource`] into a [`DashboardStore`].
#[derive(Debug, Clone)]
pub struct CatalogService<S> {
    source: S,
}

impl<S: SatelliteSource> CatalogService<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Fetch with `params` and replace the store's catalog with the result.
    ///
    /// `loading` is raised for the duration of the fetch and cleared on every
    /// exit path. On failure the previous catalog is left in place.
    pub async fn load_into(
        &self,
        store: &mut DashboardStore,
        params: &SatelliteQueryParams,
    ) -> Result<usize> {
        store.set_loading(true);
        let fetched = self.source.fetch_satellites(params).await;
        store.set_loading(false);

        let satellites = fetched.inspect_err(|err| {
            warn!(error = %err, "catalog fetch failed");
        })?;

        let count = satellites.len();
        store.set_full_data_fetched(params.is_unrestricted());
        store.set_displayed_satellites(satellites.clone());
        store.set_all_satellites(satellites);

        info!(count, full = params.is_unrestricted(), "loaded catalog");
        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use async_trait::async_trait;
    use satdeck_model::{ObjectType, SatelliteData};

    use super::*;
    use crate::error::CatalogError;

    #[derive(Default)]
    struct Scripted {
        fail: bool,
        seen: Mutex<Vec<SatelliteQueryParams>>,
    }

    #[async_trait]
    impl SatelliteSource for Scripted {
        async fn fetch_satellites(
            &self,
            params: &SatelliteQueryParams,
        ) -> Result<Vec<SatelliteData>> {
            self.seen.lock().expect("lock").push(params.clone());
            if self.fail {
                return Err(CatalogError::io(
                    "catalog.json",
                    std::io::Error::other("boom"),
                ));
            }
            Ok(vec![
                SatelliteData::new("1", "A"),
                SatelliteData::new("2", "B"),
            ])
        }
    }

    #[tokio::test]
    async fn unrestricted_load_fills_store() {
        let service = CatalogService::new(Scripted::default());
        let mut store = DashboardStore::new();

        let count = service
            .load_into(&mut store, &SatelliteQueryParams::default())
            .await
            .expect("load");

        assert_eq!(count, 2);
        assert_eq!(store.all_satellites().len(), 2);
        assert_eq!(store.displayed_satellites(), store.all_satellites());
        assert!(store.full_data_fetched());
        assert!(!store.loading());
        assert_eq!(service.source().seen.lock().expect("lock").len(), 1);
    }

    #[tokio::test]
    async fn restricted_load_is_not_full_data() {
        let service = CatalogService::new(Scripted::default());
        let mut store = DashboardStore::new();
        let params = SatelliteQueryParams {
            object_types: vec![ObjectType::Payload],
            ..SatelliteQueryParams::default()
        };

        service.load_into(&mut store, &params).await.expect("load");
        assert!(!store.full_data_fetched());
    }

    #[tokio::test]
    async fn failure_clears_loading_and_keeps_catalog() {
        let service = CatalogService::new(Scripted {
            fail: true,
            ..Scripted::default()
        });
        let mut store = DashboardStore::new();
        store.set_all_satellites(vec![SatelliteData::new("9", "OLD")]);

        let result = service
            .load_into(&mut store, &SatelliteQueryParams::default())
            .await;

        assert!(result.is_err());
        assert!(!store.loading());
        assert_eq!(store.all_satellites()[0].norad_cat_id, "9");
    }
}
