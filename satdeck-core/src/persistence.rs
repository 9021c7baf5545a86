//! On-disk persistence for the attribute filter panel.

use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use satdeck_model::Filters;
use tracing::{debug, info};

use crate::error::{CatalogError, Result};

/// JSON file holding the last saved [`Filters`].
#[derive(Debug, Clone)]
pub struct FilterStore {
    path: PathBuf,
}

impl FilterStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the saved filters. A missing file or a file with no selections
    /// yields `None`; a malformed file is an error.
    pub fn load(&self) -> Result<Option<Filters>> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "no saved filters");
                return Ok(None);
            }
            Err(err) => return Err(CatalogError::io(&self.path, err)),
        };

        let filters: Filters = serde_json::from_str(&raw)?;
        Ok((!filters.is_empty()).then_some(filters))
    }

    /// Atomically replace the saved filters.
    ///
    /// The JSON is written to a sibling temp file, synced, then renamed over
    /// the destination so readers never observe a partial file.
    pub fn save(&self, filters: &Filters) -> Result<()> {
        let parent = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        fs::create_dir_all(parent)
            .map_err(|err| CatalogError::io(parent, err))?;

        let body = serde_json::to_vec_pretty(filters)?;
        let mut tmp = tempfile::NamedTempFile::new_in(parent)
            .map_err(|err| CatalogError::io(parent, err))?;
        tmp.write_all(&body)
            .and_then(|_| tmp.as_file().sync_all())
            .map_err(|err| CatalogError::io(tmp.path(), err))?;
        tmp.persist(&self.path)
            .map_err(|err| CatalogError::io(&self.path, err.error))?;

        info!(
            path = %self.path.display(),
            active = filters.active_count(),
            "saved filters"
        );
        Ok(())
    }

    /// Remove the saved filters. Succeeds when nothing was saved.
    pub fn clear(&self) -> Result<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => {
                info!(path = %self.path.display(), "cleared saved filters");
                Ok(())
            }
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            Err(err) => Err(CatalogError::io(&self.path, err)),
        }
    }
}
