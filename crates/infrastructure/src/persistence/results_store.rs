//! Full-detail results artifact writer

use std::path::{Path, PathBuf};

use domain::EnrichedEntity;
use tracing::info;

use crate::persistence::PersistenceError;

/// Writes the full enrichment results (raw resolved payloads included)
/// as pretty-printed JSON, for audit and debugging
#[derive(Debug, Clone)]
pub struct ResultsStore {
    path: PathBuf,
}

impl ResultsStore {
    /// Create a store for the given results path
    #[must_use]
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// The artifact path
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write all enriched entities, in input order
    ///
    /// # Errors
    ///
    /// Returns an error if the path is unwritable or serialization fails.
    pub fn save(&self, entities: &[EnrichedEntity]) -> Result<(), PersistenceError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(|source| PersistenceError::Io {
                    path: self.path.clone(),
                    source,
                })?;
            }
        }

        let json =
            serde_json::to_string_pretty(entities).map_err(|source| PersistenceError::Json {
                path: self.path.clone(),
                source,
            })?;
        std::fs::write(&self.path, json).map_err(|source| PersistenceError::Io {
            path: self.path.clone(),
            source,
        })?;

        info!(path = %self.path.display(), entities = entities.len(), "Wrote results artifact");
        Ok(())
    }
}
