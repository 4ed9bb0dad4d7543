//! Summary artifact store

use std::path::{Path, PathBuf};

use domain::SummaryRow;
use tracing::info;

use crate::persistence::PersistenceError;

/// Reads and writes the flat CSV summary artifact consumed by the map
/// and dashboard views
///
/// Column headers are fixed by the serde renames on [`SummaryRow`]:
/// `Name, PSA Count, Sanctioned, Politically Exposed Person,
/// Related Entities Count, Risk Score, Risk Level, Country, Latitude,
/// Longitude`.
#[derive(Debug, Clone)]
pub struct SummaryStore {
    path: PathBuf,
}

impl SummaryStore {
    /// Create a store for the given summary path
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

    /// Write all summary rows, in input order
    ///
    /// # Errors
    ///
    /// Returns an error if the path is unwritable or a row fails to
    /// serialize.
    pub fn save(&self, rows: &[SummaryRow]) -> Result<(), PersistenceError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(|source| PersistenceError::Io {
                    path: self.path.clone(),
                    source,
                })?;
            }
        }

        let mut writer =
            csv::Writer::from_path(&self.path).map_err(|source| PersistenceError::Csv {
                path: self.path.clone(),
                source,
            })?;
        for row in rows {
            writer
                .serialize(row)
                .map_err(|source| PersistenceError::Csv {
                    path: self.path.clone(),
                    source,
                })?;
        }
        writer
            .flush()
            .map_err(|source| PersistenceError::Io {
                path: self.path.clone(),
                source,
            })?;

        info!(path = %self.path.display(), rows = rows.len(), "Wrote summary artifact");
        Ok(())
    }

    /// Load all summary rows, in artifact order
    ///
    /// # Errors
    ///
    /// Returns an error if the file is missing or a row is malformed.
    pub fn load(&self) -> Result<Vec<SummaryRow>, PersistenceError> {
        let mut reader =
            csv::Reader::from_path(&self.path).map_err(|source| PersistenceError::Csv {
                path: self.path.clone(),
                source,
            })?;

        let mut rows = Vec::new();
        for row in reader.deserialize() {
            let row: SummaryRow = row.map_err(|source| PersistenceError::Csv {
                path: self.path.clone(),
                source,
            })?;
            rows.push(row);
        }

        info!(path = %self.path.display(), rows = rows.len(), "Loaded summary artifact");
        Ok(rows)
    }
}
