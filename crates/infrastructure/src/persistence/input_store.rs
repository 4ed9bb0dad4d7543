//! Input artifact reader

use std::path::{Path, PathBuf};

use domain::InputRecord;
use tracing::info;

use crate::persistence::PersistenceError;

/// Reads the input CSV (columns `name,address,country`, lowercase
/// headers, one row per entity to process)
#[derive(Debug, Clone)]
pub struct InputStore {
    path: PathBuf,
}

impl InputStore {
    /// Create a store for the given input path
    #[must_use]
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Load all input records, in file order
    ///
    /// # Errors
    ///
    /// Returns an error if the file is missing or any row is malformed
    /// (a missing required field aborts the run).
    pub fn load(&self) -> Result<Vec<InputRecord>, PersistenceError> {
        let mut reader =
            csv::Reader::from_path(&self.path).map_err(|source| PersistenceError::Csv {
                path: self.path.clone(),
                source,
            })?;

        let mut records = Vec::new();
        for row in reader.deserialize() {
            let record: InputRecord = row.map_err(|source| PersistenceError::Csv {
                path: self.path.clone(),
                source,
            })?;
            records.push(record);
        }

        info!(path = %self.path.display(), rows = records.len(), "Loaded input records");
        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_input(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        file.write_all(contents.as_bytes()).expect("write");
        file
    }

    #[test]
    fn loads_rows_in_file_order() {
        let file = write_input(
            "name,address,country\n\
             Acme Corp,1 Main St,US\n\
             Globex,2 Side St,DE\n",
        );
        let records = InputStore::new(file.path()).load().expect("load");
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].name, "Acme Corp");
        assert_eq!(records[1].country, "DE");
    }

    #[test]
    fn missing_file_is_fatal() {
        let result = InputStore::new("does/not/exist.csv").load();
        assert!(matches!(result, Err(PersistenceError::Csv { .. })));
    }

    #[test]
    fn malformed_row_is_fatal() {
        // Second row is missing the country field
        let file = write_input(
            "name,address,country\n\
             Acme Corp,1 Main St,US\n\
             Globex,2 Side St\n",
        );
        let result = InputStore::new(file.path()).load();
        assert!(matches!(result, Err(PersistenceError::Csv { .. })));
    }

    #[test]
    fn empty_input_yields_no_rows() {
        let file = write_input("name,address,country\n");
        let records = InputStore::new(file.path()).load().expect("load");
        assert!(records.is_empty());
    }
}
