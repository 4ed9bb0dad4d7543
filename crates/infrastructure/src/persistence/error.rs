//! Persistence error types

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while reading or writing pipeline artifacts
///
/// All of these are fatal to a run: artifact I/O has no row-level
/// recovery.
#[derive(Debug, Error)]
pub enum PersistenceError {
    /// Artifact file could not be opened or created
    #[error("Cannot access {path}: {source}")]
    Io {
        /// The artifact path
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// CSV row could not be parsed or written
    #[error("CSV error in {path}: {source}")]
    Csv {
        /// The artifact path
        path: PathBuf,
        /// The underlying CSV error
        #[source]
        source: csv::Error,
    },

    /// JSON serialization failed
    #[error("JSON error in {path}: {source}")]
    Json {
        /// The artifact path
        path: PathBuf,
        /// The underlying JSON error
        #[source]
        source: serde_json::Error,
    },
}
