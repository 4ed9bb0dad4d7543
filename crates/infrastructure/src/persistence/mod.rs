//! Artifact persistence
//!
//! The pipeline's three artifacts: the input CSV it consumes, the
//! full-detail JSON it writes for audit, and the flat CSV summary both
//! presentation surfaces read.

mod error;
mod input_store;
mod results_store;
mod summary_store;

pub use error::PersistenceError;
pub use input_store::InputStore;
pub use results_store::ResultsStore;
pub use summary_store::SummaryStore;
