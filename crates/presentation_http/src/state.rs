//! Application state shared across handlers

use std::sync::Arc;

use domain::SummaryRow;

/// Shared server state
///
/// The summary artifact is loaded once at startup; the server never
/// writes it, so the rows are immutable for the process lifetime.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Summary rows, in artifact order
    pub rows: Arc<Vec<SummaryRow>>,
}

impl AppState {
    /// Create state over the loaded summary rows
    #[must_use]
    pub fn new(rows: Vec<SummaryRow>) -> Self {
        Self {
            rows: Arc::new(rows),
        }
    }
}
