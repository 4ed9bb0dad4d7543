//! RiskAtlas HTTP presentation layer
//!
//! Serves the risk dashboard over the persisted summary artifact: a
//! risk-level distribution, and a name-filterable, paginated table.

pub mod handlers;
pub mod routes;
pub mod state;

pub use routes::create_router;
pub use state::AppState;
