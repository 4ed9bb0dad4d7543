//! Route definitions

use axum::{Router, routing::get};

use crate::{handlers, state::AppState};

/// Create the main router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::dashboard::page))
        .route("/health", get(handlers::health::health_check))
        .route("/api/rows", get(handlers::dashboard::rows))
        .route("/api/distribution", get(handlers::dashboard::distribution))
        .with_state(state)
}
