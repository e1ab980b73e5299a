//! Route definitions

use axum::{Router, routing::get};

use crate::{handlers, state::AppState};

/// Create the router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::dashboard_page))
        .route("/api/weather", get(handlers::dashboard_json))
        .route("/health", get(handlers::health_check))
        .with_state(state)
}
