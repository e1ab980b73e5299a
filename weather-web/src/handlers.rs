//! Request handlers.

use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
    response::Html,
};
use serde::{Deserialize, Serialize};
use tracing::warn;
use weather_core::{Dashboard, load_dashboard};

use crate::{
    error::WebError,
    state::AppState,
    templates::render_page,
    view::PageView,
};

#[derive(Debug, Default, Deserialize)]
pub struct CityQuery {
    pub city: Option<String>,
}

/// `GET /` renders the dashboard, or the error panel when the lookup fails.
pub async fn dashboard_page(
    State(state): State<AppState>,
    Query(query): Query<CityQuery>,
) -> Result<(StatusCode, Html<String>), WebError> {
    let city = state.resolve_city(query.city.as_deref());

    let (status, page) = match load_dashboard(state.provider.as_ref(), &city).await {
        Ok(dashboard) => (StatusCode::OK, PageView::loaded(&dashboard)),
        Err(e) => {
            warn!(error = %e, "Dashboard unavailable");
            (StatusCode::NOT_FOUND, PageView::unavailable(&city))
        }
    };

    let html = render_page(&state.templates, &page)?;
    Ok((status, Html(html)))
}

/// `GET /api/weather` returns the same data as JSON.
pub async fn dashboard_json(
    State(state): State<AppState>,
    Query(query): Query<CityQuery>,
) -> Result<Json<Dashboard>, WebError> {
    let city = state.resolve_city(query.city.as_deref());
    let dashboard = load_dashboard(state.provider.as_ref(), &city)
        .await
        .inspect_err(|e| warn!(error = %e, "Dashboard unavailable"))?;
    Ok(Json(dashboard))
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

/// Liveness check
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
