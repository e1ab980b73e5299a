//! Web presentation of the weather dashboard.
//!
//! Serves the HTML dashboard at `/`, the underlying data at `/api/weather`
//! and a liveness probe at `/health`.

pub mod chart;
pub mod error;
pub mod handlers;
pub mod routes;
pub mod state;
pub mod templates;
pub mod view;

pub use error::WebError;
pub use routes::create_router;
pub use state::AppState;

use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::info;

/// Bind `addr` and serve the dashboard until the process is stopped.
pub async fn serve(state: AppState, addr: &str) -> std::io::Result<()> {
    let app = create_router(state).layer(TraceLayer::new_for_http());

    let listener = TcpListener::bind(addr).await?;
    info!(addr = %listener.local_addr()?, "Weather dashboard listening");

    axum::serve(listener, app).await
}
