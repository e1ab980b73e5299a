//! HTTP error mapping.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;
use weather_core::WeatherError;

use crate::view::NOT_FOUND_MESSAGE;

#[derive(Debug, Error)]
pub enum WebError {
    /// Weather lookup failed for any reason.
    #[error(transparent)]
    Unavailable(#[from] WeatherError),

    /// Template could not be compiled or rendered.
    #[error("template error: {0}")]
    Render(#[from] tera::Error),
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            Self::Unavailable(_) => (StatusCode::NOT_FOUND, NOT_FOUND_MESSAGE.to_string()),
            Self::Render(e) => {
                tracing::error!(error = %e, "Failed to render dashboard");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Failed to render dashboard".to_string(),
                )
            }
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}
