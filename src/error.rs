use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

/// Error response type
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

/// Custom error type for fixture endpoints
///
/// Startup failures (bind, config) go through `anyhow` instead; this type
/// only covers what a client can observe on the wire.
#[derive(Debug)]
pub enum ApiError {
    /// No route matches the request path
    NotFound(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            ApiError::NotFound(path) => (StatusCode::NOT_FOUND, format!("Not found: {}", path)),
        };

        let body = Json(ErrorResponse {
            error: error_message,
        });

        (status, body).into_response()
    }
}
