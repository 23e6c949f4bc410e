use crate::error::ApiError;
use axum::http::Uri;

/// Router fallback - any path without a route is a 404
pub async fn not_found_handler(uri: Uri) -> ApiError {
    tracing::debug!("No route for path: {}", uri.path());
    ApiError::NotFound(uri.path().to_string())
}
