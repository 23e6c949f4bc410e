use crate::models::{HealthResponse, VersionedHealthResponse};
use crate::routes;
use axum::{http::StatusCode, Json};

/// GET /health handler for the test server - Liveness check
///
/// The fixture has no dependencies, so reaching the handler means healthy.
#[utoipa::path(
    get,
    path = routes::HEALTH,
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse)
    ),
    tag = "test-server"
)]
pub async fn health_handler() -> (StatusCode, Json<HealthResponse>) {
    tracing::debug!("Health check passed");
    (StatusCode::OK, Json(HealthResponse::fixture()))
}

/// GET /health handler for the flask fixture - Liveness check that also reports a version
#[utoipa::path(
    get,
    path = routes::HEALTH,
    responses(
        (status = 200, description = "Service is healthy", body = VersionedHealthResponse)
    ),
    tag = "scanorama-test-flask"
)]
pub async fn versioned_health_handler() -> (StatusCode, Json<VersionedHealthResponse>) {
    tracing::debug!("Health check passed");
    (StatusCode::OK, Json(VersionedHealthResponse::fixture()))
}
