use crate::models::VersionResponse;
use crate::routes;
use axum::{http::StatusCode, Json};

/// GET /version handler - Build and API version of the test server
#[utoipa::path(
    get,
    path = routes::VERSION,
    responses(
        (status = 200, description = "Version information", body = VersionResponse)
    ),
    tag = "test-server"
)]
pub async fn version_handler() -> (StatusCode, Json<VersionResponse>) {
    tracing::debug!("Serving version information");
    (StatusCode::OK, Json(VersionResponse::fixture()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{body::Body, http::Request, routing::get, Router};
    use tower::ServiceExt;

    #[tokio::test]
    async fn test_version_endpoint() {
        let app = Router::new().route(routes::VERSION, get(version_handler));

        let response = app
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri("/version")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let response_json: VersionResponse = serde_json::from_slice(&body).unwrap();
        assert_eq!(response_json.version, "1.0.0");
        assert_eq!(response_json.api_version, "v1");
        assert_eq!(response_json.build, "test");
    }

    #[tokio::test]
    async fn test_version_endpoint_rejects_post() {
        let app = Router::new().route(routes::VERSION, get(version_handler));

        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/version")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    }
}
