use crate::models::{ServerInfoResponse, ServiceResponse};
use crate::routes;
use axum::{http::StatusCode, Json};

/// GET / handler for the test server - Identifies the server by name and version
#[utoipa::path(
    get,
    path = routes::ROOT,
    responses(
        (status = 200, description = "Server identification", body = ServerInfoResponse)
    ),
    tag = "test-server"
)]
pub async fn index_handler() -> (StatusCode, Json<ServerInfoResponse>) {
    tracing::debug!("Serving test server index");
    (StatusCode::OK, Json(ServerInfoResponse::fixture()))
}

/// GET / handler for the flask fixture
#[utoipa::path(
    get,
    path = routes::ROOT,
    responses(
        (status = 200, description = "Service identification", body = ServiceResponse)
    ),
    tag = "scanorama-test-flask"
)]
pub async fn service_handler() -> (StatusCode, Json<ServiceResponse>) {
    tracing::debug!("Serving flask fixture index");
    (StatusCode::OK, Json(ServiceResponse::fixture()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{body::Body, http::Request, routing::get, Router};
    use tower::ServiceExt;

    async fn get_body(app: Router, uri: &str) -> (StatusCode, axum::body::Bytes) {
        let response = app
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri(uri)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, body)
    }

    #[tokio::test]
    async fn test_index_endpoint() {
        let app = Router::new().route(routes::ROOT, get(index_handler));

        let (status, body) = get_body(app, "/").await;

        assert_eq!(status, StatusCode::OK);
        let response_json: ServerInfoResponse = serde_json::from_slice(&body).unwrap();
        assert_eq!(response_json.name, "Test Server");
        assert_eq!(response_json.version, "1.0");
        assert_eq!(response_json.status, "running");
    }

    #[tokio::test]
    async fn test_index_endpoint_ignores_query_string() {
        let app = Router::new().route(routes::ROOT, get(index_handler));

        let (status, body) = get_body(app, "/?probe=1").await;

        assert_eq!(status, StatusCode::OK);
        let response_json: ServerInfoResponse = serde_json::from_slice(&body).unwrap();
        assert_eq!(response_json, ServerInfoResponse::fixture());
    }

    #[tokio::test]
    async fn test_service_endpoint() {
        let app = Router::new().route(routes::ROOT, get(service_handler));

        let (status, body) = get_body(app, "/").await;

        assert_eq!(status, StatusCode::OK);
        let response_json: ServiceResponse = serde_json::from_slice(&body).unwrap();
        assert_eq!(response_json.status, "ok");
        assert_eq!(response_json.service, "scanorama-test-flask");
    }
}
