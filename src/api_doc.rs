use utoipa::OpenApi;

use crate::error::ErrorResponse;
use crate::handlers;
use crate::models::{
    HealthResponse, ServerInfoResponse, ServiceResponse, VersionResponse,
    VersionedHealthResponse,
};

/// OpenAPI documentation for the test server
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Test Server",
        version = "1.0",
        description = "Static JSON endpoints for port scanning tests"
    ),
    paths(
        handlers::index::index_handler,
        handlers::health::health_handler,
        handlers::version::version_handler
    ),
    components(
        schemas(
            ServerInfoResponse,
            HealthResponse,
            VersionResponse,
            ErrorResponse
        )
    ),
    tags(
        (name = "test-server", description = "Test server fixture endpoints")
    )
)]
pub struct TestServerApiDoc;

/// OpenAPI documentation for the flask fixture
#[derive(OpenApi)]
#[openapi(
    info(
        title = "scanorama-test-flask",
        version = "1.0.0",
        description = "Static JSON endpoints for service discovery tests"
    ),
    paths(
        handlers::index::service_handler,
        handlers::health::versioned_health_handler
    ),
    components(
        schemas(
            ServiceResponse,
            VersionedHealthResponse,
            ErrorResponse
        )
    ),
    tags(
        (name = "scanorama-test-flask", description = "Flask fixture endpoints")
    )
)]
pub struct FlaskApiDoc;
