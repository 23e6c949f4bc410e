use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api_doc::{FlaskApiDoc, TestServerApiDoc};
use crate::config::Config;
use crate::handlers::{
    health_handler, index_handler, not_found_handler, service_handler, version_handler,
    versioned_health_handler,
};
use crate::routes;

/// The two fixtures this crate can run. Each process serves exactly one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Component {
    /// "Test Server" on port 8888 with /, /health and /version
    TestServer,
    /// "scanorama-test-flask" on port 5000 with / and /health
    ScanoramaFlask,
}

impl Component {
    pub fn name(self) -> &'static str {
        match self {
            Component::TestServer => "test-server",
            Component::ScanoramaFlask => "scanorama-test-flask",
        }
    }

    pub fn default_port(self) -> u16 {
        match self {
            Component::TestServer => 8888,
            Component::ScanoramaFlask => 5000,
        }
    }

    /// Build the router with this component's routes, plus docs if enabled.
    pub fn router(self, config: &Config) -> Router {
        let router = match self {
            Component::TestServer => Router::new()
                .route(routes::ROOT, get(index_handler))
                .route(routes::HEALTH, get(health_handler))
                .route(routes::VERSION, get(version_handler)),
            Component::ScanoramaFlask => Router::new()
                .route(routes::ROOT, get(service_handler))
                .route(routes::HEALTH, get(versioned_health_handler)),
        };

        let router = if config.serve_docs {
            let openapi = match self {
                Component::TestServer => TestServerApiDoc::openapi(),
                Component::ScanoramaFlask => FlaskApiDoc::openapi(),
            };
            router.merge(SwaggerUi::new(routes::SWAGGER_UI).url(routes::OPENAPI_JSON, openapi))
        } else {
            router
        };

        router
            .fallback(not_found_handler)
            .layer(TraceLayer::new_for_http())
    }
}
