//! Static JSON HTTP fixtures for port scanning and service discovery tests.
//!
//! Two components live here, each served by its own binary:
//! `test-server` (port 8888) and `scanorama-test-flask` (port 5000).

pub mod api_doc;
pub mod component;
pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod server;

pub use component::Component;
pub use config::Config;

/// Load `.env` if present and install the tracing subscriber.
pub fn init() {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,tower_http=info".into()),
        )
        .init();
}
