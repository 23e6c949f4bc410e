use std::env;
use anyhow::{Context, Result};

use crate::component::Component;

#[derive(Debug, Clone)]
pub struct Config {
    pub service_port: u16,
    pub service_host: String,
    pub serve_docs: bool,
}

impl Config {
    /// Defaults for a component: all interfaces, the component's fixed port, no docs.
    pub fn for_component(component: Component) -> Self {
        Config {
            service_port: component.default_port(),
            service_host: "0.0.0.0".to_string(),
            serve_docs: false,
        }
    }

    pub fn from_env(component: Component) -> Result<Self> {
        let defaults = Self::for_component(component);

        let service_port = match env::var("SERVICE_PORT") {
            Ok(port) => port
                .parse::<u16>()
                .context("SERVICE_PORT must be a valid port number (0-65535)")?,
            Err(_) => defaults.service_port,
        };

        let service_host = env::var("SERVICE_HOST").unwrap_or(defaults.service_host);

        let serve_docs = match env::var("SERVE_DOCS") {
            Ok(flag) => flag
                .parse::<bool>()
                .context("SERVE_DOCS must be either 'true' or 'false'")?,
            Err(_) => defaults.serve_docs,
        };

        Ok(Config {
            service_port,
            service_host,
            serve_docs,
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.service_host, self.service_port)
    }

    pub fn log_startup(&self, component: Component) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Component: {}", component.name());
        tracing::info!("  API docs: {}", if self.serve_docs { "enabled" } else { "disabled" });
        tracing::info!("  Service listening on: {}:{}", self.service_host, self.service_port);
    }
}
