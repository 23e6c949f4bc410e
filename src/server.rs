use anyhow::{Context, Result};
use axum::Router;
use tokio::net::TcpListener;

use crate::component::Component;
use crate::config::Config;

/// Bind the listening socket. A port that is already taken is fatal.
pub async fn bind(config: &Config) -> Result<TcpListener> {
    let addr = config.bind_addr();
    TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))
}

/// Serve until Ctrl-C or SIGTERM.
pub async fn serve(listener: TcpListener, router: Router) -> Result<()> {
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")
}

/// Load config, bind, and serve one component for the life of the process.
pub async fn run(component: Component) -> Result<()> {
    tracing::info!("{} starting", component.name());

    let config = Config::from_env(component)?;
    config.log_startup(component);

    let listener = bind(&config).await?;
    tracing::info!("Listening on {}", listener.local_addr()?);

    serve(listener, component.router(&config)).await?;

    tracing::info!("{} stopped", component.name());
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl-C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
