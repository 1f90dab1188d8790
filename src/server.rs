//! HTTP server initialization and runtime setup.
//!
//! Builds the store, generator and allocation service, then runs axum until a
//! shutdown signal arrives.

use crate::api::routes::RESERVED_PATHS;
use crate::application::services::AllocationService;
use crate::config::Config;
use crate::infrastructure::persistence::InMemoryShortLinkStore;
use crate::routes::app_router;
use crate::state::AppState;
use crate::utils::id_generator::Sha256IdGenerator;

use anyhow::{Context, Result};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::signal;

/// Runs the HTTP server with the given configuration.
///
/// # Errors
///
/// Returns an error if:
/// - The listen address cannot be parsed
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let store = Arc::new(InMemoryShortLinkStore::new());
    let generator = Arc::new(Sha256IdGenerator::new(config.short_id_length));
    let allocation_service = Arc::new(
        AllocationService::new(store, generator)
            .with_max_retries(config.max_retries)
            .with_reserved_ids(RESERVED_PATHS.iter().copied()),
    );

    let state = AppState::new(allocation_service, config.base_url.clone());
    let app = app_router(state);

    let addr: SocketAddr = config
        .listen_addr
        .parse()
        .with_context(|| format!("Invalid listen address '{}'", config.listen_addr))?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => tracing::info!("Received Ctrl+C signal"),
        () = terminate => tracing::info!("Received SIGTERM signal"),
    }

    tracing::info!("Shutdown signal received, terminating gracefully...");
}
