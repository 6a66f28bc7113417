//! HTTP server initialization and runtime setup.
//!
//! Builds the in-memory store and shared state, then runs the Axum server
//! until Ctrl+C.

use crate::config::Config;
use crate::routes::{RouterOptions, app_router};
use crate::state::AppState;

use anyhow::Result;
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - Bounded in-memory ingest history
/// - Shared-secret gate for the push endpoint
/// - Axum HTTP server with graceful shutdown
///
/// # Errors
///
/// Returns an error if:
/// - The listen address does not parse
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let state = AppState::in_memory(config.max_ingests, config.ingest_secret.clone())
        .with_behind_proxy(config.behind_proxy);
    tracing::info!(
        capacity = config.max_ingests,
        gate = state.access_gate.is_enabled(),
        "Ingest store ready"
    );

    let options = RouterOptions {
        rate_limit: config.rate_limit_enabled,
        max_body_bytes: config.max_upload_bytes,
    };
    let app = app_router(state, &options);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(
        listener,
        ServiceExt::<Request>::into_make_service_with_connect_info::<SocketAddr>(app),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {e}");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
