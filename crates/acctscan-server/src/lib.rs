//! HTTP JSON endpoints over a [`ScanService`].
//!
//! Every request runs its own scan against the store; no results are cached between requests.

#![forbid(unsafe_code)]

mod error;
mod handlers;

use acctscan_app::ScanService;
use anyhow::Context;
use axum::Router;
use axum::routing::{get, post};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::signal;
use tower_http::cors::CorsLayer;

pub use error::ApiError;

pub fn router(service: Arc<ScanService>) -> Router {
    Router::new()
        .route("/api/accounts", get(handlers::list_accounts))
        .route("/api/accounts/:id", get(handlers::get_account))
        .route("/api/scan/trigger", post(handlers::trigger_scan))
        .route("/api/scan/summary", get(handlers::scan_summary))
        .route("/health", get(handlers::health))
        .layer(CorsLayer::permissive())
        .with_state(service)
}

/// Serve until Ctrl+C or SIGTERM.
pub async fn serve(addr: SocketAddr, service: Arc<ScanService>) -> anyhow::Result<()> {
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("bind {addr}"))?;
    let local = listener.local_addr().context("read bound address")?;
    tracing::info!(addr = %local, "server listening");

    axum::serve(listener, router(service))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("serve http")?;

    tracing::info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => tracing::info!("received Ctrl+C, shutting down"),
        _ = terminate => tracing::info!("received SIGTERM, shutting down"),
    }
}
