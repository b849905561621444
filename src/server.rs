//! HTTP server initialization and runtime setup.
//!
//! Handles storage setup, router construction and the Axum server lifecycle.

use crate::application::services::UrlService;
use crate::config::{Config, StorageBackend};
use crate::infrastructure::persistence::{
    MemoryUrlRepository, PgUrlRepository, connect_pool, run_migrations,
};
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use std::future::IntoFuture;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::signal;
use tokio::sync::oneshot;

/// Upper bound on waiting for in-flight requests once shutdown begins.
pub const SHUTDOWN_TIMEOUT: Duration = Duration::from_secs(5);

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - Storage backend (PostgreSQL pool + migrations, or in-memory)
/// - URL service and router
/// - Axum HTTP server with graceful shutdown on SIGINT/SIGTERM, bounded by
///   [`SHUTDOWN_TIMEOUT`]
///
/// # Errors
///
/// Returns an error if:
/// - Storage initialization fails (startup is aborted)
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let url_service = build_url_service(&config)
        .await
        .context("failed to initialize storage")?;

    let state = AppState::new(Arc::new(url_service));
    let app = app_router(state, Duration::from_secs(config.request_timeout_secs));

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    tracing::info!(env = %config.env, "Listening on http://{addr}");

    let (draining_tx, draining_rx) = oneshot::channel::<()>();
    let server = axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(async move {
            shutdown_signal().await;
            let _ = draining_tx.send(());
        });

    tokio::select! {
        result = server.into_future() => result?,
        _ = drain_deadline(draining_rx) => {
            tracing::warn!(
                "Connections still open after {:?}, stopping anyway",
                SHUTDOWN_TIMEOUT
            );
        }
    }

    tracing::info!("Server stopped");
    Ok(())
}

/// Completes [`SHUTDOWN_TIMEOUT`] after draining starts; never if it doesn't.
async fn drain_deadline(draining: oneshot::Receiver<()>) {
    match draining.await {
        Ok(()) => tokio::time::sleep(SHUTDOWN_TIMEOUT).await,
        Err(_) => std::future::pending().await,
    }
}

async fn build_url_service(config: &Config) -> Result<UrlService> {
    let service = match config.storage_backend {
        StorageBackend::Postgres => {
            let pool = connect_pool(config).await?;
            tracing::info!("Connected to database");

            run_migrations(&pool).await?;
            tracing::info!("Migrations applied");

            UrlService::new(Arc::new(PgUrlRepository::new(Arc::new(pool))))
        }
        StorageBackend::Memory => {
            tracing::warn!("Using in-memory storage; mappings are lost on restart");
            UrlService::new(Arc::new(MemoryUrlRepository::new()))
        }
    };

    Ok(service
        .with_alias_length(config.alias_length)
        .with_max_alias_attempts(config.alias_max_attempts))
}

/// Resolves when the process receives Ctrl+C or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
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

    tracing::info!("Shutdown signal received, stopping server");
}
