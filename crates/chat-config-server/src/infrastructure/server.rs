//! HTTP listener and graceful shutdown.
//!
//! [`run_server`] wires the pieces together:
//!
//! 1. Construct the process's one [`FileConfigStore`] for `config.data_file`.
//! 2. Build the router with the configured CORS policy.
//! 3. Bind `config.bind_addr`.
//! 4. Serve until the `shutdown` future completes, letting in-flight requests
//!    finish.
//!
//! Each request runs on the tokio multi-threaded runtime; the store's lock is
//! the only synchronisation the handlers need.

use std::future::Future;
use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;
use tracing::{info, warn};

use super::http::build_router;
use super::storage::FileConfigStore;
use crate::application::ConfigRepository;
use crate::domain::config::ServerConfig;

/// Runs the HTTP service until `shutdown` resolves.
///
/// # Errors
///
/// Returns an error if the CORS policy is invalid, the listener cannot be
/// bound (port in use, missing permission), or the server fails while
/// accepting connections.
pub async fn run_server<F>(config: ServerConfig, shutdown: F) -> anyhow::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    // ── Store and router ──────────────────────────────────────────────────────
    //
    // One store per process: its lock is what serialises writers, so every
    // handler must share this instance.
    let store: Arc<dyn ConfigRepository> = Arc::new(FileConfigStore::new(&config.data_file));
    let app = build_router(store, &config.cors).context("invalid CORS configuration")?;

    // Browsers will send cookies to this API from any site.
    if config.cors.is_wide_open() && config.cors.allow_credentials {
        warn!("CORS allows every origin with credentials; narrow it with --cors-origin for production");
    }

    // ── Bind ──────────────────────────────────────────────────────────────────
    let listener = TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("failed to bind HTTP listener on {}", config.bind_addr))?;

    info!(
        "chat config API listening on {} (document: {})",
        config.bind_addr,
        config.data_file.display()
    );

    // ── Serve ─────────────────────────────────────────────────────────────────
    //
    // `with_graceful_shutdown` stops accepting once `shutdown` resolves and
    // waits for open connections to drain.
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await
        .context("HTTP server error")?;

    Ok(())
}

// ── Tests ─────────────────────────────────────────────────────────────────────
