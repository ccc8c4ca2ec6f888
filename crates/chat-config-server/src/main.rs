//! Chat config API entry point.
//!
//! Serves one JSON document (the chat list a browser front-end renders) over
//! HTTP and keeps it in a single file on disk.
//!
//! # Usage
//!
//! ```text
//! chat-config-server [OPTIONS]
//!
//! Options:
//!   --host <HOST>                 Bind address [default: 0.0.0.0]
//!   --port <PORT>                 Listener port [default: 8000]
//!   --data-file <PATH>            Document file [default: ./data/chat_config.json]
//!   --cors-origin <ORIGIN,...>    Allowed origins, `*` for any [default: *]
//!   --cors-allow-credentials <B>  Allow credentialed requests [default: true]
//! ```
//!
//! # Environment variable overrides
//!
//! CLI args take precedence when both are present.
//!
//! | Variable                       | Default                   |
//! |--------------------------------|---------------------------|
//! | `CHAT_CONFIG_HOST`             | `0.0.0.0`                 |
//! | `CHAT_CONFIG_PORT`             | `8000`                    |
//! | `CHAT_CONFIG_DATA_FILE`        | `./data/chat_config.json` |
//! | `CHAT_CONFIG_CORS_ORIGINS`     | `*`                       |
//! | `CHAT_CONFIG_CORS_CREDENTIALS` | `true`                    |
//!
//! Log verbosity follows `RUST_LOG` (default `info`).

use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::Context;
use clap::{ArgAction, Parser};
use tracing::info;
use tracing_subscriber::EnvFilter;

use chat_config_server::domain::config::DEFAULT_DATA_FILE;
use chat_config_server::domain::{CorsPolicy, ServerConfig};
use chat_config_server::infrastructure::run_server;

// ── CLI argument definitions ──────────────────────────────────────────────────

/// HTTP API for reading and replacing the chat config document.
#[derive(Debug, Parser)]
#[command(
    name = "chat-config-server",
    about = "HTTP API that stores and serves a single chat config document",
    version
)]
struct Cli {
    /// IP address to bind the HTTP listener to.
    ///
    /// `0.0.0.0` accepts connections on every interface; `127.0.0.1` only
    /// accepts local ones.
    #[arg(long, default_value = "0.0.0.0", env = "CHAT_CONFIG_HOST")]
    host: String,

    /// TCP port for the HTTP listener.
    #[arg(long, default_value_t = 8000, env = "CHAT_CONFIG_PORT")]
    port: u16,

    /// Path of the JSON file holding the document.
    ///
    /// Created, together with missing parent directories, on first use.
    #[arg(long, default_value = DEFAULT_DATA_FILE, env = "CHAT_CONFIG_DATA_FILE")]
    data_file: PathBuf,

    /// Origins allowed to call the API from a browser.
    ///
    /// Repeat the flag or separate with commas.  `*` allows every origin.
    #[arg(
        long = "cors-origin",
        value_delimiter = ',',
        default_value = "*",
        env = "CHAT_CONFIG_CORS_ORIGINS"
    )]
    cors_origins: Vec<String>,

    /// Whether browsers may send cookies and auth headers cross-origin.
    #[arg(
        long,
        action = ArgAction::Set,
        default_value_t = true,
        env = "CHAT_CONFIG_CORS_CREDENTIALS"
    )]
    cors_allow_credentials: bool,
}

impl Cli {
    /// Converts the parsed CLI arguments into a [`ServerConfig`].
    ///
    /// # Errors
    ///
    /// Returns an error if `--host` is not a valid IP address.
    fn into_server_config(self) -> anyhow::Result<ServerConfig> {
        let bind_addr: SocketAddr = format!("{}:{}", self.host, self.port)
            .parse()
            .with_context(|| format!("invalid bind address: '{}:{}'", self.host, self.port))?;

        Ok(ServerConfig {
            bind_addr,
            data_file: self.data_file,
            cors: CorsPolicy::from_origins(self.cors_origins, self.cors_allow_credentials),
        })
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // ── Logging setup ─────────────────────────────────────────────────────────
    //
    // `RUST_LOG` picks the verbosity; without it (or if it does not parse) the
    // service logs at `info`.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // ── Parse CLI arguments ───────────────────────────────────────────────────
    //
    // Flags win over `CHAT_CONFIG_*` variables, which win over the defaults.
    // `Cli::parse()` exits with a usage message on bad input.
    let config = Cli::parse().into_server_config()?;

    info!(
        "chat config API starting: bind={}, document={}",
        config.bind_addr,
        config.data_file.display()
    );

    // ── Serve until Ctrl+C ────────────────────────────────────────────────────
    //
    // In-flight requests, including saves, finish before `run_server` returns.
    run_server(config, shutdown_signal()).await?;

    info!("chat config API stopped");
    Ok(())
}

/// Resolves on Ctrl+C.  If the handler cannot be installed the server keeps
/// running until killed.
async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("received Ctrl+C, shutting down"),
        Err(e) => {
            tracing::error!("failed to listen for Ctrl+C signal: {e}");
            std::future::pending::<()>().await;
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
