//! Server configuration types.
//!
//! [`ServerConfig`] is the single source of truth for all runtime settings.
//! It is built once at startup from CLI arguments (see `main.rs`) or from
//! [`ServerConfig::default`] in tests, and then handed to
//! [`run_server`](crate::infrastructure::run_server).  Nothing in the crate
//! reads the environment or keeps the storage path in a global.

use std::net::SocketAddr;
use std::path::PathBuf;

/// Default location of the persisted document, relative to the working
/// directory.
pub const DEFAULT_DATA_FILE: &str = "./data/chat_config.json";

/// Which browser origins may call the API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AllowedOrigins {
    /// Every origin.  With credentials enabled the request's own origin is
    /// echoed back, because browsers refuse a literal `*` in that case.
    Any,
    /// Only these exact origins (e.g. `https://admin.example.com`).
    List(Vec<String>),
}

/// Cross-origin policy applied to every route.
///
/// The default is wide open: any origin, any method, any header, credentials
/// allowed.  Browser front-ends served from another port rely on this, but a
/// production deployment should narrow it with `--cors-origin`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorsPolicy {
    pub origins: AllowedOrigins,
    pub allow_credentials: bool,
}

impl CorsPolicy {
    /// Builds a policy from raw origin strings.
    ///
    /// A `*` anywhere in the list, or an empty list, means [`AllowedOrigins::Any`].
    /// Surrounding whitespace is trimmed and blank entries are ignored.
    pub fn from_origins<I, S>(origins: I, allow_credentials: bool) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let list: Vec<String> = origins
            .into_iter()
            .map(|o| o.as_ref().trim().to_string())
            .filter(|o| !o.is_empty())
            .collect();

        let origins = if list.is_empty() || list.iter().any(|o| o == "*") {
            AllowedOrigins::Any
        } else {
            AllowedOrigins::List(list)
        };

        Self {
            origins,
            allow_credentials,
        }
    }

    /// `true` when every origin is accepted.
    pub fn is_wide_open(&self) -> bool {
        self.origins == AllowedOrigins::Any
    }
}

impl Default for CorsPolicy {
    fn default() -> Self {
        Self {
            origins: AllowedOrigins::Any,
            allow_credentials: true,
        }
    }
}

/// All runtime configuration for the service.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address and port the HTTP listener binds to.
    ///
    /// `0.0.0.0` accepts connections on every interface.
    pub bind_addr: SocketAddr,

    /// Path of the JSON file holding the document.  Parent directories are
    /// created on first write.
    pub data_file: PathBuf,

    pub cors: CorsPolicy,
}

impl Default for ServerConfig {
    /// | Field       | Default                    |
    /// |-------------|----------------------------|
    /// | bind_addr   | `0.0.0.0:8000`             |
    /// | data_file   | `./data/chat_config.json`  |
    /// | cors        | any origin, credentials on |
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 8000)),
            data_file: PathBuf::from(DEFAULT_DATA_FILE),
            cors: CorsPolicy::default(),
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
