//! Domain layer for chat-config-server.
//!
//! Plain configuration values with no dependencies on I/O, networking, or
//! external frameworks.  `main.rs` fills them in from CLI arguments and
//! environment variables; the infrastructure layer consumes them.

pub mod config;

pub use config::{AllowedOrigins, CorsPolicy, ServerConfig};
