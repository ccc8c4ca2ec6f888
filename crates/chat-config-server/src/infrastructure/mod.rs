//! Infrastructure layer for chat-config-server.
//!
//! Handles all I/O: the JSON file on disk and the HTTP listener.
//!
//! # Responsibilities
//!
//! - Reading, seeding and atomically replacing the document file
//! - Routing `GET`/`POST /api/config` to the store
//! - Applying the configured cross-origin policy
//! - Binding the listener and shutting down on Ctrl+C
//!
//! # What does NOT belong here?
//!
//! - Document schema rules (that is `chat-config-core`)
//! - Configuration parsing (that is done in `main.rs`)

pub mod http;
pub mod server;
pub mod storage;

// Re-export the primary entry points so `main.rs` can call them concisely.
pub use http::build_router;
pub use server::run_server;
pub use storage::FileConfigStore;
