//! chat-config-server library crate.
//!
//! This crate serves a single [`ChatConfig`](chat_config_core::ChatConfig)
//! document over HTTP and persists it to one JSON file on disk.
//!
//! # Architecture (clean architecture)
//!
//! ```text
//! Browser (JSON over HTTP)
//!         ↕
//! [chat-config-server]
//!   ├── domain/           Pure types: ServerConfig, CorsPolicy
//!   ├── application/      The ConfigRepository contract and StorageError
//!   └── infrastructure/
//!         ├── storage/    FileConfigStore (JSON file, atomic replace)
//!         ├── http/       axum routes, CORS layer, error responses
//!         └── server      Listener + graceful shutdown
//! ```
//!
//! # Layer rules
//!
//! - `domain` has no I/O and no framework types.
//! - `application` depends on `domain` and `chat-config-core` only.
//! - `infrastructure` depends on all other layers plus `tokio`, `axum` and
//!   `tower-http`.

/// Domain layer: server settings and the cross-origin policy.
pub mod domain;

/// Application layer: the storage contract the HTTP handlers depend on.
pub mod application;

/// Infrastructure layer: file storage, HTTP routes and the server runner.
pub mod infrastructure;
