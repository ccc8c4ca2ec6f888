//! Application layer for chat-config-server.
//!
//! Defines *what* the service needs from storage, without saying *how* it is
//! stored.  The HTTP handlers depend on the [`ConfigRepository`] trait only;
//! the file-backed implementation lives in the infrastructure layer.

pub mod repository;

pub use repository::{ConfigRepository, StorageError};
