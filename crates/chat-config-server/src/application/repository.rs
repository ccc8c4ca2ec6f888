//! The storage contract for the single chat config document.
//!
//! # Contract
//!
//! - [`ConfigRepository::load`] returns the persisted document.  If nothing is
//!   persisted yet it builds the built-in default, persists it, and returns
//!   it; a read may therefore write.  Only a *missing* document triggers this;
//!   an unreadable or malformed one is a [`StorageError`].
//! - [`ConfigRepository::save`] replaces the whole document.  There is no
//!   merge and no partial update.  A concurrent `load` sees either the old or
//!   the new document, never a mix.

use std::path::PathBuf;

use async_trait::async_trait;
use chat_config_core::{ChatConfig, DocumentError};
use thiserror::Error;

/// Errors raised by the storage medium.
///
/// These are always server-side failures.  Callers log the full error and show
/// clients a generic message.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The file could not be read, written, or renamed into place.
    #[error("I/O error accessing chat config at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file exists but does not hold a valid document.
    #[error("chat config at {path} is corrupt: {source}")]
    Corrupt {
        path: PathBuf,
        #[source]
        source: DocumentError,
    },

    /// The document could not be serialized for writing.
    #[error("failed to encode chat config: {0}")]
    Encode(#[source] DocumentError),
}

/// Read/replace access to the one persisted [`ChatConfig`].
///
/// Infrastructure implements this with a JSON file; tests use in-memory
/// doubles that can be told to fail.
#[async_trait]
pub trait ConfigRepository: Send + Sync {
    /// Returns the current document, seeding the built-in default on first use.
    async fn load(&self) -> Result<ChatConfig, StorageError>;

    /// Replaces the current document with `config`.
    async fn save(&self, config: &ChatConfig) -> Result<(), StorageError>;
}

// ── Tests ─────────────────────────────────────────────────────────────────────
