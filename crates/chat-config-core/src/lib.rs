//! # chat-config-core
//!
//! Shared library for the chat config service containing the document model,
//! the built-in default document, and the JSON codec used to persist it.
//!
//! It has zero dependencies on async runtimes, HTTP frameworks, or the file
//! system, so every rule about what a valid document looks like can be tested
//! in isolation.
//!
//! # Architecture overview
//!
//! The service stores exactly one document, a [`ChatConfig`], which lists the
//! chat entries a browser front-end renders as cards.  This crate defines:
//!
//! - **`domain`** – The document types ([`ChatConfig`], [`ChatItem`],
//!   [`Theme`]) and the built-in default document that seeds an empty store.
//!
//! - **`document`** – How a document travels to and from disk: strict
//!   decoding (unknown fields and unknown themes are rejected) and
//!   pretty-printed encoding that keeps non-ASCII text readable.

pub mod document;
pub mod domain;

// Re-export the most-used types at the crate root so callers can write
// `chat_config_core::ChatConfig` instead of the full module path.
pub use document::{parse_document, render_document, DocumentError};
pub use domain::chat::{ChatConfig, ChatItem, Theme};
pub use domain::defaults::default_config;
