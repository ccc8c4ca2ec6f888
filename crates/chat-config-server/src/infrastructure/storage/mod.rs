//! Storage infrastructure: document file persistence.
//!
//! The `file_store` sub-module implements
//! [`ConfigRepository`](crate::application::ConfigRepository) on top of a
//! single JSON file:
//!
//! - Reading the document, or seeding the built-in default when the file does
//!   not exist yet (first run, or after someone deleted it).
//! - Replacing the document atomically via a temporary file and a rename.

pub mod file_store;

pub use file_store::FileConfigStore;
