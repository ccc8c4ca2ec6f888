//! Domain layer: the document model and its built-in default.
//!
//! Nothing in here performs I/O.  Persistence lives in the service crate and
//! encoding lives in [`crate::document`].

pub mod chat;
pub mod defaults;

pub use chat::{ChatConfig, ChatItem, Theme};
pub use defaults::default_config;
