//! JSON document codec.
//!
//! The persisted file contains exactly one serialized [`ChatConfig`],
//! pretty-printed with two-space indentation.  Non-ASCII characters are
//! written literally (UTF-8) rather than as `\uXXXX` escapes, so the file
//! stays readable and diffs cleanly.
//!
//! ```text
//! disk bytes ──parse_document──▶ ChatConfig ──render_document──▶ disk bytes
//! ```
//!
//! Decoding is strict: anything [`ChatConfig`]'s serde schema rejects
//! (missing field, wrong type, unknown theme, extra field) is a
//! [`DocumentError`].

use thiserror::Error;

use crate::domain::chat::ChatConfig;

/// Errors produced while encoding or decoding a document.
#[derive(Debug, Error)]
pub enum DocumentError {
    /// The text is not valid JSON or does not match the schema.
    #[error("invalid chat config document: {0}")]
    Invalid(#[source] serde_json::Error),

    /// The document could not be serialized.
    #[error("failed to encode chat config document: {0}")]
    Encode(#[source] serde_json::Error),
}

/// Decodes a document from its JSON text.
///
/// # Errors
///
/// Returns [`DocumentError::Invalid`] for malformed JSON or any schema
/// violation.
pub fn parse_document(text: &str) -> Result<ChatConfig, DocumentError> {
    serde_json::from_str(text).map_err(DocumentError::Invalid)
}

/// Encodes a document as pretty-printed JSON followed by a newline.
///
/// # Errors
///
/// Returns [`DocumentError::Encode`] if serialization fails.  With the
/// current model this cannot happen, but the signature keeps callers honest.
pub fn render_document(config: &ChatConfig) -> Result<String, DocumentError> {
    let mut text = serde_json::to_string_pretty(config).map_err(DocumentError::Encode)?;
    text.push('\n');
    Ok(text)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
