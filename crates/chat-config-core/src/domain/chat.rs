//! Document types: the single [`ChatConfig`] and its [`ChatItem`] entries.
//!
//! # Wire shape
//!
//! ```json
//! {
//!   "title": "AI Chat 集合",
//!   "theme": "light",
//!   "chats": [
//!     {
//!       "id": "1",
//!       "name": "通用助手",
//!       "description": "...",
//!       "url": "https://example.com/chat/general",
//!       "icon": "MessageSquare",
//!       "category": null,
//!       "favorite": true,
//!       "lastVisited": "2023-01-01T00:00:00Z"
//!     }
//!   ],
//!   "categories": ["开发工具"]
//! }
//! ```
//!
//! # Strictness
//!
//! Both structs carry `#[serde(deny_unknown_fields)]`: a payload with an
//! extra key fails to deserialize instead of silently dropping the key.  The
//! [`Theme`] enum only accepts the two literal strings `"light"` and `"dark"`.
//!
//! # Optional fields
//!
//! Optional fields may be missing or `null` on input; both become `None`.
//! On output `None` is written as `null`, so a client that posts
//! `"categories": null` gets exactly that back.

use serde::{Deserialize, Serialize};

/// Colour scheme requested by the front-end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    /// Returns the wire spelling of the theme.
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One entry in the chat list.
///
/// `id` is expected to be unique within a document, but nothing enforces it;
/// the same goes for `category` naming a value present in
/// [`ChatConfig::categories`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ChatItem {
    pub id: String,
    pub name: String,
    pub description: String,
    pub url: String,
    /// Icon name understood by the front-end (e.g. `"MessageSquare"`).
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub favorite: Option<bool>,
    /// ISO-8601 timestamp text.  Stored and returned verbatim, never parsed.
    #[serde(default)]
    pub last_visited: Option<String>,
}

impl ChatItem {
    /// Creates an item with only the required fields set.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
        url: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: description.into(),
            url: url.into(),
            icon: None,
            category: None,
            favorite: None,
            last_visited: None,
        }
    }
}

/// The whole persisted document.  Exactly one exists per store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ChatConfig {
    pub title: String,
    pub theme: Theme,
    /// Ordered as given by the client or file.  Never sorted.
    pub chats: Vec<ChatItem>,
    #[serde(default)]
    pub categories: Option<Vec<String>>,
}

// ── Tests ─────────────────────────────────────────────────────────────────────
