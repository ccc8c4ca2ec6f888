//! Integration tests for the chat-config-core document codec.
//!
//! These tests go through the public API only and pin down the exact wire
//! shape of the persisted document, including how the built-in default looks
//! once rendered.

use chat_config_core::{
    default_config, parse_document, render_document, ChatConfig, ChatItem, DocumentError, Theme,
};
use serde_json::{json, Value};

/// Renders a document and reads it back as an untyped JSON value.
fn rendered_value(cfg: &ChatConfig) -> Value {
    let text = render_document(cfg).expect("render must succeed");
    serde_json::from_str(&text).expect("rendered text must be valid JSON")
}

#[test]
fn test_default_document_wire_shape() {
    // Arrange
    let cfg = default_config();

    // Act
    let value = rendered_value(&cfg);

    // Assert: spot-check the first chat, which exercises null emission
    assert_eq!(value["title"], json!("AI Chat 集合"));
    assert_eq!(value["theme"], json!("light"));
    assert_eq!(
        value["chats"][0],
        json!({
            "id": "1",
            "name": "通用助手",
            "description": "回答各类常见问题，提供全方位的知识支持。",
            "url": "https://example.com/chat/general",
            "icon": "MessageSquare",
            "category": null,
            "favorite": true,
            "lastVisited": "2023-01-01T00:00:00Z"
        })
    );
    assert_eq!(value["chats"].as_array().map(Vec::len), Some(6));
    assert_eq!(value["categories"].as_array().map(Vec::len), Some(5));
}

#[test]
fn test_minimal_document_scenario() {
    // Arrange: the smallest legal document, with categories explicitly null
    let text = r#"{"title":"T","theme":"dark","chats":[],"categories":null}"#;

    // Act
    let cfg = parse_document(text).expect("parse");
    let echoed = rendered_value(&cfg);

    // Assert
    assert_eq!(cfg.theme, Theme::Dark);
    assert_eq!(
        echoed,
        json!({ "title": "T", "theme": "dark", "chats": [], "categories": null })
    );
}

#[test]
fn test_optional_fields_round_trip_as_null() {
    // Arrange
    let cfg = ChatConfig {
        title: "bare".to_string(),
        theme: Theme::Light,
        chats: vec![ChatItem::new("a", "A", "desc", "https://example.com/a")],
        categories: None,
    };

    // Act
    let restored = parse_document(&render_document(&cfg).unwrap()).unwrap();

    // Assert
    assert_eq!(restored, cfg);
    assert_eq!(restored.chats[0].icon, None);
    assert_eq!(restored.chats[0].favorite, None);
}

#[test]
fn test_last_visited_is_not_interpreted() {
    // Not a timestamp at all; it must survive untouched.
    let text = r#"{"title":"T","theme":"light","chats":[
        {"id":"1","name":"n","description":"d","url":"u","lastVisited":"yesterday-ish"}
    ]}"#;
    let cfg = parse_document(text).unwrap();
    assert_eq!(cfg.chats[0].last_visited.as_deref(), Some("yesterday-ish"));
}

#[test]
fn test_duplicate_ids_and_dangling_categories_are_accepted() {
    // Neither id uniqueness nor category references are enforced.
    let text = r#"{"title":"T","theme":"light","categories":["x"],"chats":[
        {"id":"1","name":"a","description":"d","url":"u","category":"missing"},
        {"id":"1","name":"b","description":"d","url":"u"}
    ]}"#;
    let cfg = parse_document(text).unwrap();
    assert_eq!(cfg.chats.len(), 2);
}

#[test]
fn test_repeated_key_is_rejected_not_last_wins() {
    // Document level and item level alike.
    let cases = [
        r#"{"title":"a","title":"b","theme":"light","chats":[]}"#,
        r#"{"title":"T","theme":"light","chats":[
            {"id":"1","id":"2","name":"n","description":"d","url":"u"}
        ]}"#,
    ];

    for text in cases {
        let err = parse_document(text).unwrap_err();
        assert!(err.to_string().contains("duplicate field"), "{err}");
    }
}

#[test]
fn test_schema_violations_are_invalid_documents() {
    let cases = [
        r#"{"title":"T","theme":"blue","chats":[]}"#,
        r#"{"title":"T","theme":"light","chats":[],"extra":true}"#,
        r#"{"theme":"light","chats":[]}"#,
        r#"{"title":5,"theme":"light","chats":[]}"#,
        r#"{"title":"T","theme":"light","chats":{}}"#,
        r#"{"title":"T","theme":"light","chats":[],"categories":[1]}"#,
    ];

    for text in cases {
        assert!(
            matches!(parse_document(text), Err(DocumentError::Invalid(_))),
            "expected rejection for {text}"
        );
    }
}
