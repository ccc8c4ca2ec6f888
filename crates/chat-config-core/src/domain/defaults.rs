//! The built-in default document.
//!
//! A store with nothing persisted yet seeds itself with this document on the
//! first read.  The text is Chinese because the front-end this service was
//! written for ships in Chinese; it is stored and served verbatim.

use super::chat::{ChatConfig, ChatItem, Theme};

const SEED_TIMESTAMP: &str = "2023-01-01T00:00:00Z";

/// Returns a fresh copy of the built-in default [`ChatConfig`].
///
/// Six chats, five categories, light theme.  Chat `"1"` has no category.
pub fn default_config() -> ChatConfig {
    ChatConfig {
        title: "AI Chat 集合".to_string(),
        theme: Theme::Light,
        chats: vec![
            ChatItem {
                icon: Some("MessageSquare".to_string()),
                favorite: Some(true),
                last_visited: Some(SEED_TIMESTAMP.to_string()),
                ..ChatItem::new(
                    "1",
                    "通用助手",
                    "回答各类常见问题，提供全方位的知识支持。",
                    "https://example.com/chat/general",
                )
            },
            ChatItem {
                icon: Some("Code".to_string()),
                category: Some("开发工具".to_string()),
                last_visited: Some(SEED_TIMESTAMP.to_string()),
                ..ChatItem::new(
                    "2",
                    "代码助手",
                    "解答编程问题，帮助调试代码和学习编程概念。",
                    "https://example.com/chat/code",
                )
            },
            ChatItem {
                icon: Some("Sparkles".to_string()),
                category: Some("内容创作".to_string()),
                favorite: Some(true),
                ..ChatItem::new(
                    "3",
                    "创意写作",
                    "提供创意写作建议，帮助撰写文章、故事和内容。",
                    "https://example.com/chat/creative",
                )
            },
            ChatItem {
                icon: Some("LayoutGrid".to_string()),
                category: Some("数据工具".to_string()),
                last_visited: Some(SEED_TIMESTAMP.to_string()),
                ..ChatItem::new(
                    "4",
                    "数据分析",
                    "帮助分析和理解数据，提供数据可视化建议。",
                    "https://example.com/chat/data",
                )
            },
            ChatItem {
                icon: Some("BookOpen".to_string()),
                category: Some("教育".to_string()),
                ..ChatItem::new(
                    "5",
                    "学习助手",
                    "辅助学习各类知识，解答学术问题和概念。",
                    "https://example.com/chat/learning",
                )
            },
            ChatItem {
                icon: Some("BrainCircuit".to_string()),
                category: Some("技术".to_string()),
                last_visited: Some(SEED_TIMESTAMP.to_string()),
                ..ChatItem::new(
                    "6",
                    "AI 顾问",
                    "探讨人工智能技术和发展，解答AI相关问题。",
                    "https://example.com/chat/ai",
                )
            },
        ],
        categories: Some(
            ["开发工具", "内容创作", "数据工具", "教育", "技术"]
                .iter()
                .map(|c| c.to_string())
                .collect(),
        ),
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
