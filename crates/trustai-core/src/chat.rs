//! Follow-up chat message types.
//!
//! Chat transcripts are ephemeral: they live for the duration of one report
//! view and are never persisted.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Represents the sender of a chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    /// Message from the user.
    User,
    /// Message from the AI assistant.
    Assistant,
}

/// A single message in a follow-up conversation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: String,
    pub role: ChatRole,
    pub text: String,
}

impl ChatMessage {
    /// Creates a user message with a fresh id.
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            role: ChatRole::User,
            text: text.into(),
        }
    }

    /// Creates an assistant message with a fresh id.
    pub fn assistant(text: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            role: ChatRole::Assistant,
            text: text.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_get_unique_ids() {
        let a = ChatMessage::user("one");
        let b = ChatMessage::user("two");
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_role_serializes_lowercase() {
        let msg = ChatMessage::assistant("hello");
        let value = serde_json::to_value(&msg).unwrap();
        assert_eq!(value["role"], "assistant");
    }
}
