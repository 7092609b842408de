// ABOUTME: Chat conversation types held by the view session
// ABOUTME: ChatMessage records and the append-only Conversation sequence
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Forja Fitness

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Role of a conversation message
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    /// Message typed by the user
    User,
    /// Reply produced by the assistant
    Assistant,
}

/// A single conversation message, immutable once appended
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ChatMessage {
    /// Unique message id
    pub id: String,
    /// Who produced the message
    pub role: ChatRole,
    /// Message text
    pub text: String,
    /// Creation timestamp
    pub timestamp: DateTime<Utc>,
}

impl ChatMessage {
    /// Create a user message stamped with the current time
    #[must_use]
    pub fn user(text: impl Into<String>) -> Self {
        Self::new(ChatRole::User, text)
    }

    /// Create an assistant message stamped with the current time
    #[must_use]
    pub fn assistant(text: impl Into<String>) -> Self {
        Self::new(ChatRole::Assistant, text)
    }

    fn new(role: ChatRole, text: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            role,
            text: text.into(),
            timestamp: Utc::now(),
        }
    }
}

/// Append-only ordered message sequence owned by the view session
///
/// The pipeline itself is stateless between calls; conversation history
/// lives with the caller, which renders [`Conversation::transcript`] into
/// the chat prompt's context block.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Conversation {
    messages: Vec<ChatMessage>,
}

impl Conversation {
    /// Create an empty conversation
    #[must_use]
    pub const fn new() -> Self {
        Self {
            messages: Vec::new(),
        }
    }

    /// Append a user message and return a reference to it
    pub fn push_user(&mut self, text: impl Into<String>) -> &ChatMessage {
        self.push(ChatMessage::user(text))
    }

    /// Append an assistant message and return a reference to it
    pub fn push_assistant(&mut self, text: impl Into<String>) -> &ChatMessage {
        self.push(ChatMessage::assistant(text))
    }

    fn push(&mut self, message: ChatMessage) -> &ChatMessage {
        self.messages.push(message);
        // Just pushed, so the list is non-empty
        &self.messages[self.messages.len() - 1]
    }

    /// Messages in append order
    #[must_use]
    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// Number of messages
    #[must_use]
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Whether the conversation has no messages yet
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Render the conversation as a plain-text context block
    ///
    /// One line per message, in order, suitable for the chat prompt's
    /// context parameter.
    #[must_use]
    pub fn transcript(&self) -> String {
        self.messages
            .iter()
            .map(|m| match m.role {
                ChatRole::User => format!("Usuário: {}", m.text),
                ChatRole::Assistant => format!("Treinador: {}", m.text),
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_keep_append_order() {
        let mut conversation = Conversation::new();
        conversation.push_user("Quantas séries?");
        conversation.push_assistant("Quatro séries de 10-12.");
        conversation.push_user("E o descanso?");

        let roles: Vec<ChatRole> = conversation.messages().iter().map(|m| m.role).collect();
        assert_eq!(
            roles,
            vec![ChatRole::User, ChatRole::Assistant, ChatRole::User]
        );
        assert_eq!(conversation.len(), 3);
    }

    #[test]
    fn test_transcript_labels_roles() {
        let mut conversation = Conversation::new();
        conversation.push_user("oi");
        conversation.push_assistant("olá");
        let transcript = conversation.transcript();
        assert_eq!(transcript, "Usuário: oi\nTreinador: olá");
    }

    #[test]
    fn test_message_ids_are_unique() {
        let a = ChatMessage::user("a");
        let b = ChatMessage::user("a");
        assert_ne!(a.id, b.id);
    }
}
