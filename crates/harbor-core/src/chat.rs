//! Conversation message types.
//!
//! This module contains types for representing messages in a chat
//! transcript, including senders and message content.

use serde::{Deserialize, Serialize};

/// Represents the sender of a message in a chat transcript.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MessageSender {
    /// Message from the user.
    User,
    /// Message from the AI assistant.
    Assistant,
}

/// A single message in a chat transcript.
///
/// Each message has a sender (user or assistant), the message text,
/// and a timestamp indicating when it was appended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Who sent the message.
    pub sender: MessageSender,
    /// The content of the message.
    pub text: String,
    /// Timestamp when the message was appended (ISO 8601 format).
    pub timestamp: String,
}

impl ChatMessage {
    /// Creates a message stamped with the current time.
    pub fn now(sender: MessageSender, text: impl Into<String>) -> Self {
        Self {
            sender,
            text: text.into(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}
