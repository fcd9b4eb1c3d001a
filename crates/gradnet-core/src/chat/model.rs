//! Conversation and message domain models.
//!
//! A conversation is the ordered message history between the signed-in
//! member and one counterpart. Histories live in memory only and are
//! appended to at runtime; messages are immutable once appended, apart
//! from their `seen` flag.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single message in a conversation history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Unique identifier (UUID format)
    pub id: String,
    /// Profile ID of the sender
    pub sender_id: String,
    /// The content of the message
    pub content: String,
    /// Timestamp when the message was created (ISO 8601 format)
    pub timestamp: String,
    /// Whether the receiving side has seen the message
    pub seen: bool,
}

impl ChatMessage {
    /// Creates a new unseen message stamped with the current time.
    pub fn new(sender_id: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            sender_id: sender_id.into(),
            content: content.into(),
            timestamp: chrono::Utc::now().to_rfc3339(),
            seen: false,
        }
    }
}

/// An ordered message history with one counterpart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Conversation {
    /// Unique identifier (UUID format)
    pub id: String,
    /// Profile ID of the counterpart participant
    pub participant_id: String,
    /// Message history in insertion order
    #[serde(default)]
    pub messages: Vec<ChatMessage>,
    /// Timestamp when the conversation was created (ISO 8601 format)
    pub created_at: String,
}

impl Conversation {
    /// Creates a new empty conversation with the given counterpart.
    pub fn new(participant_id: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            participant_id: participant_id.into(),
            messages: Vec::new(),
            created_at: chrono::Utc::now().to_rfc3339(),
        }
    }

    /// Appends a message to the history.
    pub fn push_message(&mut self, message: ChatMessage) {
        self.messages.push(message);
    }

    /// Returns the most recent message, if any.
    pub fn last_message(&self) -> Option<&ChatMessage> {
        self.messages.last()
    }

    /// Number of counterpart messages not yet seen.
    pub fn unread_count(&self) -> usize {
        self.messages
            .iter()
            .filter(|m| m.sender_id == self.participant_id && !m.seen)
            .count()
    }

    /// Marks all counterpart messages as seen. Returns how many changed.
    pub fn mark_seen(&mut self) -> usize {
        let mut changed = 0;
        for message in &mut self.messages {
            if message.sender_id == self.participant_id && !message.seen {
                message.seen = true;
                changed += 1;
            }
        }
        changed
    }
}
