//! Notification domain model.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A user-facing notification raised when a message arrives.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    /// Unique identifier (UUID format)
    pub id: String,
    /// Conversation the message belongs to
    pub conversation_id: String,
    /// Profile ID of the message sender
    pub sender_id: String,
    /// Message content preview
    pub body: String,
    /// Timestamp when the notification was raised (ISO 8601 format)
    pub created_at: String,
}

impl Notification {
    /// Creates a message-received notification stamped with the current
    /// time.
    pub fn message_received(
        conversation_id: impl Into<String>,
        sender_id: impl Into<String>,
        body: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            conversation_id: conversation_id.into(),
            sender_id: sender_id.into(),
            body: body.into(),
            created_at: chrono::Utc::now().to_rfc3339(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_received_fills_ids() {
        let notification = Notification::message_received("conv-1", "sender-1", "こんにちは");
        assert!(!notification.id.is_empty());
        assert_eq!(notification.conversation_id, "conv-1");
        assert_eq!(notification.sender_id, "sender-1");
        assert_eq!(notification.body, "こんにちは");
    }
}
