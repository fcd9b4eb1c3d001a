//! Seeded demo conversation.
//!
//! The demo account starts with one conversation already in progress so
//! the messages view has history to show on first visit.

use chrono::{Duration, Utc};
use uuid::Uuid;

use super::model::{ChatMessage, Conversation};
use crate::profile::{SUZUKI_UUID, TANAKA_UUID};

/// UUID for the seeded conversation between the two demo profiles
pub const DEMO_CONVERSATION_UUID: &str = "7f2c9a4e-1b8d-5c36-a9e4-6d0b3f8c2e71";

/// Returns the seeded conversations for the demo sign-in account.
///
/// One conversation with the prospect profile, carrying three messages;
/// the latest counterpart message is still unseen.
pub fn get_default_conversations() -> Vec<Conversation> {
    let now = Utc::now();
    let stamp = |minutes_ago: i64| (now - Duration::minutes(minutes_ago)).to_rfc3339();

    vec![Conversation {
        id: DEMO_CONVERSATION_UUID.to_string(),
        participant_id: SUZUKI_UUID.to_string(),
        messages: vec![
            ChatMessage {
                id: Uuid::new_v4().to_string(),
                sender_id: SUZUKI_UUID.to_string(),
                content: "はじめまして！東京大学の情報工学研究科について質問があります。"
                    .to_string(),
                timestamp: stamp(60),
                seen: true,
            },
            ChatMessage {
                id: Uuid::new_v4().to_string(),
                sender_id: TANAKA_UUID.to_string(),
                content: "こんにちは！どのような質問でしょうか？".to_string(),
                timestamp: stamp(30),
                seen: true,
            },
            ChatMessage {
                id: Uuid::new_v4().to_string(),
                sender_id: SUZUKI_UUID.to_string(),
                content: "研究室の雰囲気や、入試の難易度について教えていただけると嬉しいです。特に、プログラミングのスキルはどの程度必要ですか？"
                    .to_string(),
                timestamp: stamp(25),
                seen: false,
            },
        ],
        created_at: stamp(60),
    }]
}
