//! Chat domain module.
//!
//! This module contains the conversation and message domain models, the
//! seeded demo conversation, and the repository interface.
//!
//! # Module Structure
//!
//! - `model`: Core chat domain models (`Conversation`, `ChatMessage`)
//! - `preset`: Seeded demo conversation
//! - `repository`: Repository trait for conversation storage
//!
//! # Usage
//!
//! ```ignore
//! use gradnet_core::chat::{Conversation, ChatMessage, ConversationRepository};
//! ```

mod model;
mod preset;
mod repository;

// Re-export public API
pub use model::{ChatMessage, Conversation};
pub use preset::{DEMO_CONVERSATION_UUID, get_default_conversations};
pub use repository::ConversationRepository;
