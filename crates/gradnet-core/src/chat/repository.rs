//! Conversation repository trait.
//!
//! Defines the interface for conversation storage.

use super::model::Conversation;
use crate::error::Result;

/// An abstract repository for managing conversation histories.
///
/// This trait defines the contract for storing and retrieving
/// conversations, decoupling the chat logic from the storage mechanism
/// (an in-memory map today). There is a single writer at any time, so
/// implementations need no conflict handling beyond interior locking.
#[async_trait::async_trait]
pub trait ConversationRepository: Send + Sync {
    /// Lists all conversations.
    ///
    /// # Returns
    ///
    /// - `Ok(Vec<Conversation>)`: All stored conversations
    /// - `Err(GradnetError)`: Error if retrieval fails
    async fn list_all(&self) -> Result<Vec<Conversation>>;

    /// Finds a conversation by its ID.
    ///
    /// # Arguments
    ///
    /// * `id` - The ID of the conversation to find
    ///
    /// # Returns
    ///
    /// - `Ok(Some(Conversation))`: Conversation found
    /// - `Ok(None)`: Conversation not found
    /// - `Err(GradnetError)`: Error occurred during retrieval
    async fn find_by_id(&self, id: &str) -> Result<Option<Conversation>>;

    /// Finds the conversation with the given counterpart, if one exists.
    ///
    /// # Arguments
    ///
    /// * `participant_id` - Profile ID of the counterpart
    async fn find_by_participant(&self, participant_id: &str) -> Result<Option<Conversation>>;

    /// Saves a conversation, replacing any stored conversation with the
    /// same ID.
    ///
    /// # Arguments
    ///
    /// * `conversation` - The conversation to save
    async fn save(&self, conversation: &Conversation) -> Result<()>;
}
