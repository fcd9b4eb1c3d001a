//! In-memory conversation repository.

use async_trait::async_trait;
use tokio::sync::RwLock;

use gradnet_core::chat::{Conversation, ConversationRepository, get_default_conversations};
use gradnet_core::error::Result;

/// Conversation repository backed by an in-memory list.
///
/// Histories are never persisted; a restart returns to the seed data.
pub struct InMemoryConversationRepository {
    conversations: RwLock<Vec<Conversation>>,
}

impl InMemoryConversationRepository {
    /// Creates a repository over the given conversations.
    pub fn new(conversations: Vec<Conversation>) -> Self {
        Self {
            conversations: RwLock::new(conversations),
        }
    }

    /// Creates a repository seeded with the default demo conversation.
    pub fn with_default_conversations() -> Self {
        Self::new(get_default_conversations())
    }
}

#[async_trait]
impl ConversationRepository for InMemoryConversationRepository {
    async fn list_all(&self) -> Result<Vec<Conversation>> {
        Ok(self.conversations.read().await.clone())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Conversation>> {
        let conversations = self.conversations.read().await;
        Ok(conversations.iter().find(|c| c.id == id).cloned())
    }

    async fn find_by_participant(&self, participant_id: &str) -> Result<Option<Conversation>> {
        let conversations = self.conversations.read().await;
        Ok(conversations
            .iter()
            .find(|c| c.participant_id == participant_id)
            .cloned())
    }

    async fn save(&self, conversation: &Conversation) -> Result<()> {
        let mut conversations = self.conversations.write().await;
        match conversations.iter_mut().find(|c| c.id == conversation.id) {
            Some(existing) => *existing = conversation.clone(),
            None => conversations.push(conversation.clone()),
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gradnet_core::chat::{ChatMessage, DEMO_CONVERSATION_UUID};
    use gradnet_core::profile::SUZUKI_UUID;

    #[tokio::test]
    async fn test_seeded_repository_has_demo_conversation() {
        let repository = InMemoryConversationRepository::with_default_conversations();
        let conversation = repository
            .find_by_id(DEMO_CONVERSATION_UUID)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(conversation.messages.len(), 3);
    }

    #[tokio::test]
    async fn test_find_by_participant() {
        let repository = InMemoryConversationRepository::with_default_conversations();
        assert!(
            repository
                .find_by_participant(SUZUKI_UUID)
                .await
                .unwrap()
                .is_some()
        );
        assert!(
            repository
                .find_by_participant("missing")
                .await
                .unwrap()
                .is_none()
        );
    }

    #[tokio::test]
    async fn test_save_appends_new_conversation() {
        let repository = InMemoryConversationRepository::with_default_conversations();
        let mut conversation = Conversation::new("other-member");
        conversation.push_message(ChatMessage::new("other-member", "やあ"));

        repository.save(&conversation).await.unwrap();

        assert_eq!(repository.list_all().await.unwrap().len(), 2);
        let stored = repository
            .find_by_id(&conversation.id)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(stored.messages.len(), 1);
    }
}
