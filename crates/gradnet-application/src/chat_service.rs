//! Chat simulation service.
//!
//! Implements the send/auto-reply cycle over the in-memory conversation
//! store: a send appends the caller's message after the configured
//! latency, then a background task appends the counterpart's canned
//! reply and raises a notification. Each conversation moves
//! `idle → sending → idle`; while it is `sending` a front end should
//! disable its send control.

use std::collections::HashSet;
use std::sync::Arc;

use tokio::sync::RwLock;
use tokio::time::sleep;

use gradnet_core::GradnetError;
use gradnet_core::auth::AuthService;
use gradnet_core::chat::{ChatMessage, Conversation, ConversationRepository};
use gradnet_core::config::DelayConfig;
use gradnet_core::error::Result;
use gradnet_core::notification::{Notification, Notifier};
use gradnet_core::profile::{ProfileRepository, UserProfile};

/// Replies the simulated counterpart cycles through.
const CANNED_REPLIES: &[&str] = &[
    "ありがとうございます！とても参考になります。",
    "なるほど、もう少し詳しく教えていただけますか？",
    "承知しました。また改めてご連絡しますね。",
];

/// One row in the chat list.
#[derive(Debug, Clone)]
pub struct ConversationSummary {
    /// Conversation the row links to
    pub conversation_id: String,
    /// Counterpart profile for display
    pub participant: UserProfile,
    /// Most recent message, if any
    pub last_message: Option<ChatMessage>,
    /// Counterpart messages not yet seen
    pub unread_count: usize,
}

/// Service driving the chat simulation.
#[derive(Clone)]
pub struct ChatService {
    conversations: Arc<dyn ConversationRepository>,
    profiles: Arc<dyn ProfileRepository>,
    auth: Arc<dyn AuthService>,
    notifier: Arc<dyn Notifier>,
    delays: DelayConfig,
    /// Conversations with a send currently in flight
    sending: Arc<RwLock<HashSet<String>>>,
}

impl ChatService {
    /// Creates a chat service over the given stores and services.
    pub fn new(
        conversations: Arc<dyn ConversationRepository>,
        profiles: Arc<dyn ProfileRepository>,
        auth: Arc<dyn AuthService>,
        notifier: Arc<dyn Notifier>,
        delays: DelayConfig,
    ) -> Self {
        Self {
            conversations,
            profiles,
            auth,
            notifier,
            delays,
            sending: Arc::new(RwLock::new(HashSet::new())),
        }
    }

    /// Sends a message from the signed-in member.
    ///
    /// Guard clauses reject blank content, a missing sign-in, an unknown
    /// conversation, and a send already in flight for the conversation —
    /// all without touching the history. Otherwise the message becomes
    /// visible after the send delay and a canned counterpart reply is
    /// scheduled after the reply delay.
    ///
    /// # Returns
    ///
    /// The appended message.
    pub async fn send_message(&self, conversation_id: &str, content: &str) -> Result<ChatMessage> {
        let trimmed = content.trim();
        if trimmed.is_empty() {
            return Err(GradnetError::validation("message content is empty"));
        }

        let sender = self
            .auth
            .current_user()
            .await
            .ok_or(GradnetError::Unauthenticated)?;

        {
            let mut sending = self.sending.write().await;
            if !sending.insert(conversation_id.to_string()) {
                return Err(GradnetError::validation(
                    "a send is already in flight for this conversation",
                ));
            }
        }

        let result = self.deliver(conversation_id, trimmed, &sender.id).await;
        self.sending.write().await.remove(conversation_id);

        let message = result?;
        self.schedule_auto_reply(conversation_id.to_string());
        Ok(message)
    }

    /// Returns true while a send is in flight for the conversation.
    pub async fn is_sending(&self, conversation_id: &str) -> bool {
        self.sending.read().await.contains(conversation_id)
    }

    /// Returns the conversation with the given ID.
    pub async fn conversation(&self, conversation_id: &str) -> Result<Conversation> {
        self.conversations
            .find_by_id(conversation_id)
            .await?
            .ok_or_else(|| GradnetError::not_found("Conversation", conversation_id))
    }

    /// Marks all counterpart messages in the conversation as seen.
    ///
    /// # Returns
    ///
    /// How many messages changed.
    pub async fn mark_seen(&self, conversation_id: &str) -> Result<usize> {
        let mut conversation = self.conversation(conversation_id).await?;
        let changed = conversation.mark_seen();
        if changed > 0 {
            self.conversations.save(&conversation).await?;
            tracing::debug!(
                "[ChatService] Marked {} messages seen in {}",
                changed,
                conversation_id
            );
        }
        Ok(changed)
    }

    /// Chat-list rows, ordered by latest activity (latest first).
    pub async fn summaries(&self) -> Result<Vec<ConversationSummary>> {
        let conversations = self.conversations.list_all().await?;

        let mut summaries = Vec::with_capacity(conversations.len());
        for conversation in conversations {
            let Some(participant) = self.profiles.find_by_id(&conversation.participant_id).await?
            else {
                tracing::warn!(
                    "[ChatService] Conversation {} references unknown profile {}",
                    conversation.id,
                    conversation.participant_id
                );
                continue;
            };
            summaries.push(ConversationSummary {
                unread_count: conversation.unread_count(),
                last_message: conversation.last_message().cloned(),
                conversation_id: conversation.id,
                participant,
            });
        }

        // Timestamps share one RFC 3339 format, so string order is
        // chronological
        summaries.sort_by(|a, b| {
            let a_stamp = a.last_message.as_ref().map(|m| m.timestamp.as_str());
            let b_stamp = b.last_message.as_ref().map(|m| m.timestamp.as_str());
            b_stamp.cmp(&a_stamp)
        });

        Ok(summaries)
    }

    /// Total unread messages across all conversations.
    pub async fn unread_total(&self) -> Result<usize> {
        let conversations = self.conversations.list_all().await?;
        Ok(conversations.iter().map(|c| c.unread_count()).sum())
    }

    /// Opens a conversation with the given member from their profile.
    ///
    /// Resolves after the connect delay; reuses the existing conversation
    /// with that member or creates an empty one.
    pub async fn start_conversation(&self, participant_id: &str) -> Result<Conversation> {
        let current = self
            .auth
            .current_user()
            .await
            .ok_or(GradnetError::Unauthenticated)?;
        if current.id == participant_id {
            return Err(GradnetError::validation(
                "cannot start a conversation with yourself",
            ));
        }
        if self.profiles.find_by_id(participant_id).await?.is_none() {
            return Err(GradnetError::not_found("UserProfile", participant_id));
        }

        sleep(self.delays.connect()).await;

        if let Some(existing) = self.conversations.find_by_participant(participant_id).await? {
            return Ok(existing);
        }

        let conversation = Conversation::new(participant_id);
        self.conversations.save(&conversation).await?;
        tracing::info!(
            "[ChatService] Started conversation {} with {}",
            conversation.id,
            participant_id
        );
        Ok(conversation)
    }

    async fn deliver(
        &self,
        conversation_id: &str,
        content: &str,
        sender_id: &str,
    ) -> Result<ChatMessage> {
        sleep(self.delays.message_send()).await;

        let mut conversation = self.conversation(conversation_id).await?;
        let message = ChatMessage::new(sender_id, content);
        conversation.push_message(message.clone());
        self.conversations.save(&conversation).await?;

        tracing::debug!(
            "[ChatService] Appended message {} to {}",
            message.id,
            conversation_id
        );
        Ok(message)
    }

    fn schedule_auto_reply(&self, conversation_id: String) {
        let conversations = self.conversations.clone();
        let notifier = self.notifier.clone();
        let delay = self.delays.auto_reply();

        tokio::spawn(async move {
            sleep(delay).await;
            if let Err(e) = Self::append_auto_reply(&conversations, &notifier, &conversation_id).await
            {
                tracing::warn!(
                    "[ChatService] Auto reply failed for {}: {}",
                    conversation_id,
                    e
                );
            }
        });
    }

    async fn append_auto_reply(
        conversations: &Arc<dyn ConversationRepository>,
        notifier: &Arc<dyn Notifier>,
        conversation_id: &str,
    ) -> Result<()> {
        let mut conversation = conversations
            .find_by_id(conversation_id)
            .await?
            .ok_or_else(|| GradnetError::not_found("Conversation", conversation_id))?;

        let reply_text = CANNED_REPLIES[conversation.messages.len() % CANNED_REPLIES.len()];
        let reply = ChatMessage::new(conversation.participant_id.clone(), reply_text);
        conversation.push_message(reply.clone());
        conversations.save(&conversation).await?;

        notifier.notify(Notification::message_received(
            conversation_id,
            reply.sender_id.clone(),
            reply.content.clone(),
        ));
        tracing::debug!("[ChatService] Auto reply appended to {}", conversation_id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    use gradnet_core::chat::DEMO_CONVERSATION_UUID;
    use gradnet_core::config::DelayConfig;
    use gradnet_core::profile::SUZUKI_UUID;
    use gradnet_infrastructure::{
        ChannelNotifier, InMemoryConversationRepository, InMemoryProfileRepository,
        MockAuthService,
    };
    use tokio::sync::mpsc::UnboundedReceiver;
    use tokio::time::timeout;

    async fn signed_in_service(
        delays: DelayConfig,
    ) -> (ChatService, UnboundedReceiver<Notification>) {
        let profiles: Arc<dyn ProfileRepository> =
            Arc::new(InMemoryProfileRepository::with_default_profiles());
        let conversations: Arc<dyn ConversationRepository> =
            Arc::new(InMemoryConversationRepository::with_default_conversations());
        let auth = Arc::new(MockAuthService::new(profiles.clone(), DelayConfig::instant()));
        auth.sign_in().await.unwrap();

        let (notifier, receiver) = ChannelNotifier::new();
        let service = ChatService::new(
            conversations,
            profiles,
            auth,
            Arc::new(notifier),
            delays,
        );
        (service, receiver)
    }

    fn slow_reply_delays() -> DelayConfig {
        // Reply far in the future so tests can observe the intermediate
        // state
        DelayConfig {
            auto_reply_ms: 60_000,
            ..DelayConfig::instant()
        }
    }

    #[tokio::test]
    async fn test_send_appends_one_visible_message() {
        let (service, _receiver) = signed_in_service(slow_reply_delays()).await;
        let before = service
            .conversation(DEMO_CONVERSATION_UUID)
            .await
            .unwrap()
            .messages
            .len();

        let message = service
            .send_message(DEMO_CONVERSATION_UUID, "ありがとうございます！")
            .await
            .unwrap();

        let conversation = service.conversation(DEMO_CONVERSATION_UUID).await.unwrap();
        assert_eq!(conversation.messages.len(), before + 1);
        assert_eq!(conversation.last_message().unwrap().id, message.id);
        assert!(!message.seen);
    }

    #[tokio::test]
    async fn test_empty_send_is_rejected_without_append() {
        let (service, _receiver) = signed_in_service(slow_reply_delays()).await;
        let before = service
            .conversation(DEMO_CONVERSATION_UUID)
            .await
            .unwrap()
            .messages
            .len();

        for content in ["", "   ", "\n\t"] {
            let err = service
                .send_message(DEMO_CONVERSATION_UUID, content)
                .await
                .unwrap_err();
            assert!(err.is_validation());
        }

        let after = service
            .conversation(DEMO_CONVERSATION_UUID)
            .await
            .unwrap()
            .messages
            .len();
        assert_eq!(after, before);
    }

    #[tokio::test]
    async fn test_send_requires_sign_in() {
        let (service, _receiver) = signed_in_service(DelayConfig::instant()).await;
        service.auth.sign_out().await.unwrap();

        let err = service
            .send_message(DEMO_CONVERSATION_UUID, "こんにちは")
            .await
            .unwrap_err();
        assert!(err.is_unauthenticated());
    }

    #[tokio::test]
    async fn test_send_to_unknown_conversation() {
        let (service, _receiver) = signed_in_service(DelayConfig::instant()).await;
        let err = service
            .send_message("missing-conversation", "こんにちは")
            .await
            .unwrap_err();
        assert!(err.is_not_found());
        // The guard released the sending slot
        assert!(!service.is_sending("missing-conversation").await);
    }

    #[tokio::test]
    async fn test_auto_reply_and_notification_follow_send() {
        let (service, mut receiver) = signed_in_service(DelayConfig::instant()).await;
        let before = service
            .conversation(DEMO_CONVERSATION_UUID)
            .await
            .unwrap()
            .messages
            .len();

        service
            .send_message(DEMO_CONVERSATION_UUID, "質問させてください。")
            .await
            .unwrap();

        // The notification is raised after the reply is stored, so
        // receiving it means the history is final
        let notification = timeout(Duration::from_secs(5), receiver.recv())
            .await
            .expect("auto reply timed out")
            .expect("notifier dropped");
        assert_eq!(notification.conversation_id, DEMO_CONVERSATION_UUID);
        assert_eq!(notification.sender_id, SUZUKI_UUID);

        let conversation = service.conversation(DEMO_CONVERSATION_UUID).await.unwrap();
        assert_eq!(conversation.messages.len(), before + 2);
        let reply = conversation.last_message().unwrap();
        assert_eq!(reply.sender_id, SUZUKI_UUID);
        assert_eq!(reply.content, notification.body);

        // Exactly one notification per send
        assert!(receiver.try_recv().is_err());
    }

    #[tokio::test]
    async fn test_mark_seen_clears_unread() {
        let (service, _receiver) = signed_in_service(slow_reply_delays()).await;
        assert_eq!(service.unread_total().await.unwrap(), 1);

        let changed = service.mark_seen(DEMO_CONVERSATION_UUID).await.unwrap();
        assert_eq!(changed, 1);
        assert_eq!(service.unread_total().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_start_conversation_reuses_existing() {
        let (service, _receiver) = signed_in_service(DelayConfig::instant()).await;
        let conversation = service.start_conversation(SUZUKI_UUID).await.unwrap();
        assert_eq!(conversation.id, DEMO_CONVERSATION_UUID);
    }

    #[tokio::test]
    async fn test_start_conversation_rejects_self_and_unknown() {
        let (service, _receiver) = signed_in_service(DelayConfig::instant()).await;
        let me = service.auth.current_user().await.unwrap();

        assert!(
            service
                .start_conversation(&me.id)
                .await
                .unwrap_err()
                .is_validation()
        );
        assert!(
            service
                .start_conversation("missing-profile")
                .await
                .unwrap_err()
                .is_not_found()
        );
    }

    #[tokio::test]
    async fn test_summaries_order_latest_first() {
        let (service, mut receiver) = signed_in_service(DelayConfig::instant()).await;

        // Nothing to pair the prospect against yet, so seed a second
        // conversation and make it the most recent by sending into it
        let mut second = Conversation::new("second-member");
        second.push_message(ChatMessage::new("second-member", "こんにちは"));
        let second_id = second.id.clone();
        service.conversations.save(&second).await.unwrap();

        let mut extra = gradnet_core::profile::get_default_profiles().remove(1);
        extra.id = "second-member".to_string();
        service.profiles.save(&extra).await.unwrap();

        let summaries = service.summaries().await.unwrap();
        assert_eq!(summaries.len(), 2);
        assert_eq!(summaries[0].conversation_id, second_id);
        assert_eq!(summaries[0].unread_count, 1);
        assert_eq!(summaries[1].conversation_id, DEMO_CONVERSATION_UUID);

        // A send into the demo conversation moves it to the top
        service
            .send_message(DEMO_CONVERSATION_UUID, "こちらこそ")
            .await
            .unwrap();
        timeout(Duration::from_secs(5), receiver.recv())
            .await
            .expect("auto reply timed out")
            .expect("notifier dropped");

        let summaries = service.summaries().await.unwrap();
        assert_eq!(summaries[0].conversation_id, DEMO_CONVERSATION_UUID);
    }
}
