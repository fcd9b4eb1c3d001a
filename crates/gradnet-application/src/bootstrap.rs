//! Application wiring.
//!
//! Builds the full service graph over the seeded in-memory stores. Front
//! ends call `AppContext::bootstrap` once and keep the returned context
//! and notification receiver for their lifetime.

use std::sync::Arc;

use tokio::sync::mpsc::UnboundedReceiver;

use gradnet_core::auth::AuthService;
use gradnet_core::chat::ConversationRepository;
use gradnet_core::config::AppConfig;
use gradnet_core::notification::{Notification, Notifier};
use gradnet_core::profile::ProfileRepository;
use gradnet_infrastructure::{
    ChannelNotifier, InMemoryConversationRepository, InMemoryProfileRepository, MockAuthService,
};

use crate::chat_service::ChatService;
use crate::directory_service::DirectoryService;

/// The wired application services shared by every view.
pub struct AppContext {
    /// Effective configuration
    pub config: AppConfig,
    /// Identity layer
    pub auth: Arc<dyn AuthService>,
    /// Member search and detail lookup
    pub directory: DirectoryService,
    /// Conversations and the send/auto-reply simulation
    pub chat: ChatService,
}

impl AppContext {
    /// Builds the service graph and returns it together with the
    /// notification receiver.
    pub fn bootstrap(config: AppConfig) -> (Self, UnboundedReceiver<Notification>) {
        let profiles: Arc<dyn ProfileRepository> =
            Arc::new(InMemoryProfileRepository::with_default_profiles());
        let conversations: Arc<dyn ConversationRepository> =
            Arc::new(InMemoryConversationRepository::with_default_conversations());

        let auth: Arc<dyn AuthService> =
            Arc::new(MockAuthService::new(profiles.clone(), config.delays.clone()));

        let (notifier, receiver) = ChannelNotifier::new();
        let notifier: Arc<dyn Notifier> = Arc::new(notifier);

        let directory = DirectoryService::new(profiles.clone(), auth.clone());
        let chat = ChatService::new(
            conversations,
            profiles,
            auth.clone(),
            notifier,
            config.delays.clone(),
        );

        tracing::info!("[Bootstrap] Application context ready");

        (
            Self {
                config,
                auth,
                directory,
                chat,
            },
            receiver,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_bootstrap_starts_signed_out() {
        let (context, _receiver) = AppContext::bootstrap(AppConfig::instant());
        assert!(context.auth.current_user().await.is_none());
    }
}
