//! End-to-end flow over the wired application context: sign in, search
//! the directory, open a conversation from a profile, send a message and
//! receive the simulated reply.

use std::time::Duration;

use tokio::time::timeout;

use gradnet_application::AppContext;
use gradnet_core::auth::AuthService;
use gradnet_core::config::AppConfig;
use gradnet_core::profile::{SUZUKI_UUID, UserRole};
use gradnet_core::search::SearchFilters;

#[tokio::test]
async fn full_messaging_flow() {
    let (context, mut notifications) = AppContext::bootstrap(AppConfig::instant());

    // Sign in as the demo account
    let me = context.auth.sign_in().await.unwrap();
    assert_eq!(me.role, UserRole::Graduate);

    // The directory shows the prospect but never the signed-in member
    let results = context
        .directory
        .search(&SearchFilters::default())
        .await
        .unwrap();
    assert_eq!(results.len(), 1);
    let counterpart = &results[0];
    assert_eq!(counterpart.id, SUZUKI_UUID);

    // Opening a conversation from the profile reuses the seeded one
    let conversation = context
        .chat
        .start_conversation(&counterpart.id)
        .await
        .unwrap();
    let seeded_len = conversation.messages.len();
    assert_eq!(seeded_len, 3);

    // Reading the thread clears the unread badge
    context.chat.mark_seen(&conversation.id).await.unwrap();
    assert_eq!(context.chat.unread_total().await.unwrap(), 0);

    // Send a message; one entry is visible once the send resolves
    context
        .chat
        .send_message(&conversation.id, "週末に研究室見学はできますか？")
        .await
        .unwrap();

    // The counterpart's reply arrives with a notification
    let notification = timeout(Duration::from_secs(5), notifications.recv())
        .await
        .expect("auto reply timed out")
        .expect("notifier dropped");
    assert_eq!(notification.sender_id, counterpart.id);

    let conversation = context.chat.conversation(&conversation.id).await.unwrap();
    assert_eq!(conversation.messages.len(), seeded_len + 2);
    assert_eq!(conversation.unread_count(), 1);

    // Sign out ends the session
    context.auth.sign_out().await.unwrap();
    assert!(context.auth.current_user().await.is_none());
}

#[tokio::test]
async fn empty_send_leaves_history_untouched() {
    let (context, _notifications) = AppContext::bootstrap(AppConfig::instant());
    context.auth.sign_in().await.unwrap();

    let conversation = context.chat.start_conversation(SUZUKI_UUID).await.unwrap();
    let before = conversation.messages.len();

    let err = context
        .chat
        .send_message(&conversation.id, "   ")
        .await
        .unwrap_err();
    assert!(err.is_validation());

    let after = context
        .chat
        .conversation(&conversation.id)
        .await
        .unwrap()
        .messages
        .len();
    assert_eq!(after, before);
}
