//! Notification delivery seam.

use super::model::Notification;

/// Sink for user-facing notifications.
///
/// The chat simulation calls this from a background task, so
/// implementations must not block; delivery is best-effort and a
/// notification may be dropped when no receiver is listening.
pub trait Notifier: Send + Sync {
    /// Delivers a notification.
    fn notify(&self, notification: Notification);
}
