//! Channel-backed notification delivery.

use tokio::sync::mpsc;

use gradnet_core::notification::{Notification, Notifier};

/// Notifier that forwards notifications over an unbounded tokio channel.
///
/// The front end holds the receiving half and drains it between renders.
pub struct ChannelNotifier {
    sender: mpsc::UnboundedSender<Notification>,
}

impl ChannelNotifier {
    /// Creates a notifier and the receiver the front end listens on.
    pub fn new() -> (Self, mpsc::UnboundedReceiver<Notification>) {
        let (sender, receiver) = mpsc::unbounded_channel();
        (Self { sender }, receiver)
    }
}

impl Notifier for ChannelNotifier {
    fn notify(&self, notification: Notification) {
        // A closed receiver just discards the event
        let _ = self.sender.send(notification);
    }
}
