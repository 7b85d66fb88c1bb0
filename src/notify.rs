//! Notification surface used to confirm donations.

use std::time::Duration;

use tracing::info;

/// Content of a notification popup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageProps {
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    /// Identifies the popup so a later one can replace it.
    pub id: String,
    pub message: MessageProps,
    /// Auto-dismiss delay.
    pub timeout: Duration,
}

/// Fire-and-forget display of a [`Notification`].
pub trait Notifier: Send + Sync {
    fn show(&self, notification: Notification);
}

/// Writes notifications to the log. Used when no UI is attached.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn show(&self, notification: Notification) {
        info!(
            id = %notification.id,
            timeout_ms = notification.timeout.as_millis() as u64,
            title = %notification.message.title,
            "{}",
            notification.message.description
        );
    }
}
