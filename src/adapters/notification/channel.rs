use std::sync::mpsc::{self, Receiver, Sender};

use crate::domain::{InstructionEvent, Notification};
use crate::ports::NotificationSink;

/// Forwards notifications to a receiver for asynchronous consumption.
///
/// A dropped receiver is not an error for the instruction; the
/// notification is discarded.
#[derive(Debug, Clone)]
pub struct ChannelNotificationSink {
    sender: Sender<Notification>,
}

impl ChannelNotificationSink {
    /// Create a sink and the receiver its notifications arrive on.
    pub fn channel() -> (Self, Receiver<Notification>) {
        let (sender, receiver) = mpsc::channel();
        (Self { sender }, receiver)
    }

    fn send(&self, notification: Notification) {
        if self.sender.send(notification).is_err() {
            tracing::debug!("notification receiver dropped; discarding notification");
        }
    }
}

impl NotificationSink for ChannelNotificationSink {
    fn report_error(&self, text: &str) {
        self.send(Notification::Error(text.to_string()));
    }

    fn report_completion(&self, event: &InstructionEvent) {
        self.send(Notification::Completion(event.clone()));
    }
}
