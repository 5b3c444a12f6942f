//! Test double for `NotificationSink`.

use std::sync::{Arc, Mutex};

use crate::domain::{InstructionEvent, Notification};
use crate::ports::NotificationSink;

/// Records every notification; clones share the same log.
#[derive(Clone, Debug, Default)]
pub struct RecordingNotificationSink {
    notifications: Arc<Mutex<Vec<Notification>>>,
}

impl RecordingNotificationSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn notifications(&self) -> Vec<Notification> {
        self.notifications.lock().unwrap().clone()
    }

    pub fn errors(&self) -> Vec<String> {
        self.notifications()
            .into_iter()
            .filter_map(|n| match n {
                Notification::Error(text) => Some(text),
                Notification::Completion(_) => None,
            })
            .collect()
    }

    pub fn completions(&self) -> Vec<InstructionEvent> {
        self.notifications()
            .into_iter()
            .filter_map(|n| match n {
                Notification::Completion(event) => Some(event),
                Notification::Error(_) => None,
            })
            .collect()
    }

    pub fn len(&self) -> usize {
        self.notifications.lock().unwrap().len()
    }
}

impl NotificationSink for RecordingNotificationSink {
    fn report_error(&self, text: &str) {
        self.notifications.lock().unwrap().push(Notification::Error(text.to_string()));
    }

    fn report_completion(&self, event: &InstructionEvent) {
        self.notifications.lock().unwrap().push(Notification::Completion(event.clone()));
    }
}
