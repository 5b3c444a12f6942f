use crate::domain::{InstructionEvent, InstructionStatus};
use crate::ports::NotificationSink;

/// Prints one line per notification for interactive use.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleNotificationSink;

impl ConsoleNotificationSink {
    pub fn new() -> Self {
        Self
    }
}

impl NotificationSink for ConsoleNotificationSink {
    fn report_error(&self, text: &str) {
        eprintln!("❌ {}", text);
    }

    fn report_completion(&self, event: &InstructionEvent) {
        match event.status {
            InstructionStatus::Success => println!("✅ {}", event.summary()),
            InstructionStatus::Skipped => {
                println!("⏭️  Skipped {}: nothing to do", event.instruction.target)
            }
            InstructionStatus::Failed => match &event.detail {
                Some(detail) => eprintln!("❌ {}", detail),
                None => eprintln!("❌ Failed: {}", event.summary()),
            },
        }
    }
}
