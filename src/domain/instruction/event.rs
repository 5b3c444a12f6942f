use chrono::{DateTime, Utc};

use super::{InstructionStatus, ResolvedFileInstruction};

/// Completion notification for an instruction that passed validation.
#[derive(Debug, Clone)]
pub struct InstructionEvent {
    pub instruction: ResolvedFileInstruction,
    pub status: InstructionStatus,
    /// Failure explanation, present only when `status` is `Failed`.
    pub detail: Option<String>,
    pub finished_at: DateTime<Utc>,
}

impl InstructionEvent {
    pub fn new(instruction: ResolvedFileInstruction, status: InstructionStatus) -> Self {
        Self { instruction, status, detail: None, finished_at: Utc::now() }
    }

    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    /// Text for display: the resolved message, or the target when no message applies.
    pub fn summary(&self) -> &str {
        if self.instruction.message.is_empty() {
            &self.instruction.target
        } else {
            &self.instruction.message
        }
    }
}

/// A notification as delivered to asynchronous consumers.
#[derive(Debug, Clone)]
pub enum Notification {
    Error(String),
    Completion(InstructionEvent),
}

impl Notification {
    pub fn status(&self) -> InstructionStatus {
        match self {
            Notification::Error(_) => InstructionStatus::Failed,
            Notification::Completion(event) => event.status,
        }
    }
}
