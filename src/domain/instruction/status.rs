use std::fmt;

/// Terminal outcome of processing one instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InstructionStatus {
    Success,
    /// Nothing to do, e.g. deleting a file that is already absent.
    Skipped,
    Failed,
}

impl InstructionStatus {
    pub fn is_failure(&self) -> bool {
        matches!(self, InstructionStatus::Failed)
    }
}

impl fmt::Display for InstructionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            InstructionStatus::Success => "SUCCESS",
            InstructionStatus::Skipped => "SKIPPED",
            InstructionStatus::Failed => "FAILED",
        };
        f.write_str(label)
    }
}
