use std::fmt;

use serde::{Deserialize, Serialize};

use super::{FileAction, InstructionError};

/// Declarative description of one single-file operation.
///
/// Descriptors are immutable during processing: placeholder resolution
/// produces a [`ResolvedFileInstruction`] and leaves this value untouched,
/// so the same descriptor can be processed against any number of contexts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FileInstruction {
    /// One of `copy`, `delete`, `overwrite`.
    pub action: String,
    /// Source path, needed by `copy`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    /// Target path, needed by every action.
    pub target: String,
    /// Accepted for compatibility with existing descriptors. Not consulted:
    /// copy always replaces the target.
    #[serde(rename = "override")]
    pub override_existing: bool,
    /// Human-readable description. Defaults per action when absent or empty.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl FileInstruction {
    pub fn copy(source: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            action: FileAction::Copy.as_str().to_string(),
            source: Some(source.into()),
            target: target.into(),
            ..Self::default()
        }
    }

    pub fn delete(target: impl Into<String>) -> Self {
        Self {
            action: FileAction::Delete.as_str().to_string(),
            target: target.into(),
            ..Self::default()
        }
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    pub fn with_override(mut self, override_existing: bool) -> Self {
        self.override_existing = override_existing;
        self
    }

    /// Check the descriptor and return its parsed action.
    ///
    /// Valid iff the action is non-empty and known, and the target is
    /// non-empty. `source` is not checked here.
    pub fn validate(&self) -> Result<FileAction, InstructionError> {
        if self.action.is_empty() {
            return Err(self.invalid("missing action"));
        }
        let Some(action) = FileAction::from_descriptor(&self.action) else {
            return Err(self.invalid("unknown action"));
        };
        if self.target.is_empty() {
            return Err(self.invalid("missing target"));
        }
        Ok(action)
    }

    /// Message as written in the descriptor, empty when absent.
    pub fn message(&self) -> &str {
        self.message.as_deref().unwrap_or_default()
    }

    fn invalid(&self, reason: &'static str) -> InstructionError {
        InstructionError::InvalidDescriptor { reason, descriptor: self.to_string() }
    }
}

impl fmt::Display for FileInstruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "file(action='{}', source='{}', target='{}', override={}, message='{}')",
            self.action,
            self.source.as_deref().unwrap_or_default(),
            self.target,
            self.override_existing,
            self.message()
        )
    }
}

/// Working copy of a validated instruction for a single execution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedFileInstruction {
    pub action: FileAction,
    pub source: Option<String>,
    pub target: String,
    pub override_existing: bool,
    pub message: String,
}

impl fmt::Display for ResolvedFileInstruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "file(action='{}', source='{}', target='{}', override={}, message='{}')",
            self.action,
            self.source.as_deref().unwrap_or_default(),
            self.target,
            self.override_existing,
            self.message
        )
    }
}
