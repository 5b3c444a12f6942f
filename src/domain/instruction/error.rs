use std::io;

use thiserror::Error;

use super::FileAction;

/// Why a single instruction did not succeed.
///
/// These never escape `process`; their display text becomes the detail of
/// the notification and the log line.
#[derive(Debug, Error)]
pub enum InstructionError {
    /// Descriptor failed validation before any I/O.
    #[error("Invalid instruction descriptor ({reason}): {descriptor}")]
    InvalidDescriptor { reason: &'static str, descriptor: String },

    /// Copy was requested without a source path.
    #[error("Copy instruction has no source path")]
    NoSource,

    /// Copy was requested without an existing source file.
    #[error("Source file doesn't exist: {0}")]
    MissingSource(String),

    /// Action is accepted by validation but has no file operation.
    #[error("Action '{0}' has no file operation")]
    UnsupportedAction(FileAction),

    /// Filesystem failure while copying or deleting.
    #[error("Error {operation} {path}: {source}")]
    Io {
        operation: &'static str,
        path: String,
        #[source]
        source: io::Error,
    },
}

impl InstructionError {
    pub(crate) fn io(operation: &'static str, path: impl Into<String>, source: io::Error) -> Self {
        InstructionError::Io { operation, path: path.into(), source }
    }
}
