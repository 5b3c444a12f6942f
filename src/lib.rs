//! provisio: declarative file instructions for project provisioning.
//!
//! A [`FileInstruction`] copies or deletes a single file. Its paths and
//! message may carry `{{ name }}` placeholders that are resolved against an
//! execution context before the operation runs. Processing always yields an
//! [`InstructionStatus`] and exactly one notification on the injected
//! [`NotificationSink`](ports::NotificationSink).

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

#[cfg(test)]
pub(crate) mod testing;

use std::path::{Path, PathBuf};

use adapters::ConsoleNotificationSink;
use app::commands::{apply, validate as validate_cmd};
use ports::NotificationSink;

pub use adapters::{ChannelNotificationSink, LocalFilesystem, MinijinjaPlaceholderResolver};
pub use app::commands::apply::{ApplyOptions, ApplyOutcome, InstructionResult};
pub use app::commands::validate::{InvalidInstruction, ValidateOutcome};
pub use app::{InstructionExecutor, ProvisionContext};
pub use domain::{
    AppError, FileAction, FileInstruction, InstructionEvent, InstructionSet, InstructionStatus,
    MessageTemplates, Notification, PlaceholderBindings, ProvisionConfig,
};

/// Apply a descriptor rooted at `root`, printing each outcome to the console.
pub fn apply_at(
    root: PathBuf,
    descriptor: &Path,
    options: &ApplyOptions,
) -> Result<ApplyOutcome, AppError> {
    apply::execute(&root, descriptor, options, ConsoleNotificationSink::new())
}

/// Apply a descriptor rooted at `root`, reporting to the given sink.
pub fn apply_with_sink<S: NotificationSink>(
    root: PathBuf,
    descriptor: &Path,
    options: &ApplyOptions,
    sink: S,
) -> Result<ApplyOutcome, AppError> {
    apply::execute(&root, descriptor, options, sink)
}

/// Check every instruction in a descriptor without applying it.
pub fn validate(descriptor: &Path) -> Result<ValidateOutcome, AppError> {
    validate_cmd::execute(descriptor)
}
