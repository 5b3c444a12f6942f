//! File instruction execution.
//!
//! `InstructionExecutor::process` runs the pipeline for one descriptor:
//! validate, default the message, resolve placeholders into a local working
//! copy, dispatch on the action, notify the sink once, and return the status.
//! Descriptors are never mutated, so the executor can be shared across
//! threads whenever its collaborators are `Sync`.

use std::path::Path;

use crate::domain::{
    FileAction, FileInstruction, InstructionError, InstructionEvent, InstructionStatus,
    MessageTemplates, PlaceholderBindings, ResolvedFileInstruction,
};
use crate::ports::{ExecutionContext, InstructionFilesystem, NotificationSink, PlaceholderResolver};

/// Executes file instructions with injected collaborators.
pub struct InstructionExecutor<R, S, F> {
    resolver: R,
    sink: S,
    filesystem: F,
    messages: MessageTemplates,
}

impl<R, S, F> InstructionExecutor<R, S, F>
where
    R: PlaceholderResolver,
    S: NotificationSink,
    F: InstructionFilesystem,
{
    pub fn new(resolver: R, sink: S, filesystem: F, messages: MessageTemplates) -> Self {
        Self { resolver, sink, filesystem, messages }
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Process one instruction against a context.
    ///
    /// Never fails: every problem is reported to the sink and surfaces as
    /// `InstructionStatus::Failed`. Exactly one notification is emitted.
    pub fn process<C>(&self, instruction: &FileInstruction, context: &C) -> InstructionStatus
    where
        C: ExecutionContext + ?Sized,
    {
        tracing::debug!(%instruction, "processing file instruction");

        let action = match instruction.validate() {
            Ok(action) => action,
            Err(err) => {
                tracing::error!(error = %err, "rejected file instruction");
                self.sink.report_error(&err.to_string());
                return InstructionStatus::Failed;
            }
        };

        let resolved = self.resolve(instruction, action, context.placeholder_bindings());

        let outcome = match resolved.action {
            FileAction::Copy => self.copy(&resolved),
            FileAction::Delete => self.delete(&resolved),
            FileAction::Overwrite => {
                Err(InstructionError::UnsupportedAction(FileAction::Overwrite))
            }
        };

        let event = match outcome {
            Ok(status) => InstructionEvent::new(resolved, status),
            Err(err) => {
                tracing::error!(error = %err, path = %resolved.target, "file instruction failed");
                InstructionEvent::new(resolved, InstructionStatus::Failed)
                    .with_detail(err.to_string())
            }
        };

        self.sink.report_completion(&event);
        event.status
    }

    /// Build the working copy for one execution.
    ///
    /// The message is defaulted first so defaulted messages are resolved
    /// too. Each field goes through the resolver once; `None` keeps the
    /// field's current value.
    pub fn resolve(
        &self,
        instruction: &FileInstruction,
        action: FileAction,
        bindings: &PlaceholderBindings,
    ) -> ResolvedFileInstruction {
        let message = match instruction.message() {
            "" => self.messages.for_action(action).unwrap_or_default(),
            message => message,
        };

        let target = resolve_field(&self.resolver, &instruction.target, bindings);
        let source = instruction
            .source
            .as_deref()
            .map(|source| resolve_field(&self.resolver, source, bindings));

        let message = if message.is_empty() {
            String::new()
        } else {
            let mut message_bindings = bindings.clone();
            if !message_bindings.contains_key("target") {
                message_bindings.insert("target", target.clone());
            }
            if !message_bindings.contains_key("source") {
                message_bindings.insert("source", source.clone().unwrap_or_default());
            }
            resolve_field(&self.resolver, message, &message_bindings)
        };

        ResolvedFileInstruction {
            action,
            source,
            target,
            override_existing: instruction.override_existing,
            message,
        }
    }

    fn copy(
        &self,
        resolved: &ResolvedFileInstruction,
    ) -> Result<InstructionStatus, InstructionError> {
        let source = match resolved.source.as_deref() {
            Some(source) if !source.is_empty() => source,
            _ => return Err(InstructionError::NoSource),
        };
        if !self.filesystem.is_file(Path::new(source)) {
            return Err(InstructionError::MissingSource(source.to_string()));
        }

        let bytes = self
            .filesystem
            .copy_file(Path::new(source), Path::new(&resolved.target))
            .map_err(|err| InstructionError::io("copying file to", &resolved.target, err))?;

        tracing::debug!(source, path = %resolved.target, bytes, "copied file");
        Ok(InstructionStatus::Success)
    }

    fn delete(
        &self,
        resolved: &ResolvedFileInstruction,
    ) -> Result<InstructionStatus, InstructionError> {
        let removed = self
            .filesystem
            .remove_if_exists(Path::new(&resolved.target))
            .map_err(|err| InstructionError::io("deleting", &resolved.target, err))?;

        if removed {
            tracing::debug!(path = %resolved.target, "deleted file");
            Ok(InstructionStatus::Success)
        } else {
            tracing::debug!(path = %resolved.target, "nothing to delete");
            Ok(InstructionStatus::Skipped)
        }
    }
}

fn resolve_field<R: PlaceholderResolver + ?Sized>(
    resolver: &R,
    value: &str,
    bindings: &PlaceholderBindings,
) -> String {
    resolver.resolve(value, bindings).unwrap_or_else(|| value.to_string())
}
