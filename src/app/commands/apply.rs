//! Apply every file instruction in a descriptor, in document order.

use std::path::{Path, PathBuf};

use crate::adapters::{LocalFilesystem, MinijinjaPlaceholderResolver};
use crate::app::{InstructionExecutor, ProvisionContext};
use crate::domain::configuration::{load_config, load_instruction_set};
use crate::domain::{AppError, InstructionStatus, PlaceholderBindings};
use crate::ports::NotificationSink;

#[derive(Debug, Clone, Default)]
pub struct ApplyOptions {
    /// Explicit config file; `<root>/provisio.toml` is used when absent.
    pub config: Option<PathBuf>,
    /// `KEY=VALUE` bindings layered over the descriptor's placeholders.
    pub bindings: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstructionResult {
    /// Position in the descriptor's `files` list.
    pub index: usize,
    /// Target as written in the descriptor, before resolution.
    pub target: String,
    pub status: InstructionStatus,
}

#[derive(Debug, Clone, Default)]
pub struct ApplyOutcome {
    pub results: Vec<InstructionResult>,
}

impl ApplyOutcome {
    pub fn count(&self, status: InstructionStatus) -> usize {
        self.results.iter().filter(|result| result.status == status).count()
    }

    pub fn succeeded(&self) -> usize {
        self.count(InstructionStatus::Success)
    }

    pub fn skipped(&self) -> usize {
        self.count(InstructionStatus::Skipped)
    }

    pub fn failed(&self) -> usize {
        self.count(InstructionStatus::Failed)
    }

    pub fn exit_code(&self) -> i32 {
        if self.failed() > 0 { 1 } else { 0 }
    }
}

pub fn execute<S: NotificationSink>(
    root: &Path,
    descriptor: &Path,
    options: &ApplyOptions,
    sink: S,
) -> Result<ApplyOutcome, AppError> {
    let config = load_config(root, options.config.as_deref())?;
    let set = load_instruction_set(descriptor)?;

    let mut bindings = set.placeholders;
    bindings.extend(PlaceholderBindings::from_pairs(&options.bindings)?);
    let context = ProvisionContext::new(root.to_path_buf(), bindings);

    let executor = InstructionExecutor::new(
        MinijinjaPlaceholderResolver::new(),
        sink,
        LocalFilesystem::new(root.to_path_buf()),
        config.messages,
    );

    tracing::info!(
        descriptor = %descriptor.display(),
        instructions = set.files.len(),
        "applying file instructions"
    );

    let results = set
        .files
        .iter()
        .enumerate()
        .map(|(index, file)| InstructionResult {
            index,
            target: file.target.clone(),
            status: executor.process(file, &context),
        })
        .collect();

    Ok(ApplyOutcome { results })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::RecordingNotificationSink;
    use std::fs;
    use tempfile::TempDir;

    fn write_descriptor(root: &Path, content: &str) -> PathBuf {
        let path = root.join("instructions.yml");
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn applies_instructions_in_order_relative_to_root() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("seed.txt"), "seed").unwrap();
        let descriptor = write_descriptor(
            dir.path(),
            r#"
placeholders:
  name: demo
files:
  - action: copy
    source: seed.txt
    target: out/{{ name }}.txt
  - action: delete
    target: seed.txt
  - action: delete
    target: seed.txt
"#,
        );
        let sink = RecordingNotificationSink::new();

        let outcome =
            execute(dir.path(), &descriptor, &ApplyOptions::default(), sink.clone()).unwrap();

        let statuses: Vec<_> = outcome.results.iter().map(|r| r.status).collect();
        assert_eq!(
            statuses,
            vec![InstructionStatus::Success, InstructionStatus::Success, InstructionStatus::Skipped]
        );
        assert_eq!(fs::read_to_string(dir.path().join("out/demo.txt")).unwrap(), "seed");
        assert!(!dir.path().join("seed.txt").exists());
        assert_eq!(sink.len(), 3);
        assert_eq!(outcome.exit_code(), 0);
    }

    #[test]
    fn cli_bindings_override_descriptor_placeholders() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("b.txt"), "b").unwrap();
        let descriptor = write_descriptor(
            dir.path(),
            "placeholders:\n  name: a\nfiles:\n  - action: delete\n    target: \"{{ name }}.txt\"\n",
        );
        let options = ApplyOptions { bindings: vec!["name=b".into()], ..Default::default() };

        let outcome =
            execute(dir.path(), &descriptor, &options, RecordingNotificationSink::new()).unwrap();

        assert_eq!(outcome.succeeded(), 1);
        assert!(!dir.path().join("b.txt").exists());
    }

    #[test]
    fn project_root_binding_is_available() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("x.txt"), "x").unwrap();
        let descriptor = write_descriptor(
            dir.path(),
            "files:\n  - action: delete\n    target: \"{{ project_root }}/x.txt\"\n",
        );

        let outcome = execute(
            dir.path(),
            &descriptor,
            &ApplyOptions::default(),
            RecordingNotificationSink::new(),
        )
        .unwrap();

        assert_eq!(outcome.succeeded(), 1);
    }

    #[test]
    fn failures_do_not_stop_later_instructions() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("x.txt"), "x").unwrap();
        let descriptor = write_descriptor(
            dir.path(),
            "files:\n  - action: move\n    target: x.txt\n  - action: delete\n    target: x.txt\n",
        );
        let sink = RecordingNotificationSink::new();

        let outcome =
            execute(dir.path(), &descriptor, &ApplyOptions::default(), sink.clone()).unwrap();

        assert_eq!(outcome.failed(), 1);
        assert_eq!(outcome.succeeded(), 1);
        assert_eq!(outcome.exit_code(), 1);
        assert_eq!(sink.errors().len(), 1);
        assert_eq!(sink.completions().len(), 1);
    }

    #[test]
    fn malformed_binding_is_an_error() {
        let dir = TempDir::new().unwrap();
        let descriptor = write_descriptor(dir.path(), "files: []\n");
        let options = ApplyOptions { bindings: vec!["oops".into()], ..Default::default() };

        let err = execute(dir.path(), &descriptor, &options, RecordingNotificationSink::new())
            .unwrap_err();

        assert!(matches!(err, AppError::InvalidBinding(_)));
    }
}
