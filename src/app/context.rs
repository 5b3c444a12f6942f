use std::path::{Path, PathBuf};

use crate::domain::{PROJECT_ROOT, PlaceholderBindings};
use crate::ports::ExecutionContext;

/// Execution context for one provisioning pass.
///
/// Exposes the caller's bindings plus the builtin `project_root`, which
/// always reflects the root this context was created with.
#[derive(Debug, Clone)]
pub struct ProvisionContext {
    root: PathBuf,
    bindings: PlaceholderBindings,
}

impl ProvisionContext {
    pub fn new(root: PathBuf, bindings: PlaceholderBindings) -> Self {
        let mut all = bindings;
        all.insert(PROJECT_ROOT, root.display().to_string());
        Self { root, bindings: all }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl ExecutionContext for ProvisionContext {
    fn placeholder_bindings(&self) -> &PlaceholderBindings {
        &self.bindings
    }
}
