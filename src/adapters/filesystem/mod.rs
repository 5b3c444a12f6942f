//! Filesystem adapter for the instruction filesystem port.

mod local_filesystem;

use std::path::{Path, PathBuf};

/// `std::fs`-backed filesystem rooted at a provisioning directory.
///
/// Relative instruction paths are resolved against the root; absolute
/// paths are used as given.
#[derive(Debug, Clone)]
pub struct LocalFilesystem {
    root: PathBuf,
}

impl LocalFilesystem {
    /// Create a filesystem rooted at the given directory.
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub(crate) fn resolve_path(&self, path: &Path) -> PathBuf {
        self.root.join(path)
    }
}
