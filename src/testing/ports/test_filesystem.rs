//! Test double for `InstructionFilesystem`.

use std::collections::{BTreeMap, HashSet};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use crate::ports::InstructionFilesystem;

/// In-memory implementation of `InstructionFilesystem` for unit tests.
///
/// Paths registered with [`MemoryFilesystem::fail_on`] return
/// `PermissionDenied` for any mutating operation.
#[derive(Clone, Debug, Default)]
pub struct MemoryFilesystem {
    files: Arc<Mutex<BTreeMap<PathBuf, Vec<u8>>>>,
    failing: Arc<Mutex<HashSet<PathBuf>>>,
}

impl MemoryFilesystem {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a file into the in-memory store.
    pub fn add(&self, path: &str, content: &[u8]) {
        self.files.lock().unwrap().insert(PathBuf::from(path), content.to_vec());
    }

    pub fn read(&self, path: &str) -> Option<Vec<u8>> {
        self.files.lock().unwrap().get(Path::new(path)).cloned()
    }

    pub fn contains(&self, path: &str) -> bool {
        self.files.lock().unwrap().contains_key(Path::new(path))
    }

    /// Snapshot of every stored path.
    pub fn paths(&self) -> Vec<PathBuf> {
        self.files.lock().unwrap().keys().cloned().collect()
    }

    pub fn fail_on(&self, path: &str) {
        self.failing.lock().unwrap().insert(PathBuf::from(path));
    }

    fn check_writable(&self, path: &Path) -> io::Result<()> {
        if self.failing.lock().unwrap().contains(path) {
            return Err(io::Error::new(io::ErrorKind::PermissionDenied, "mock permission denied"));
        }
        Ok(())
    }
}

impl InstructionFilesystem for MemoryFilesystem {
    fn is_file(&self, path: &Path) -> bool {
        self.files.lock().unwrap().contains_key(path)
    }

    fn copy_file(&self, source: &Path, target: &Path) -> io::Result<u64> {
        self.check_writable(target)?;
        let mut files = self.files.lock().unwrap();
        let content = files
            .get(source)
            .cloned()
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "mock file not found"))?;
        let len = content.len() as u64;
        files.insert(target.to_path_buf(), content);
        Ok(len)
    }

    fn remove_if_exists(&self, path: &Path) -> io::Result<bool> {
        self.check_writable(path)?;
        Ok(self.files.lock().unwrap().remove(path).is_some())
    }
}
