//! `InstructionFilesystem` implementation for `LocalFilesystem`.

use std::fs;
use std::io;
use std::path::Path;

use crate::ports::InstructionFilesystem;

use super::LocalFilesystem;

impl InstructionFilesystem for LocalFilesystem {
    fn is_file(&self, path: &Path) -> bool {
        self.resolve_path(path).is_file()
    }

    fn copy_file(&self, source: &Path, target: &Path) -> io::Result<u64> {
        let source = self.resolve_path(source);
        let target = self.resolve_path(target);
        // fs::copy onto itself truncates the file before reading it.
        if let Ok(existing) = fs::canonicalize(&target)
            && fs::canonicalize(&source)? == existing
        {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("source and target are the same file: {}", source.display()),
            ));
        }
        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::copy(source, target)
    }

    fn remove_if_exists(&self, path: &Path) -> io::Result<bool> {
        let full_path = self.resolve_path(path);
        let metadata = match fs::symlink_metadata(&full_path) {
            Ok(metadata) => metadata,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(false),
            Err(err) => return Err(err),
        };
        // Only empty directories go; anything with contents is an error.
        if metadata.is_dir() {
            fs::remove_dir(full_path)?;
        } else {
            fs::remove_file(full_path)?;
        }
        Ok(true)
    }
}
