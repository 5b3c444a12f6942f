//! Filesystem operations needed by file instructions.

use std::io;
use std::path::Path;

/// Port for the single-file operations instructions perform.
pub trait InstructionFilesystem {
    /// Whether `path` refers to an existing regular file.
    fn is_file(&self, path: &Path) -> bool;

    /// Copy `source` to `target` byte for byte, creating parent directories
    /// and replacing an existing target. Returns the number of bytes copied.
    fn copy_file(&self, source: &Path, target: &Path) -> io::Result<u64>;

    /// Remove `path` if it exists. Returns whether anything was removed.
    fn remove_if_exists(&self, path: &Path) -> io::Result<bool>;
}
