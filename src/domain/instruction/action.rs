use std::fmt;

/// The filesystem operation a file instruction performs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FileAction {
    /// Copy `source` to `target`, replacing any existing file.
    Copy,
    /// Remove `target` if it exists.
    Delete,
    /// Accepted in descriptors but has no file operation attached.
    Overwrite,
}

impl FileAction {
    /// All accepted actions.
    pub const ALL: [FileAction; 3] = [FileAction::Copy, FileAction::Delete, FileAction::Overwrite];

    /// Descriptor spelling of this action.
    pub fn as_str(&self) -> &'static str {
        match self {
            FileAction::Copy => "copy",
            FileAction::Delete => "delete",
            FileAction::Overwrite => "overwrite",
        }
    }

    /// Parse an action from its descriptor spelling. Matching is exact.
    pub fn from_descriptor(value: &str) -> Option<FileAction> {
        Self::ALL.into_iter().find(|action| action.as_str() == value)
    }
}

impl fmt::Display for FileAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
