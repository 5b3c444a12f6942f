use std::io;

use thiserror::Error;

/// Library-wide error type for provisio operations.
///
/// Instruction processing never surfaces these; they come from loading
/// configuration and descriptors, and from the command layer.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// Explicitly requested config file does not exist.
    #[error("Config file not found: {0}")]
    ConfigMissing(String),

    /// Instruction descriptor could not be read.
    #[error("Instruction descriptor not found: {0}")]
    DescriptorMissing(String),

    /// Instruction descriptor is not valid YAML for an instruction set.
    #[error("Failed to parse instruction descriptor {path}: {details}")]
    DescriptorParse { path: String, details: String },

    /// A `KEY=VALUE` placeholder binding was malformed.
    #[error("Invalid placeholder binding '{0}': expected KEY=VALUE")]
    InvalidBinding(String),

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }

    /// Provide an `io::ErrorKind`-like view for callers expecting legacy behavior.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            AppError::Io(err) => err.kind(),
            AppError::Configuration(_)
            | AppError::DescriptorParse { .. }
            | AppError::InvalidBinding(_)
            | AppError::TomlParse(_) => io::ErrorKind::InvalidInput,
            AppError::ConfigMissing(_) | AppError::DescriptorMissing(_) => io::ErrorKind::NotFound,
        }
    }
}
