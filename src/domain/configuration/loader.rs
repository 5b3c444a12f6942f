//! Configuration and descriptor loading.

use std::fs;
use std::io;
use std::path::Path;

use crate::domain::{AppError, InstructionSet, ProvisionConfig};

/// Config file picked up from the provisioning root when none is given.
pub const CONFIG_FILE: &str = "provisio.toml";

/// Load configuration.
///
/// An explicit `path` must exist. Without one, `<root>/provisio.toml` is
/// read when present and defaults are used otherwise.
pub fn load_config(root: &Path, path: Option<&Path>) -> Result<ProvisionConfig, AppError> {
    let (config_path, required) = match path {
        Some(path) => (path.to_path_buf(), true),
        None => (root.join(CONFIG_FILE), false),
    };

    let content = match fs::read_to_string(&config_path) {
        Ok(content) => content,
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            if required {
                return Err(AppError::ConfigMissing(config_path.display().to_string()));
            }
            return Ok(ProvisionConfig::default());
        }
        Err(err) => return Err(err.into()),
    };

    parse_config_content(&content)
}

/// Parse configuration from string content.
pub fn parse_config_content(content: &str) -> Result<ProvisionConfig, AppError> {
    let config: ProvisionConfig = toml::from_str(content)?;
    config.validate()?;
    Ok(config)
}

/// Load an instruction descriptor from a YAML file.
pub fn load_instruction_set(path: &Path) -> Result<InstructionSet, AppError> {
    let content = fs::read_to_string(path).map_err(|err| {
        if err.kind() == io::ErrorKind::NotFound {
            AppError::DescriptorMissing(path.display().to_string())
        } else {
            AppError::Io(err)
        }
    })?;

    InstructionSet::parse_yaml(&content).map_err(|err| AppError::DescriptorParse {
        path: path.display().to_string(),
        details: err.to_string(),
    })
}
