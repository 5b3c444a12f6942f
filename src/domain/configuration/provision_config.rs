//! Provisioning configuration domain models.

use serde::{Deserialize, Serialize};

use crate::domain::instruction::FileAction;
use crate::domain::AppError;

/// Configuration loaded from `provisio.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProvisionConfig {
    /// Default instruction messages.
    #[serde(default)]
    pub messages: MessageTemplates,
}

impl ProvisionConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        self.messages.validate()
    }
}

/// Message templates used when an instruction does not carry its own message.
///
/// Templates are resolved like any other message, so they may reference
/// context bindings as well as `source` and `target`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MessageTemplates {
    #[serde(default = "default_copy_message")]
    pub copy: String,
    #[serde(default = "default_delete_message")]
    pub delete: String,
}

impl Default for MessageTemplates {
    fn default() -> Self {
        Self { copy: default_copy_message(), delete: default_delete_message() }
    }
}

impl MessageTemplates {
    /// Default message for an action, if it has one.
    pub fn for_action(&self, action: FileAction) -> Option<&str> {
        match action {
            FileAction::Copy => Some(&self.copy),
            FileAction::Delete => Some(&self.delete),
            FileAction::Overwrite => None,
        }
    }

    fn validate(&self) -> Result<(), AppError> {
        if self.copy.trim().is_empty() {
            return Err(AppError::config_error("messages.copy must not be empty"));
        }
        if self.delete.trim().is_empty() {
            return Err(AppError::config_error("messages.delete must not be empty"));
        }
        Ok(())
    }
}

fn default_copy_message() -> String {
    "Copied {{ source }} to {{ target }}".to_string()
}

fn default_delete_message() -> String {
    "Deleted {{ target }}".to_string()
}
