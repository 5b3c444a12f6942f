//! YAML instruction descriptor document.

use serde::{Deserialize, Serialize};

use super::instruction::FileInstruction;
use super::placeholders::PlaceholderBindings;

/// A descriptor document: optional bindings plus file instructions in
/// document order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct InstructionSet {
    #[serde(default, skip_serializing_if = "PlaceholderBindings::is_empty")]
    pub placeholders: PlaceholderBindings,
    #[serde(default)]
    pub files: Vec<FileInstruction>,
}

impl InstructionSet {
    pub fn parse_yaml(content: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(content)
    }
}
