//! Check a descriptor without touching the filesystem.

use std::path::Path;

use crate::domain::AppError;
use crate::domain::configuration::load_instruction_set;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidInstruction {
    pub index: usize,
    pub reason: String,
}

#[derive(Debug, Clone, Default)]
pub struct ValidateOutcome {
    pub total: usize,
    pub invalid: Vec<InvalidInstruction>,
}

impl ValidateOutcome {
    pub fn exit_code(&self) -> i32 {
        if self.invalid.is_empty() { 0 } else { 1 }
    }
}

pub fn execute(descriptor: &Path) -> Result<ValidateOutcome, AppError> {
    let set = load_instruction_set(descriptor)?;

    let invalid = set
        .files
        .iter()
        .enumerate()
        .filter_map(|(index, file)| {
            file.validate().err().map(|err| InvalidInstruction { index, reason: err.to_string() })
        })
        .collect();

    Ok(ValidateOutcome { total: set.files.len(), invalid })
}
