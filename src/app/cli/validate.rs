//! Validate command implementation.

use std::path::PathBuf;

use crate::domain::AppError;

pub fn run_validate(descriptor: PathBuf) -> Result<i32, AppError> {
    let outcome = crate::validate(&descriptor)?;

    for invalid in &outcome.invalid {
        eprintln!("[ERROR] files[{}]: {}", invalid.index, invalid.reason);
    }
    if outcome.invalid.is_empty() {
        println!("✅ {} instruction(s) valid", outcome.total);
    } else {
        eprintln!("Check failed: {} of {} instruction(s) invalid.", outcome.invalid.len(), outcome.total);
    }

    Ok(outcome.exit_code())
}
