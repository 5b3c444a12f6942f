//! Apply command implementation.

use std::path::PathBuf;

use crate::ApplyOptions;
use crate::domain::AppError;

pub fn run_apply(
    descriptor: PathBuf,
    root: Option<PathBuf>,
    config: Option<PathBuf>,
    bindings: Vec<String>,
) -> Result<i32, AppError> {
    let root = match root {
        Some(root) => root,
        None => std::env::current_dir()?,
    };
    let options = ApplyOptions { config, bindings };
    let outcome = crate::apply_at(root, &descriptor, &options)?;

    let summary = format!(
        "{} instruction(s): {} succeeded, {} skipped, {} failed",
        outcome.results.len(),
        outcome.succeeded(),
        outcome.skipped(),
        outcome.failed()
    );
    if outcome.failed() > 0 {
        eprintln!("Apply failed: {}.", summary);
    } else {
        println!("Applied {}.", summary);
    }

    Ok(outcome.exit_code())
}
