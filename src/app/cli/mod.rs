//! CLI Adapter.

mod apply;
mod validate;

use std::path::PathBuf;

use crate::domain::AppError;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "provisio")]
#[command(version)]
#[command(
    about = "Apply declarative file instructions with placeholder resolution",
    long_about = None
)]
struct Cli {
    /// Log instruction processing at debug level
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Process every file instruction in a descriptor
    #[clap(visible_alias = "a")]
    Apply {
        /// YAML descriptor listing file instructions
        descriptor: PathBuf,
        /// Directory relative paths resolve against (defaults to the current directory)
        #[arg(short, long)]
        root: Option<PathBuf>,
        /// Config file (defaults to <root>/provisio.toml when present)
        #[arg(short, long)]
        config: Option<PathBuf>,
        /// Placeholder binding, may be repeated
        #[arg(short, long = "set", value_name = "KEY=VALUE")]
        set: Vec<String>,
    },
    /// Check a descriptor without applying it
    #[clap(visible_alias = "v")]
    Validate {
        /// YAML descriptor listing file instructions
        descriptor: PathBuf,
    },
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result: Result<i32, AppError> = match cli.command {
        Commands::Apply { descriptor, root, config, set } => {
            apply::run_apply(descriptor, root, config, set)
        }
        Commands::Validate { descriptor } => validate::run_validate(descriptor),
    };

    match result {
        Ok(exit_code) => {
            if exit_code != 0 {
                std::process::exit(exit_code);
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

/// Install the stderr subscriber. `RUST_LOG` takes precedence over `--verbose`.
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
