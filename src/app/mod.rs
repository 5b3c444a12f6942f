pub mod cli;
pub mod commands;
mod context;
mod executor;

pub use context::ProvisionContext;
pub use executor::InstructionExecutor;
