//! File instruction model: descriptor, parsed action, outcome and events.

mod action;
mod error;
mod event;
mod file;
mod status;

pub use action::FileAction;
pub use error::InstructionError;
pub use event::{InstructionEvent, Notification};
pub use file::{FileInstruction, ResolvedFileInstruction};
pub use status::InstructionStatus;
