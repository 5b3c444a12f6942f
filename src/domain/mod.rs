pub mod configuration;
pub mod descriptor;
pub mod error;
pub mod instruction;
pub mod placeholders;

pub use configuration::{MessageTemplates, ProvisionConfig};
pub use descriptor::InstructionSet;
pub use error::AppError;
pub use instruction::{
    FileAction, FileInstruction, InstructionError, InstructionEvent, InstructionStatus, Notification,
    ResolvedFileInstruction,
};
pub use placeholders::{PROJECT_ROOT, PlaceholderBindings};
