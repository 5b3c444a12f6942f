mod execution_context;
mod instruction_filesystem;
mod notification_sink;
mod placeholder_resolver;

pub use execution_context::ExecutionContext;
pub use instruction_filesystem::InstructionFilesystem;
pub use notification_sink::NotificationSink;
pub use placeholder_resolver::PlaceholderResolver;
