pub mod filesystem;
pub mod notification;
pub mod template;

pub use filesystem::LocalFilesystem;
pub use notification::{ChannelNotificationSink, ConsoleNotificationSink};
pub use template::MinijinjaPlaceholderResolver;
