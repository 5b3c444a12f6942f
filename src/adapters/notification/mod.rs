mod channel;
mod console;

pub use channel::ChannelNotificationSink;
pub use console::ConsoleNotificationSink;
