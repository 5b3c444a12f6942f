mod recording_resolver;
mod recording_sink;
mod test_filesystem;

pub use recording_resolver::StaticResolver;
pub use recording_sink::RecordingNotificationSink;
pub use test_filesystem::MemoryFilesystem;
