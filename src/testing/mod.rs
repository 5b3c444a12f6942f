pub mod ports;

#[allow(unused_imports)]
pub use ports::MemoryFilesystem;
#[allow(unused_imports)]
pub use ports::RecordingNotificationSink;
#[allow(unused_imports)]
pub use ports::StaticResolver;
