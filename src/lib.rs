pub mod level;
pub mod status;
pub mod record;
pub mod format;
pub mod stream;
pub mod sink;
pub mod writer_sink;

pub mod config;
pub mod noop_sink;

pub use config::WriterSinkConfig;
pub use level::{LogLevel, ParseLevelError};
pub use noop_sink::NoopSink;
pub use record::Kvs;
pub use sink::EventSink;
pub use status::{CompletionStatus, ParseStatusError};
pub use stream::ByteStream;
pub use writer_sink::WriterSink;
