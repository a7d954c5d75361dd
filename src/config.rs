use crate::level::LogLevel;
use serde::Deserialize;

/// Construction options for [`WriterSink`](crate::writer_sink::WriterSink).
///
/// **Fields**
/// - `level`: minimum severity kept. Only events that carry a parseable
///   `level` kv are compared against it; untagged events are always
///   written.
///
/// Deserializable so a host can embed it in its own configuration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct WriterSinkConfig {
    pub level: LogLevel,
}

impl WriterSinkConfig {
    pub fn new(level: LogLevel) -> Self {
        Self { level }
    }
}
