use crate::config::WriterSinkConfig;
use crate::format::format_line;
use crate::level::LogLevel;
use crate::record::{Kvs, LogRecord, RecordKind, LEVEL_KEY};
use crate::sink::EventSink;
use crate::status::CompletionStatus;
use crate::stream::ByteStream;
use std::error::Error;
use std::sync::atomic::{AtomicU64, Ordering};

/// [`EventSink`] that writes one human-readable line per event to a
/// [`ByteStream`].
///
/// Log to stdout:
/// ```
/// use writer_log_sink::{LogLevel, WriterSink};
///
/// let sink = WriterSink::new(std::io::stdout(), LogLevel::Info);
/// ```
///
/// Log to a file shared with other writers:
/// ```no_run
/// use std::fs::OpenOptions;
/// use writer_log_sink::{LogLevel, WriterSink};
///
/// let file = OpenOptions::new().create(true).append(true).open("jobs.log")?;
/// let sink = WriterSink::new(file, LogLevel::Info);
/// # Ok::<(), std::io::Error>(())
/// ```
///
/// Events whose kvs carry a `level` below the configured threshold are
/// dropped before anything is rendered. Write failures are counted and
/// reported through `tracing`, never returned.
pub struct WriterSink<S> {
    stream: S,
    level: LogLevel,
    /// Lines the stream refused.
    write_failures: AtomicU64,
}

impl<S: ByteStream> WriterSink<S> {
    pub fn new(stream: S, level: LogLevel) -> Self {
        Self {
            stream,
            level,
            write_failures: AtomicU64::new(0),
        }
    }

    pub fn with_config(stream: S, config: WriterSinkConfig) -> Self {
        Self::new(stream, config.level)
    }

    /// Configured minimum severity.
    pub fn level(&self) -> LogLevel {
        self.level
    }

    pub fn stream(&self) -> &S {
        &self.stream
    }

    pub fn into_inner(self) -> S {
        self.stream
    }

    /// Number of lines lost because the stream returned an error.
    pub fn write_failures(&self) -> u64 {
        self.write_failures.load(Ordering::Relaxed)
    }

    /// Decide whether an event with these kvs is written.
    ///
    /// Untagged events, and events whose `level` does not parse, are
    /// always written. A parseable `level` is written iff it is at least
    /// the configured threshold.
    pub fn should_log(&self, kvs: Option<&Kvs>) -> bool {
        should_log(self.level, kvs)
    }

    fn write(&self, record: LogRecord<'_>) {
        let line = format_line(&record);
        if let Err(e) = self.stream.write_line(line.as_bytes()) {
            self.write_failures.fetch_add(1, Ordering::Relaxed);
            tracing::warn!(job = record.job, error = %e, "writer sink failed to write log line");
        }
    }
}

/// Level filter shared by every emission.
pub fn should_log(threshold: LogLevel, kvs: Option<&Kvs>) -> bool {
    let Some(text) = kvs.and_then(|kvs| kvs.get(LEVEL_KEY)) else {
        return true;
    };

    match LogLevel::parse(text) {
        Some(level) => level >= threshold,
        // Unknown levels are kept rather than silently lost.
        None => true,
    }
}

impl<S: ByteStream> EventSink for WriterSink<S> {
    fn emit_event(&self, job: &str, event: &str, kvs: Option<&Kvs>) {
        if !self.should_log(kvs) {
            tracing::trace!(job, event, "event below writer sink level");
            return;
        }
        self.write(LogRecord::now(job, RecordKind::Event { event }, kvs));
    }

    fn emit_event_err(&self, job: &str, event: &str, err: &dyn Error, kvs: Option<&Kvs>) {
        if !self.should_log(kvs) {
            tracing::trace!(job, event, "event below writer sink level");
            return;
        }
        self.write(LogRecord::now(job, RecordKind::EventErr { event, err }, kvs));
    }

    fn emit_timing(&self, job: &str, event: &str, nanos: u64, kvs: Option<&Kvs>) {
        if !self.should_log(kvs) {
            tracing::trace!(job, event, "timing below writer sink level");
            return;
        }
        self.write(LogRecord::now(job, RecordKind::Timing { event, nanos }, kvs));
    }

    fn emit_complete(&self, job: &str, status: CompletionStatus, nanos: u64, kvs: Option<&Kvs>) {
        if !self.should_log(kvs) {
            tracing::trace!(job, status = status.as_str(), "completion below writer sink level");
            return;
        }
        self.write(LogRecord::now(job, RecordKind::Complete { status, nanos }, kvs));
    }
}
