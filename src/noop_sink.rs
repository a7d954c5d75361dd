use crate::record::Kvs;
use crate::sink::EventSink;
use crate::status::CompletionStatus;
use std::error::Error;

/// A sink that simply drops all events.
///
/// Useful for measuring the overhead of instrumentation without any
/// I/O, and for tests that don't care about output.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopSink;

impl EventSink for NoopSink {
    fn emit_event(&self, _job: &str, _event: &str, _kvs: Option<&Kvs>) {}

    fn emit_event_err(&self, _job: &str, _event: &str, _err: &dyn Error, _kvs: Option<&Kvs>) {}

    fn emit_timing(&self, _job: &str, _event: &str, _nanos: u64, _kvs: Option<&Kvs>) {}

    fn emit_complete(&self, _job: &str, _status: CompletionStatus, _nanos: u64, _kvs: Option<&Kvs>) {}
}
