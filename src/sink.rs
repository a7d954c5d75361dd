use crate::record::Kvs;
use crate::status::CompletionStatus;
use std::error::Error;

/// Destination for job events raised by instrumented code.
///
/// An event dispatcher fans each emission out to every attached sink.
/// Implementations decide on their own whether an emission is kept;
/// none of the methods report failure back to the caller, so a broken
/// sink can never disrupt the instrumented application.
pub trait EventSink: Send + Sync {
    /// Record that `event` happened while running `job`.
    fn emit_event(&self, job: &str, event: &str, kvs: Option<&Kvs>);

    /// Record that `event` happened while running `job` and failed with `err`.
    fn emit_event_err(&self, job: &str, event: &str, err: &dyn Error, kvs: Option<&Kvs>);

    /// Record that `event` took `nanos` nanoseconds.
    fn emit_timing(&self, job: &str, event: &str, nanos: u64, kvs: Option<&Kvs>);

    /// Record that `job` finished with `status` after `nanos` nanoseconds.
    fn emit_complete(&self, job: &str, status: CompletionStatus, nanos: u64, kvs: Option<&Kvs>);
}
