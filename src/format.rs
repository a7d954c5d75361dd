//! Rendering of [`LogRecord`]s into single human-readable lines.
//!
//! ```text
//! [<timestamp>]: job:<job> event:<event>[ err:<err>][ time:<duration>][ kvs:[k1:v1 k2:v2]]
//! [<timestamp>]: job:<job> status:<status> time:<duration>[ kvs:[k1:v1 k2:v2]]
//! ```
//!
//! Values are copied verbatim, without quoting or escaping.

use crate::record::{Kvs, LogRecord, RecordKind};
use chrono::{DateTime, SecondsFormat, Utc};
use std::fmt::Write;

/// RFC 3339 in UTC with nanosecond precision, e.g. `2024-03-01T09:30:00.123456789Z`.
pub fn timestamp(at: &DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Nanos, true)
}

/// Render an elapsed time as `"<value> <unit>"`.
///
/// Above 2,000,000 ns the value is whole milliseconds, above 2,000 ns
/// whole microseconds, otherwise nanoseconds. Division truncates.
pub fn format_nanos(nanos: u64) -> String {
    let mut out = String::new();
    write_nanos(&mut out, nanos);
    out
}

fn write_nanos(out: &mut String, nanos: u64) {
    // Writing into a String cannot fail.
    let _ = match nanos {
        n if n > 2_000_000 => write!(out, "{} ms", n / 1_000_000),
        n if n > 2_000 => write!(out, "{} μs", n / 1_000),
        n => write!(out, "{} ns", n),
    };
}

/// Render kvs as `key:value` pairs in ascending key order, separated by
/// single spaces.
pub fn format_kvs(kvs: &Kvs) -> String {
    let mut out = String::new();
    write_kvs(&mut out, kvs);
    out
}

fn write_kvs(out: &mut String, kvs: &Kvs) {
    let mut entries: Vec<(&String, &String)> = kvs.iter().collect();
    entries.sort_unstable_by(|a, b| a.0.cmp(b.0));

    for (i, (key, value)) in entries.into_iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        out.push_str(key);
        out.push(':');
        out.push_str(value);
    }
}

/// Render a complete line, including the trailing newline.
pub fn format_line(record: &LogRecord<'_>) -> String {
    let mut out = String::with_capacity(128);

    out.push('[');
    out.push_str(&timestamp(&record.timestamp));
    out.push_str("]: job:");
    out.push_str(record.job);

    match record.kind {
        RecordKind::Event { event } => {
            out.push_str(" event:");
            out.push_str(event);
        }
        RecordKind::EventErr { event, err } => {
            out.push_str(" event:");
            out.push_str(event);
            out.push_str(" err:");
            let _ = write!(out, "{}", err);
        }
        RecordKind::Timing { event, nanos } => {
            out.push_str(" event:");
            out.push_str(event);
            out.push_str(" time:");
            write_nanos(&mut out, nanos);
        }
        RecordKind::Complete { status, nanos } => {
            out.push_str(" status:");
            out.push_str(status.as_str());
            out.push_str(" time:");
            write_nanos(&mut out, nanos);
        }
    }

    if let Some(kvs) = record.kvs {
        out.push_str(" kvs:[");
        write_kvs(&mut out, kvs);
        out.push(']');
    }

    out.push('\n');
    out
}
