use crate::status::CompletionStatus;
use chrono::{DateTime, Utc};
use std::collections::HashMap;

/// Free-form metadata attached to a single emission.
///
/// The reserved `level` key, when it parses as a [`LogLevel`](crate::level::LogLevel),
/// is compared against the sink threshold before anything is rendered.
pub type Kvs = HashMap<String, String>;

/// Key consulted by the level filter.
pub const LEVEL_KEY: &str = "level";

/// What kind of emission a [`LogRecord`] carries.
#[derive(Debug, Clone, Copy)]
pub enum RecordKind<'a> {
    Event {
        event: &'a str,
    },
    EventErr {
        event: &'a str,
        err: &'a (dyn std::error::Error + 'a),
    },
    Timing {
        event: &'a str,
        nanos: u64,
    },
    Complete {
        status: CompletionStatus,
        nanos: u64,
    },
}

/// One permitted emission, borrowed from the caller's arguments.
#[derive(Debug, Clone, Copy)]
pub struct LogRecord<'a> {
    pub timestamp: DateTime<Utc>,
    pub job: &'a str,
    pub kind: RecordKind<'a>,
    /// `None` suppresses the `kvs:[...]` segment entirely; an empty map
    /// still renders `kvs:[]`.
    pub kvs: Option<&'a Kvs>,
}

impl<'a> LogRecord<'a> {
    /// Stamp a record with the current instant.
    pub fn now(job: &'a str, kind: RecordKind<'a>, kvs: Option<&'a Kvs>) -> Self {
        LogRecord {
            timestamp: Utc::now(),
            job,
            kind,
            kvs,
        }
    }
}
