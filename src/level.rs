use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Severity attached to an event or configured as a sink threshold.
///
/// Variants are declared in ascending order, so the derived `Ord`
/// gives `Trace < Debug < Info < Error`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    #[default]
    Trace,
    Debug,
    Info,
    Error,
}

impl LogLevel {
    /// Every level, least severe first.
    pub const ALL: [LogLevel; 4] = [LogLevel::Trace, LogLevel::Debug, LogLevel::Info, LogLevel::Error];

    /// Canonical lowercase text, as written into `level` kvs.
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Error => "error",
        }
    }

    /// Case-insensitive lookup of the canonical text.
    ///
    /// Returns `None` for anything that is not one of the four level
    /// names, including the empty string.
    pub fn parse(text: &str) -> Option<LogLevel> {
        let word = text.trim();
        LogLevel::ALL
            .into_iter()
            .find(|level| level.as_str().eq_ignore_ascii_case(word))
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LogLevel {
    type Err = ParseLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LogLevel::parse(s).ok_or_else(|| ParseLevelError { input: s.to_string() })
    }
}

/// Error returned when text does not name a [`LogLevel`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("no log level found for {input:?}")]
pub struct ParseLevelError {
    pub input: String,
}
