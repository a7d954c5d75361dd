use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Terminal outcome of a job, rendered in completion lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CompletionStatus {
    Success,
    ValidationError,
    Panic,
    Error,
    Junk,
}

impl CompletionStatus {
    pub const ALL: [CompletionStatus; 5] = [
        CompletionStatus::Success,
        CompletionStatus::ValidationError,
        CompletionStatus::Panic,
        CompletionStatus::Error,
        CompletionStatus::Junk,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CompletionStatus::Success => "success",
            CompletionStatus::ValidationError => "validation_error",
            CompletionStatus::Panic => "panic",
            CompletionStatus::Error => "error",
            CompletionStatus::Junk => "junk",
        }
    }
}

impl fmt::Display for CompletionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CompletionStatus {
    type Err = ParseStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CompletionStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| ParseStatusError { input: s.to_string() })
    }
}

/// Error returned when text does not name a [`CompletionStatus`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown completion status {input:?}")]
pub struct ParseStatusError {
    pub input: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn every_status_has_distinct_text() {
        let texts: HashSet<&str> = CompletionStatus::ALL.iter().map(|s| s.as_str()).collect();
        assert_eq!(texts.len(), CompletionStatus::ALL.len());
    }

    #[test]
    fn text_parses_back() {
        for status in CompletionStatus::ALL {
            assert_eq!(status.to_string().parse::<CompletionStatus>(), Ok(status));
        }
        assert!("Success".parse::<CompletionStatus>().is_err());
    }

    #[test]
    fn serde_uses_canonical_text() {
        let json = serde_json::to_string(&CompletionStatus::ValidationError).unwrap();
        assert_eq!(json, "\"validation_error\"");
    }
}
