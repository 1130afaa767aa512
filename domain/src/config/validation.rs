//! Structured configuration issues.
//!
//! Config loaders report problems as [`ConfigIssue`]s instead of failing on
//! the first one, so every problem in a file can be shown at once.

/// Severity level of a configuration issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Fatal: the configuration cannot work at all.
    Error,
    /// Non-fatal: a default is used instead.
    Warning,
}

/// Identifies a specific configuration issue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigIssueCode {
    /// A string field did not parse into its enum.
    InvalidEnumValue {
        field: String,
        value: String,
        valid_values: Vec<String>,
    },
    /// `min_pause_ms` is larger than `max_pause_ms`.
    InvertedPauseRange { min_ms: u64, max_ms: u64 },
    /// A field that must be non-empty was blank.
    EmptyValue { field: String },
}

/// A detected issue in the configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigIssue {
    pub severity: Severity,
    pub code: ConfigIssueCode,
    pub message: String,
}

impl ConfigIssue {
    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_error() {
        let issue = ConfigIssue {
            severity: Severity::Error,
            code: ConfigIssueCode::InvertedPauseRange {
                min_ms: 500,
                max_ms: 100,
            },
            message: "timing: min_pause_ms > max_pause_ms".to_string(),
        };
        assert!(issue.is_error());

        let warning = ConfigIssue {
            severity: Severity::Warning,
            code: ConfigIssueCode::EmptyValue {
                field: "session.project".to_string(),
            },
            message: "session.project is empty".to_string(),
        };
        assert!(!warning.is_error());
    }
}
