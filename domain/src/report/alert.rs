//! Alert value object

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertLevel {
    Notice,
    Warning,
    Critical,
}

impl AlertLevel {
    /// Prefix printed before the alert message
    pub fn label(&self) -> &'static str {
        match self {
            AlertLevel::Notice => "Notice",
            AlertLevel::Warning => "Warning",
            AlertLevel::Critical => "Alert",
        }
    }
}

/// A simulated alert interleaved between activities
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Alert {
    pub level: AlertLevel,
    pub message: String,
}

impl Alert {
    pub fn new(level: AlertLevel, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
        }
    }
}

impl fmt::Display for Alert {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.level.label(), self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_prefixes_label() {
        let alert = Alert::new(AlertLevel::Critical, "CPU utilization above threshold");
        assert_eq!(alert.to_string(), "Alert: CPU utilization above threshold");
    }

    #[test]
    fn test_level_ordering() {
        assert!(AlertLevel::Notice < AlertLevel::Warning);
        assert!(AlertLevel::Warning < AlertLevel::Critical);
    }
}
