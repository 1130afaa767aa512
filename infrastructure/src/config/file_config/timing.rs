//! Timing configuration from TOML (`[timing]` section)

use serde::{Deserialize, Serialize};
use stakeholder_application::TimingConfig;
use stakeholder_domain::{ConfigIssue, ConfigIssueCode, Severity};
use std::time::Duration;

/// Raw timing configuration from TOML
///
/// # Example
///
/// ```toml
/// [timing]
/// min_pause_ms = 100
/// max_pause_ms = 500
/// progress_tick_ms = 20
/// boot_sequence = true
/// duration_secs = 0      # 0 = run until interrupted
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileTimingConfig {
    pub min_pause_ms: u64,
    pub max_pause_ms: u64,
    pub progress_tick_ms: u64,
    pub boot_sequence: bool,
    pub duration_secs: u64,
}

impl Default for FileTimingConfig {
    fn default() -> Self {
        Self {
            min_pause_ms: 100,
            max_pause_ms: 500,
            progress_tick_ms: 20,
            boot_sequence: true,
            duration_secs: 0,
        }
    }
}

impl FileTimingConfig {
    /// Convert to application timing. An inverted pause range is an error.
    pub fn to_timing_config(&self) -> (TimingConfig, Vec<ConfigIssue>) {
        let mut issues = Vec::new();
        if self.min_pause_ms > self.max_pause_ms {
            issues.push(ConfigIssue {
                severity: Severity::Error,
                code: ConfigIssueCode::InvertedPauseRange {
                    min_ms: self.min_pause_ms,
                    max_ms: self.max_pause_ms,
                },
                message: format!(
                    "timing: min_pause_ms ({}) is greater than max_pause_ms ({})",
                    self.min_pause_ms, self.max_pause_ms
                ),
            });
        }

        let timing = TimingConfig::default()
            .with_pause_range(
                Duration::from_millis(self.min_pause_ms),
                Duration::from_millis(self.max_pause_ms),
            )
            .with_progress_tick(Duration::from_millis(self.progress_tick_ms))
            .with_boot_sequence(self.boot_sequence);

        (timing, issues)
    }

    /// Session duration; `None` when unlimited
    pub fn duration(&self) -> Option<Duration> {
        (self.duration_secs > 0).then(|| Duration::from_secs(self.duration_secs))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_application_default() {
        let (timing, issues) = FileTimingConfig::default().to_timing_config();
        assert!(issues.is_empty());
        assert_eq!(timing, TimingConfig::default());
    }

    #[test]
    fn test_inverted_range_is_error() {
        let file = FileTimingConfig {
            min_pause_ms: 900,
            max_pause_ms: 100,
            ..Default::default()
        };
        let (_, issues) = file.to_timing_config();
        assert_eq!(issues.len(), 1);
        assert!(issues[0].is_error());
    }

    #[test]
    fn test_zero_duration_is_unlimited() {
        assert!(FileTimingConfig::default().duration().is_none());
        let file = FileTimingConfig {
            duration_secs: 30,
            ..Default::default()
        };
        assert_eq!(file.duration(), Some(Duration::from_secs(30)));
    }
}
