//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! Enum-valued fields stay strings here and are parsed during validation,
//! so a typo degrades to a warning instead of a load failure.

mod output;
mod session;
mod timing;

pub use output::FileOutputConfig;
pub use session::FileSessionConfig;
pub use timing::FileTimingConfig;

use serde::{Deserialize, Serialize};
use stakeholder_application::TimingConfig;
use stakeholder_domain::{ConfigIssue, SessionConfig};

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// What to simulate
    pub session: FileSessionConfig,
    /// Pauses and pacing
    pub timing: FileTimingConfig,
    /// Terminal output
    pub output: FileOutputConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    ///
    /// Enum parse failures are warnings (the default is used instead).
    /// An inverted pause range is an error.
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();
        issues.extend(self.session.to_session_config().1);
        issues.extend(self.timing.to_timing_config().1);
        issues
    }

    /// Session and timing records with issues dropped
    pub fn resolve(&self) -> (SessionConfig, TimingConfig) {
        (
            self.session.to_session_config().0,
            self.timing.to_timing_config().0,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stakeholder_domain::{Complexity, DevelopmentType, JargonLevel};
    use std::time::Duration;

    #[test]
    fn test_deserialize_full_config() {
        let toml_str = r#"
[session]
dev_type = "security"
jargon = "extreme"
complexity = "low"
alerts = true
team_activity = true
project = "red-team-ops"
framework = "metasploit"

[timing]
min_pause_ms = 50
max_pause_ms = 250
boot_sequence = false
duration_secs = 120

[output]
color = false
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert!(config.validate().is_empty());

        let (session, timing) = config.resolve();
        assert_eq!(session.dev_type, DevelopmentType::Security);
        assert_eq!(session.jargon, JargonLevel::Extreme);
        assert_eq!(session.complexity, Complexity::Low);
        assert_eq!(session.project_name, "red-team-ops");
        assert_eq!(timing.min_pause, Duration::from_millis(50));
        assert!(!timing.boot_sequence);
        assert_eq!(config.timing.duration(), Some(Duration::from_secs(120)));
        assert!(!config.output.color);
    }

    #[test]
    fn test_deserialize_partial_config() {
        let toml_str = r#"
[session]
dev_type = "frontend"
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.session.parse_dev_type().0, DevelopmentType::Frontend);
        // Defaults should apply
        assert_eq!(config.session.jargon, "medium");
        assert_eq!(config.timing, FileTimingConfig::default());
        assert!(config.output.color);
    }

    #[test]
    fn test_validate_valid_config() {
        let config = FileConfig::default();
        assert!(config.validate().is_empty());
    }

    #[test]
    fn test_validate_collects_all_issues() {
        let toml_str = r#"
[session]
dev_type = "wizard"
jargon = "none"

[timing]
min_pause_ms = 600
max_pause_ms = 100
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        let issues = config.validate();
        assert_eq!(issues.len(), 3);
        assert_eq!(issues.iter().filter(|i| i.is_error()).count(), 1);
    }
}
