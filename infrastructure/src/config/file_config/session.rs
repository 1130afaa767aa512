//! Session configuration from TOML (`[session]` section)

use serde::{Deserialize, Serialize};
use stakeholder_domain::{
    Complexity, ConfigIssue, ConfigIssueCode, DEFAULT_PROJECT_NAME, DevelopmentType, DomainError,
    JargonLevel, SessionConfig, Severity,
};
use std::fmt::Display;
use std::str::FromStr;

/// Raw session configuration from TOML
///
/// # Example
///
/// ```toml
/// [session]
/// dev_type = "machine-learning"   # backend, frontend, fullstack, data-science, ...
/// jargon = "high"                 # low, medium, high, extreme
/// complexity = "extreme"          # low, medium, high, extreme
/// alerts = true
/// team_activity = true
/// project = "neural-forge"
/// framework = "pytorch"
/// minimal_output = false
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileSessionConfig {
    pub dev_type: String,
    pub jargon: String,
    pub complexity: String,
    pub alerts: bool,
    pub team_activity: bool,
    pub project: String,
    pub framework: Option<String>,
    pub minimal_output: bool,
}

impl Default for FileSessionConfig {
    fn default() -> Self {
        Self {
            dev_type: "backend".to_string(),
            jargon: "medium".to_string(),
            complexity: "medium".to_string(),
            alerts: false,
            team_activity: false,
            project: DEFAULT_PROJECT_NAME.to_string(),
            framework: None,
            minimal_output: false,
        }
    }
}

impl FileSessionConfig {
    /// Parse dev_type into DevelopmentType, falling back to backend with a warning
    pub fn parse_dev_type(&self) -> (DevelopmentType, Vec<ConfigIssue>) {
        parse_or_default(
            "session.dev_type",
            &self.dev_type,
            DevelopmentType::ALL.iter().map(|d| d.to_string()).collect(),
        )
    }

    /// Parse jargon into JargonLevel, falling back to medium with a warning
    pub fn parse_jargon(&self) -> (JargonLevel, Vec<ConfigIssue>) {
        parse_or_default(
            "session.jargon",
            &self.jargon,
            JargonLevel::ALL.iter().map(|l| l.to_string()).collect(),
        )
    }

    /// Parse complexity into Complexity, falling back to medium with a warning
    pub fn parse_complexity(&self) -> (Complexity, Vec<ConfigIssue>) {
        parse_or_default(
            "session.complexity",
            &self.complexity,
            Complexity::ALL.iter().map(|c| c.to_string()).collect(),
        )
    }

    /// Convert to the domain record. Unparseable values use their defaults.
    pub fn to_session_config(&self) -> (SessionConfig, Vec<ConfigIssue>) {
        let mut issues = Vec::new();

        let (dev_type, dev_issues) = self.parse_dev_type();
        let (jargon, jargon_issues) = self.parse_jargon();
        let (complexity, complexity_issues) = self.parse_complexity();
        issues.extend(dev_issues);
        issues.extend(jargon_issues);
        issues.extend(complexity_issues);

        let project = if self.project.trim().is_empty() {
            issues.push(ConfigIssue {
                severity: Severity::Warning,
                code: ConfigIssueCode::EmptyValue {
                    field: "session.project".to_string(),
                },
                message: format!(
                    "session.project: empty, falling back to '{}'",
                    DEFAULT_PROJECT_NAME
                ),
            });
            DEFAULT_PROJECT_NAME.to_string()
        } else {
            self.project.clone()
        };

        let mut config = SessionConfig::default()
            .with_dev_type(dev_type)
            .with_jargon(jargon)
            .with_complexity(complexity)
            .with_alerts(self.alerts)
            .with_team_activity(self.team_activity)
            .with_project_name(project)
            .with_minimal_output(self.minimal_output);
        if let Some(framework) = &self.framework {
            config = config.with_framework(framework.clone());
        }

        (config, issues)
    }
}

fn parse_or_default<T>(field: &str, value: &str, valid_values: Vec<String>) -> (T, Vec<ConfigIssue>)
where
    T: FromStr<Err = DomainError> + Default + Display,
{
    match value.parse::<T>() {
        Ok(parsed) => (parsed, vec![]),
        Err(e) => {
            let fallback = T::default();
            let issue = ConfigIssue {
                severity: Severity::Warning,
                code: ConfigIssueCode::InvalidEnumValue {
                    field: field.to_string(),
                    value: e.value().to_string(),
                    valid_values,
                },
                message: format!("{}: {}, falling back to '{}'", field, e, fallback),
            };
            (fallback, vec![issue])
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_converts_to_default_session() {
        let (config, issues) = FileSessionConfig::default().to_session_config();
        assert!(issues.is_empty());
        assert_eq!(config, SessionConfig::default());
    }

    #[test]
    fn test_invalid_dev_type_falls_back_with_warning() {
        let file = FileSessionConfig {
            dev_type: "cobol".to_string(),
            ..Default::default()
        };
        let (dev, issues) = file.parse_dev_type();
        assert_eq!(dev, DevelopmentType::Backend);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].severity, Severity::Warning);
        assert!(issues[0].message.contains("falling back to 'backend'"));
        assert!(issues[0].message.contains("Invalid development type: cobol"));
        match &issues[0].code {
            ConfigIssueCode::InvalidEnumValue {
                field,
                value,
                valid_values,
            } => {
                assert_eq!(field, "session.dev_type");
                assert_eq!(value, "cobol");
                assert!(valid_values.contains(&"machine-learning".to_string()));
            }
            other => panic!("unexpected code {:?}", other),
        }
    }

    #[test]
    fn test_invalid_levels_report_each_field() {
        let file = FileSessionConfig {
            jargon: "galaxy-brain".to_string(),
            complexity: "insane".to_string(),
            ..Default::default()
        };
        let (config, issues) = file.to_session_config();
        assert_eq!(issues.len(), 2);
        assert_eq!(config.jargon, JargonLevel::Medium);
        assert_eq!(config.complexity, Complexity::Medium);
    }

    #[test]
    fn test_empty_project_warns() {
        let file = FileSessionConfig {
            project: " ".to_string(),
            ..Default::default()
        };
        let (config, issues) = file.to_session_config();
        assert_eq!(config.project_name, DEFAULT_PROJECT_NAME);
        assert!(matches!(issues[0].code, ConfigIssueCode::EmptyValue { .. }));
    }

    #[test]
    fn test_full_conversion() {
        let file = FileSessionConfig {
            dev_type: "ml".to_string(),
            jargon: "extreme".to_string(),
            complexity: "high".to_string(),
            alerts: true,
            team_activity: true,
            project: "neural-forge".to_string(),
            framework: Some("pytorch".to_string()),
            minimal_output: true,
        };
        let (config, issues) = file.to_session_config();
        assert!(issues.is_empty());
        assert_eq!(config.dev_type, DevelopmentType::MachineLearning);
        assert_eq!(config.jargon, JargonLevel::Extreme);
        assert_eq!(config.activities_per_cycle(), 3);
        assert!(config.alerts_enabled && config.team_activity && config.minimal_output);
        assert_eq!(config.framework.as_deref(), Some("pytorch"));
    }
}
