//! Session configuration record

use super::development_type::DevelopmentType;
use super::levels::{Complexity, JargonLevel};
use serde::{Deserialize, Serialize};

/// Default project name shown in the boot sequence
pub const DEFAULT_PROJECT_NAME: &str = "distributed-cluster";

/// Immutable configuration of one simulated session.
///
/// Built once at process start from defaults, config files and CLI flags,
/// then only read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionConfig {
    pub dev_type: DevelopmentType,
    pub jargon: JargonLevel,
    pub complexity: Complexity,
    /// Occasionally print alert lines
    pub alerts_enabled: bool,
    /// Occasionally print team-activity lines
    pub team_activity: bool,
    pub project_name: String,
    pub framework: Option<String>,
    /// Skip progress bars and detail lines
    pub minimal_output: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            dev_type: DevelopmentType::Backend,
            jargon: JargonLevel::Medium,
            complexity: Complexity::Medium,
            alerts_enabled: false,
            team_activity: false,
            project_name: DEFAULT_PROJECT_NAME.to_string(),
            framework: None,
            minimal_output: false,
        }
    }
}

impl SessionConfig {
    // ==================== Builder Methods ====================

    pub fn with_dev_type(mut self, dev_type: DevelopmentType) -> Self {
        self.dev_type = dev_type;
        self
    }

    pub fn with_jargon(mut self, jargon: JargonLevel) -> Self {
        self.jargon = jargon;
        self
    }

    pub fn with_complexity(mut self, complexity: Complexity) -> Self {
        self.complexity = complexity;
        self
    }

    pub fn with_alerts(mut self, enabled: bool) -> Self {
        self.alerts_enabled = enabled;
        self
    }

    pub fn with_team_activity(mut self, enabled: bool) -> Self {
        self.team_activity = enabled;
        self
    }

    pub fn with_project_name(mut self, name: impl Into<String>) -> Self {
        self.project_name = name.into();
        self
    }

    pub fn with_framework(mut self, framework: impl Into<String>) -> Self {
        let framework = framework.into();
        self.framework = if framework.trim().is_empty() {
            None
        } else {
            Some(framework)
        };
        self
    }

    pub fn with_minimal_output(mut self, minimal: bool) -> Self {
        self.minimal_output = minimal;
        self
    }

    /// Number of activities executed per scheduler cycle
    pub fn activities_per_cycle(&self) -> usize {
        self.complexity.activity_count()
    }
}
