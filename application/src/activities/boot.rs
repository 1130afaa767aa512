//! Boot sequence shown once before the first cycle.

use super::ActivityStep;
use stakeholder_domain::{ReportLine, SessionConfig};
use std::time::Duration;

/// Script for the boot sequence: banner lines, project and optional
/// framework, with fixed pauses in between.
pub fn boot_script(config: &SessionConfig) -> Vec<ActivityStep> {
    let mut steps = vec![
        ActivityStep::Line(ReportLine::success("Initializing system...")),
        ActivityStep::Pause(Duration::from_millis(500)),
        ActivityStep::Line(ReportLine::heading("Loading configuration...")),
        ActivityStep::Pause(Duration::from_millis(300)),
        ActivityStep::Line(ReportLine::info(format!(
            "Project: {}",
            config.project_name
        ))),
    ];
    if let Some(framework) = &config.framework {
        steps.push(ActivityStep::Line(ReportLine::info(format!(
            "Framework: {}",
            framework
        ))));
    }
    steps.push(ActivityStep::Line(ReportLine::detail(format!(
        "Profile: {} / jargon {} / complexity {}",
        config.dev_type.display_name(),
        config.jargon,
        config.complexity
    ))));
    steps.push(ActivityStep::Pause(Duration::from_millis(500)));
    steps
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(steps: &[ActivityStep]) -> Vec<String> {
        steps
            .iter()
            .filter_map(|s| match s {
                ActivityStep::Line(line) => Some(line.text.clone()),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_boot_without_framework() {
        let script = boot_script(&SessionConfig::default());
        let text = lines(&script);
        assert_eq!(text[0], "Initializing system...");
        assert_eq!(text[1], "Loading configuration...");
        assert_eq!(text[2], "Project: distributed-cluster");
        assert!(!text.iter().any(|l| l.starts_with("Framework:")));
    }

    #[test]
    fn test_boot_with_framework() {
        let config = SessionConfig::default().with_framework("axum");
        let text = lines(&boot_script(&config));
        assert!(text.contains(&"Framework: axum".to_string()));
    }

    #[test]
    fn test_boot_pause_total() {
        let total: Duration = boot_script(&SessionConfig::default())
            .iter()
            .filter_map(|s| match s {
                ActivityStep::Pause(d) => Some(*d),
                _ => None,
            })
            .sum();
        assert_eq!(total, Duration::from_millis(1_300));
    }
}
