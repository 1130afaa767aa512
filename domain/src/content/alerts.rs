//! Alert and team-activity interjections.

use crate::report::{Alert, AlertLevel};
use crate::selection::choose_or;
use crate::session::DevelopmentType;
use rand::Rng;
use rand::seq::SliceRandom;

const ALERT_FALLBACK: (AlertLevel, &str) = (AlertLevel::Notice, "Anomaly detected");

const GENERAL_ALERTS: &[(AlertLevel, &str)] = &[
    (AlertLevel::Warning, "High memory usage detected"),
    (AlertLevel::Notice, "Network latency spike observed"),
    (AlertLevel::Critical, "CPU utilization above threshold"),
    (AlertLevel::Warning, "Database connection pool near capacity"),
];

fn specific_alerts(dev: DevelopmentType) -> &'static [(AlertLevel, &'static str)] {
    match dev {
        DevelopmentType::Backend => &[(
            AlertLevel::Warning,
            "p99 latency SLO at risk on /api/v1/orders",
        )],
        DevelopmentType::Frontend => &[(
            AlertLevel::Notice,
            "Largest Contentful Paint regressed by 300ms",
        )],
        DevelopmentType::DevOps => &[(AlertLevel::Warning, "Disk pressure on node pool workers-2")],
        DevelopmentType::MachineLearning => &[(
            AlertLevel::Warning,
            "Validation loss diverging from training loss",
        )],
        DevelopmentType::Blockchain => &[(
            AlertLevel::Notice,
            "Mempool backlog above 10k transactions",
        )],
        DevelopmentType::Security => &[(
            AlertLevel::Critical,
            "Anomalous login pattern from new ASN",
        )],
        DevelopmentType::GameDevelopment => &[(AlertLevel::Notice, "Frame time spikes above 33ms")],
        DevelopmentType::Fullstack
        | DevelopmentType::DataScience
        | DevelopmentType::SystemsProgramming
        | DevelopmentType::Mobile => &[],
    }
}

const TEAMMATES: &[&str] = &["alice", "bob", "chen", "dana", "emeka", "farah", "goran"];

const TEAM_TEMPLATES: &[&str] = &[
    "{} pushed changes to the repository",
    "{} requested a code review on the feature branch",
    "CI/CD pipeline triggered by {}'s recent commit",
    "{} posted in the team chat",
    "{} approved the pull request",
];

/// Draw an alert from the general or type-specific table.
///
/// Each message carries its own level.
pub fn alert<R: Rng + ?Sized>(rng: &mut R, dev: DevelopmentType) -> Alert {
    let specific = specific_alerts(dev);
    let table = if !specific.is_empty() && rng.gen_bool(0.3) {
        specific
    } else {
        GENERAL_ALERTS
    };
    let (level, message) = table.choose(rng).copied().unwrap_or(ALERT_FALLBACK);
    Alert::new(level, message)
}

pub fn team_activity<R: Rng + ?Sized>(rng: &mut R) -> String {
    let name = choose_or(rng, TEAMMATES, "a teammate");
    let template = choose_or(rng, TEAM_TEMPLATES, "{} is typing");
    template.replacen("{}", name, 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_alert_message_from_tables() {
        let mut rng = StdRng::seed_from_u64(61);
        for dev in DevelopmentType::ALL {
            for _ in 0..20 {
                let drawn = alert(&mut rng, dev);
                let listed = GENERAL_ALERTS
                    .iter()
                    .chain(specific_alerts(dev))
                    .any(|&(level, message)| level == drawn.level && message == drawn.message);
                assert!(listed, "{:?} not in tables for {}", drawn, dev);
            }
        }
    }

    #[test]
    fn test_alert_level_fixed_per_message() {
        let mut rng = StdRng::seed_from_u64(63);
        for _ in 0..200 {
            let drawn = alert(&mut rng, DevelopmentType::Mobile);
            let expected = match drawn.message.as_str() {
                "High memory usage detected" => AlertLevel::Warning,
                "Network latency spike observed" => AlertLevel::Notice,
                "CPU utilization above threshold" => AlertLevel::Critical,
                "Database connection pool near capacity" => AlertLevel::Warning,
                other => panic!("unexpected alert {}", other),
            };
            assert_eq!(drawn.level, expected);
        }
    }

    #[test]
    fn test_team_activity_names_a_teammate() {
        let mut rng = StdRng::seed_from_u64(62);
        for _ in 0..50 {
            let line = team_activity(&mut rng);
            assert!(!line.contains("{}"));
            assert!(TEAMMATES.iter().any(|name| line.contains(name)));
        }
    }
}
