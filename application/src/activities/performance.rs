//! Performance metrics: CPU usage, a few named metrics, maybe a recommendation.

use super::ActivityStep;
use rand::Rng;
use stakeholder_domain::content::{metrics, telemetry};
use stakeholder_domain::{ReportLine, SessionConfig};

pub(super) fn extend<R: Rng + ?Sized>(
    steps: &mut Vec<ActivityStep>,
    rng: &mut R,
    config: &SessionConfig,
) {
    let dev = config.dev_type;
    steps.push(ActivityStep::Line(ReportLine::info(format!(
        "CPU Usage: {}%",
        telemetry::cpu_usage_percent(rng)
    ))));

    for _ in 0..rng.gen_range(2..=3) {
        let metric = metrics::performance_metric(rng, dev);
        let unit = metrics::metric_unit(rng, dev);
        let value = metrics::metric_value(rng, unit);
        steps.push(ActivityStep::Line(ReportLine::info(format!(
            "  {}: {:.2} {}",
            metric, value, unit
        ))));
    }

    if rng.gen_bool(0.5) {
        steps.push(ActivityStep::Line(ReportLine::success(format!(
            "  Recommendation: {}",
            metrics::optimization_recommendation(rng, dev)
        ))));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use stakeholder_domain::DevelopmentType;

    #[test]
    fn test_cpu_line_first() {
        let mut rng = StdRng::seed_from_u64(300);
        let mut steps = Vec::new();
        extend(&mut steps, &mut rng, &SessionConfig::default());
        match &steps[0] {
            ActivityStep::Line(line) => assert!(line.text.starts_with("CPU Usage: ")),
            other => panic!("unexpected step {:?}", other),
        }
    }

    #[test]
    fn test_absent_category_prints_fallback_metric() {
        let config = SessionConfig::default().with_dev_type(DevelopmentType::Mobile);
        let mut rng = StdRng::seed_from_u64(301);
        let mut steps = Vec::new();
        extend(&mut steps, &mut rng, &config);
        assert!(steps.iter().any(
            |s| matches!(s, ActivityStep::Line(l) if l.text.starts_with("  Performance metric: "))
        ));
    }
}
