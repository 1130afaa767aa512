//! Code analysis: scan a file, report issues and a complexity reading.

use super::ActivityStep;
use rand::Rng;
use stakeholder_domain::content::{code_analysis, jargon};
use stakeholder_domain::{ReportLine, SessionConfig};

pub(super) fn extend<R: Rng + ?Sized>(
    steps: &mut Vec<ActivityStep>,
    rng: &mut R,
    config: &SessionConfig,
) {
    let dev = config.dev_type;
    steps.push(ActivityStep::Line(ReportLine::warning("Scanning dependencies...")));
    steps.push(ActivityStep::Progress {
        label: format!("Scanning {}", code_analysis::filename(rng, dev)),
        steps: rng.gen_range(20..=40),
    });

    let files = rng.gen_range(1..=3);
    for _ in 0..files {
        let file = code_analysis::filename(rng, dev);
        if rng.gen_bool(0.6) {
            let issue = code_analysis::code_issue(rng, dev);
            steps.push(ActivityStep::Line(ReportLine::warning(format!(
                "  {}: {}",
                file, issue
            ))));
        } else {
            steps.push(ActivityStep::Line(ReportLine::success(format!(
                "  {}: no issues found",
                file
            ))));
        }
    }

    steps.push(ActivityStep::Line(ReportLine::detail(format!(
        "  {}",
        code_analysis::complexity_metric(rng)
    ))));

    if let Some(phrase) = jargon::jargon_phrase(rng, dev, config.jargon) {
        steps.push(ActivityStep::Line(ReportLine::detail(format!("  {}", phrase))));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use stakeholder_domain::JargonLevel;

    #[test]
    fn test_contains_progress_and_files() {
        let mut rng = StdRng::seed_from_u64(200);
        let mut steps = Vec::new();
        extend(&mut steps, &mut rng, &SessionConfig::default());
        assert!(steps.iter().any(|s| matches!(
            s,
            ActivityStep::Progress { steps, .. } if (20..=40).contains(steps)
        )));
        let file_lines = steps
            .iter()
            .filter(|s| matches!(s, ActivityStep::Line(l) if l.text.starts_with("  ") && l.text.contains('.') && l.text.contains(':')))
            .count();
        assert!(file_lines >= 1);
    }

    #[test]
    fn test_low_jargon_adds_no_phrase() {
        let config = SessionConfig::default().with_jargon(JargonLevel::Low);
        let mut rng = StdRng::seed_from_u64(201);
        let mut steps = Vec::new();
        extend(&mut steps, &mut rng, &config);
        let details = steps
            .iter()
            .filter(|s| matches!(s, ActivityStep::Line(l) if l.tone.is_detail()))
            .count();
        // Only the complexity reading
        assert_eq!(details, 1);
    }
}
