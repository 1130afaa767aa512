//! Network activity: connection count and a handful of request log lines.

use super::ActivityStep;
use rand::Rng;
use stakeholder_domain::content::{network, telemetry};
use stakeholder_domain::{ReportLine, SessionConfig, Tone};

pub(super) fn extend<R: Rng + ?Sized>(
    steps: &mut Vec<ActivityStep>,
    rng: &mut R,
    config: &SessionConfig,
) {
    steps.push(ActivityStep::Line(ReportLine::info(format!(
        "Active connections: {}",
        telemetry::active_connections(rng)
    ))));

    for _ in 0..rng.gen_range(2..=4) {
        let method = network::http_method(rng);
        let endpoint = network::endpoint(rng, config.dev_type);
        let status = network::status_code(rng);
        let latency = network::latency_ms(rng, status);
        steps.push(ActivityStep::Line(ReportLine::new(
            status_tone(status),
            format!("  {:<6} {} -> {} ({} ms)", method, endpoint, status, latency),
        )));
    }
}

fn status_tone(status: u16) -> Tone {
    match status {
        200..=299 => Tone::Success,
        300..=399 => Tone::Info,
        400..=499 => Tone::Warning,
        _ => Tone::Critical,
    }
}
