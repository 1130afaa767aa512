//! Data processing: a progress bar over a batch, then throughput.

use super::ActivityStep;
use rand::Rng;
use stakeholder_domain::content::{system, telemetry};
use stakeholder_domain::{ReportLine, SessionConfig};

pub(super) fn extend<R: Rng + ?Sized>(
    steps: &mut Vec<ActivityStep>,
    rng: &mut R,
    config: &SessionConfig,
) {
    steps.push(ActivityStep::Progress {
        label: system::data_operation(rng, config.dev_type).to_string(),
        steps: rng.gen_range(10..=25),
    });
    steps.push(ActivityStep::Line(ReportLine::info(format!(
        "Throughput: {} MB/s",
        telemetry::throughput_mb_per_sec(rng)
    ))));
    steps.push(ActivityStep::Line(ReportLine::success(format!(
        "  Processed {} records in {} ms",
        system::record_count(rng),
        rng.gen_range(40..4_000)
    ))));
}
