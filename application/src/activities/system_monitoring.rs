//! System monitoring: memory, disk and thread readings plus a system event.

use super::ActivityStep;
use rand::Rng;
use stakeholder_domain::content::{system, telemetry};
use stakeholder_domain::{ReportLine, SessionConfig};

pub(super) fn extend<R: Rng + ?Sized>(
    steps: &mut Vec<ActivityStep>,
    rng: &mut R,
    config: &SessionConfig,
) {
    let memory = telemetry::memory_utilization_percent(rng);
    let line = format!("Memory utilization: {}%", memory);
    steps.push(ActivityStep::Line(if memory >= 65 {
        ReportLine::warning(line)
    } else {
        ReportLine::info(line)
    }));

    steps.push(ActivityStep::Line(ReportLine::detail(format!(
        "  Disk I/O: {:.1} MB/s | Threads: {}",
        telemetry::disk_io_mb_per_sec(rng),
        telemetry::thread_count(rng)
    ))));

    steps.push(ActivityStep::Line(ReportLine::success(format!(
        "  {}",
        system::system_event(rng, config.dev_type)
    ))));
}
