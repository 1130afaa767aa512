//! Console formatting for session output

use colored::{ColoredString, Colorize};
use stakeholder_application::{SessionSummary, StopReason};
use stakeholder_domain::{Alert, AlertLevel, ReportLine, Tone};

/// Formats session lines for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format a script line according to its tone
    pub fn format_line(line: &ReportLine) -> String {
        Self::paint(line.tone, &line.text).to_string()
    }

    /// Format an alert; critical alerts are bold
    pub fn format_alert(alert: &Alert) -> String {
        let text = alert.to_string();
        match alert.level {
            AlertLevel::Critical => text.red().bold().to_string(),
            AlertLevel::Warning | AlertLevel::Notice => text.red().to_string(),
        }
    }

    /// Format a team activity message
    pub fn format_team_activity(message: &str) -> String {
        format!("{} {}", "Team:".blue().bold(), message.blue())
    }

    /// Final line printed after the screen is cleared
    pub fn format_terminated() -> String {
        "Session terminated.".green().to_string()
    }

    /// One-line session summary
    pub fn format_summary(summary: &SessionSummary) -> String {
        let reason = match summary.stop_reason {
            StopReason::Cancelled => "interrupted",
            StopReason::DurationElapsed => "duration elapsed",
            StopReason::CycleLimit => "cycle limit reached",
        };
        format!(
            "{} {} cycles, {} activities, {} alerts, {} team updates in {:.1}s ({})",
            "Summary:".dimmed(),
            summary.cycles,
            summary.activities_run,
            summary.alerts_shown,
            summary.team_updates_shown,
            summary.elapsed.as_secs_f64(),
            reason
        )
    }

    fn paint(tone: Tone, text: &str) -> ColoredString {
        match tone {
            Tone::Heading => text.blue().bold(),
            Tone::Info => text.normal(),
            Tone::Success => text.green(),
            Tone::Warning => text.yellow(),
            Tone::Critical => text.red().bold(),
            Tone::Detail => text.dimmed(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_format_line_keeps_text() {
        for line in [
            ReportLine::heading("Analyzing code structure..."),
            ReportLine::info("CPU Usage: 42%"),
            ReportLine::detail("  Cyclomatic complexity: 7"),
        ] {
            assert!(ConsoleFormatter::format_line(&line).contains(&line.text));
        }
    }

    #[test]
    fn test_format_alert_contains_label() {
        let alert = Alert::new(AlertLevel::Critical, "CPU utilization above threshold");
        let formatted = ConsoleFormatter::format_alert(&alert);
        assert!(formatted.contains("Alert"));
        assert!(formatted.contains("CPU utilization above threshold"));
    }

    #[test]
    fn test_format_summary() {
        let summary = SessionSummary {
            cycles: 3,
            activities_run: 6,
            alerts_shown: 1,
            team_updates_shown: 0,
            elapsed: Duration::from_millis(2500),
            stop_reason: StopReason::CycleLimit,
        };
        let formatted = ConsoleFormatter::format_summary(&summary);
        assert!(formatted.contains("3 cycles"));
        assert!(formatted.contains("6 activities"));
        assert!(formatted.contains("2.5s"));
        assert!(formatted.contains("cycle limit reached"));
    }

    #[test]
    fn test_format_terminated() {
        assert!(ConsoleFormatter::format_terminated().contains("Session terminated."));
    }
}
