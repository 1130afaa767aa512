//! Session presenter port
//!
//! Defines the interface the scheduler reports to while a session runs.

use crate::activities::Activity;
use crate::use_cases::run_session::SessionSummary;
use stakeholder_domain::{Alert, ReportLine, SessionConfig};

/// Callback for everything a session wants shown on screen
///
/// Implementations live in the presentation layer and can render
/// output in various ways (colored console, plain text, nothing).
pub trait SessionPresenter: Send + Sync {
    /// Called once before the boot sequence
    fn on_session_start(&self, _config: &SessionConfig) {}

    /// Called when an activity is picked, before its script runs
    fn on_activity_start(&self, _activity: Activity) {}

    /// Called for every printed line
    fn on_line(&self, line: &ReportLine);

    // ==================== Progress Callbacks ====================

    /// Called when a progress bar starts
    fn on_progress_start(&self, label: &str, total: u64);

    /// Called for each progress tick
    fn on_progress_advance(&self, delta: u64);

    /// Called when a progress bar ends; `completed` is false on shutdown
    fn on_progress_finish(&self, completed: bool);

    // ==================== Interjections ====================

    fn on_alert(&self, alert: &Alert);

    fn on_team_activity(&self, message: &str);

    /// Called once after the loop stops
    fn on_session_end(&self, _summary: &SessionSummary) {}
}

/// No-op presenter for when nothing should be shown
pub struct NoPresenter;

impl SessionPresenter for NoPresenter {
    fn on_line(&self, _line: &ReportLine) {}
    fn on_progress_start(&self, _label: &str, _total: u64) {}
    fn on_progress_advance(&self, _delta: u64) {}
    fn on_progress_finish(&self, _completed: bool) {}
    fn on_alert(&self, _alert: &Alert) {}
    fn on_team_activity(&self, _message: &str) {}
}
