//! Simulated activities.
//!
//! An [`Activity`] does not print anything itself. It produces a script of
//! [`ActivityStep`]s from the content generators, and the scheduler
//! interprets the script against a presenter.

mod boot;
mod code_analysis;
mod data_processing;
mod network;
mod performance;
mod system_monitoring;

pub use boot::boot_script;

use rand::Rng;
use serde::{Deserialize, Serialize};
use stakeholder_domain::{ReportLine, SessionConfig};
use std::fmt;
use std::time::Duration;

/// One instruction in an activity script
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActivityStep {
    /// Print a line
    Line(ReportLine),
    /// Show a progress bar advancing `steps` times
    Progress { label: String, steps: u64 },
    /// Fixed pause (boot sequence)
    Pause(Duration),
}

/// The fixed set of simulated activities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Activity {
    CodeAnalysis,
    PerformanceMetrics,
    SystemMonitoring,
    DataProcessing,
    NetworkActivity,
}

impl Activity {
    /// All activities in their canonical order
    pub const ALL: [Activity; 5] = [
        Activity::CodeAnalysis,
        Activity::PerformanceMetrics,
        Activity::SystemMonitoring,
        Activity::DataProcessing,
        Activity::NetworkActivity,
    ];

    /// Heading printed when the activity starts
    pub fn title(&self) -> &'static str {
        match self {
            Activity::CodeAnalysis => "Analyzing code structure...",
            Activity::PerformanceMetrics => "Collecting performance metrics...",
            Activity::SystemMonitoring => "Monitoring system resources...",
            Activity::DataProcessing => "Processing data streams...",
            Activity::NetworkActivity => "Monitoring network activity...",
        }
    }

    /// Build this activity's script.
    ///
    /// The first step is always the heading line.
    pub fn script<R: Rng + ?Sized>(&self, rng: &mut R, config: &SessionConfig) -> Vec<ActivityStep> {
        let mut steps = vec![ActivityStep::Line(ReportLine::heading(self.title()))];
        match self {
            Activity::CodeAnalysis => code_analysis::extend(&mut steps, rng, config),
            Activity::PerformanceMetrics => performance::extend(&mut steps, rng, config),
            Activity::SystemMonitoring => system_monitoring::extend(&mut steps, rng, config),
            Activity::DataProcessing => data_processing::extend(&mut steps, rng, config),
            Activity::NetworkActivity => network::extend(&mut steps, rng, config),
        }
        steps
    }
}

impl fmt::Display for Activity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Activity::CodeAnalysis => write!(f, "code_analysis"),
            Activity::PerformanceMetrics => write!(f, "performance_metrics"),
            Activity::SystemMonitoring => write!(f, "system_monitoring"),
            Activity::DataProcessing => write!(f, "data_processing"),
            Activity::NetworkActivity => write!(f, "network_activity"),
        }
    }
}
