//! Application layer for stakeholder
//!
//! This crate contains the activity scheduler use case, the activity
//! scripts, the presenter port and application pacing configuration.
//! It depends only on the domain layer.

pub mod activities;
pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use activities::{Activity, ActivityStep, boot_script};
pub use config::TimingConfig;
pub use ports::presenter::{NoPresenter, SessionPresenter};
pub use use_cases::run_session::{
    ALERT_PROBABILITY, RunSessionError, RunSessionInput, RunSessionUseCase, SessionSummary,
    StopReason, TEAM_ACTIVITY_PROBABILITY,
};
