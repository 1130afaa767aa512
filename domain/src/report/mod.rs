//! Report value objects produced by activities and consumed by presenters.

pub mod alert;
pub mod line;

pub use alert::{Alert, AlertLevel};
pub use line::{ReportLine, Tone};
