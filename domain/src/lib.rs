//! Domain layer for stakeholder
//!
//! This crate contains the session model, the random selection primitives
//! and the static content tables. It has no dependencies on infrastructure
//! or presentation concerns, and nothing in it touches the host machine:
//! every number it produces is synthetic.
//!
//! # Core Concepts
//!
//! - **Session**: an immutable [`SessionConfig`] choosing a
//!   [`DevelopmentType`], a [`JargonLevel`] and a [`Complexity`]
//! - **Selection**: weighted picks ([`pick_weighted`]) and ordered sampling
//!   ([`sample_ordered`])
//! - **Content**: pure generators in [`content`] returning flavor text and
//!   numbers for a category, with a literal fallback for absent categories

pub mod config;
pub mod content;
pub mod core;
pub mod report;
pub mod selection;
pub mod session;

// Re-export commonly used types
pub use config::{ConfigIssue, ConfigIssueCode, Severity};
pub use core::error::DomainError;
pub use report::{Alert, AlertLevel, ReportLine, Tone};
pub use selection::{WeightedTable, choose_or, pick_weighted, sample_ordered};
pub use session::{Complexity, DEFAULT_PROJECT_NAME, DevelopmentType, JargonLevel, SessionConfig};
