//! Infrastructure layer for stakeholder
//!
//! Adapters for the outside world: layered TOML configuration files and
//! OS signals that cancel a running session.

pub mod config;
pub mod signal;

// Re-export commonly used types
pub use config::{ConfigLoader, FileConfig, FileOutputConfig, FileSessionConfig, FileTimingConfig};
pub use signal::{shutdown_signal, spawn_shutdown_listener};
