//! Presentation layer for stakeholder
//!
//! This crate contains the CLI definition, console formatting,
//! terminal presenters and screen control.

pub mod cli;
pub mod config;
pub mod output;
pub mod progress;

// Re-export commonly used types
pub use cli::commands::Cli;
pub use config::OutputConfig;
pub use output::console::ConsoleFormatter;
pub use output::screen::clear_screen;
pub use progress::reporter::{ConsolePresenter, PlainPresenter};
