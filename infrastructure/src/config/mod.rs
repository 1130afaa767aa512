//! Configuration file loading for stakeholder
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `--config <path>` specified file
//! 2. Project root: `./stakeholder.toml` or `./.stakeholder.toml`
//! 3. XDG config: `$XDG_CONFIG_HOME/stakeholder/config.toml`
//! 4. Default values

mod file_config;
mod loader;

pub use file_config::{FileConfig, FileOutputConfig, FileSessionConfig, FileTimingConfig};
pub use loader::ConfigLoader;
