//! Presentation-level configuration
//!
//! Terminal behavior resolved from the `[output]` file section and CLI flags.

use serde::{Deserialize, Serialize};

/// Output configuration for the presentation layer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Enable colored terminal output
    pub color: bool,
    /// Clear the screen at start and end
    pub clear_screen: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            color: true,
            clear_screen: true,
        }
    }
}

impl OutputConfig {
    /// `--no-color` always wins over the file setting
    pub fn with_no_color(mut self, no_color: bool) -> Self {
        if no_color {
            self.color = false;
        }
        self
    }

    /// Whether to clear the screen at start and end.
    ///
    /// Never when stdout is not a terminal.
    pub fn clears_screen(&self, interactive: bool) -> bool {
        self.clear_screen && interactive
    }

    /// Apply the color setting process-wide
    pub fn apply(&self) {
        if !self.color {
            colored::control::set_override(false);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_color_flag_overrides() {
        let config = OutputConfig::default().with_no_color(true);
        assert!(!config.color);
        let config = OutputConfig::default().with_no_color(false);
        assert!(config.color);
    }

    #[test]
    fn test_clears_screen_only_on_terminal_when_enabled() {
        let config = OutputConfig::default();
        assert!(config.clears_screen(true));
        assert!(!config.clears_screen(false));

        let config = OutputConfig {
            clear_screen: false,
            ..Default::default()
        };
        assert!(!config.clears_screen(true));
    }
}
