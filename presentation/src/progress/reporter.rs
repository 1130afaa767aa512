//! Session presenters for the terminal

use crate::output::console::ConsoleFormatter;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use stakeholder_application::{Activity, SessionPresenter};
use stakeholder_domain::{Alert, ReportLine, SessionConfig};
use std::sync::Mutex;

/// Renders a session with colors and animated progress bars
pub struct ConsolePresenter {
    bar: Mutex<Option<ProgressBar>>,
}

impl ConsolePresenter {
    pub fn new() -> Self {
        Self {
            bar: Mutex::new(None),
        }
    }

    fn bar_style() -> ProgressStyle {
        ProgressStyle::default_bar()
            .template("{spinner:.green} {prefix:.bold.cyan} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("=>-")
    }

    /// Print through the active bar so it is not overdrawn
    fn print(&self, text: String) {
        match self.bar.lock().ok().and_then(|slot| slot.clone()) {
            Some(pb) => pb.println(text),
            None => println!("{}", text),
        }
    }
}

impl Default for ConsolePresenter {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionPresenter for ConsolePresenter {
    fn on_line(&self, line: &ReportLine) {
        self.print(ConsoleFormatter::format_line(line));
    }

    fn on_progress_start(&self, label: &str, total: u64) {
        let pb = ProgressBar::new(total);
        pb.set_style(Self::bar_style());
        pb.set_prefix(label.to_string());

        if let Ok(mut slot) = self.bar.lock()
            && let Some(previous) = slot.replace(pb)
        {
            previous.abandon();
        }
    }

    fn on_progress_advance(&self, delta: u64) {
        if let Ok(slot) = self.bar.lock()
            && let Some(pb) = slot.as_ref()
        {
            pb.inc(delta);
        }
    }

    fn on_progress_finish(&self, completed: bool) {
        let Some(pb) = self.bar.lock().ok().and_then(|mut slot| slot.take()) else {
            return;
        };
        if completed {
            pb.finish_with_message("done".green().to_string());
        } else {
            pb.abandon_with_message("interrupted".yellow().to_string());
        }
    }

    fn on_alert(&self, alert: &Alert) {
        self.print(ConsoleFormatter::format_alert(alert));
    }

    fn on_team_activity(&self, message: &str) {
        self.print(ConsoleFormatter::format_team_activity(message));
    }
}

/// Simple text-based presenter (no progress animation)
///
/// Used when stdout is not a terminal.
pub struct PlainPresenter;

impl SessionPresenter for PlainPresenter {
    fn on_session_start(&self, config: &SessionConfig) {
        println!(
            "-> {} session ({} jargon, {} complexity)",
            config.dev_type.display_name(),
            config.jargon,
            config.complexity
        );
    }

    fn on_activity_start(&self, activity: Activity) {
        println!("-> {}", activity);
    }

    fn on_line(&self, line: &ReportLine) {
        println!("{}", line);
    }

    fn on_progress_start(&self, label: &str, total: u64) {
        println!("{} ({} steps)", label, total);
    }

    fn on_progress_advance(&self, _delta: u64) {}

    fn on_progress_finish(&self, completed: bool) {
        if !completed {
            println!("  interrupted");
        }
    }

    fn on_alert(&self, alert: &Alert) {
        println!("{}", alert);
    }

    fn on_team_activity(&self, message: &str) {
        println!("Team: {}", message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_lifecycle_clears_bar() {
        let presenter = ConsolePresenter::new();
        presenter.on_progress_start("Scanning src/main.rs", 10);
        presenter.on_progress_advance(3);
        {
            let slot = presenter.bar.lock().unwrap();
            assert_eq!(slot.as_ref().map(|pb| pb.position()), Some(3));
        }
        presenter.on_progress_finish(true);
        assert!(presenter.bar.lock().unwrap().is_none());
    }

    #[test]
    fn test_finish_without_bar_is_noop() {
        let presenter = ConsolePresenter::new();
        presenter.on_progress_finish(false);
        presenter.on_progress_advance(1);
        assert!(presenter.bar.lock().unwrap().is_none());
    }

    #[test]
    fn test_new_bar_replaces_previous() {
        let presenter = ConsolePresenter::new();
        presenter.on_progress_start("first", 5);
        presenter.on_progress_start("second", 7);
        let slot = presenter.bar.lock().unwrap();
        assert_eq!(slot.as_ref().and_then(|pb| pb.length()), Some(7));
    }
}
