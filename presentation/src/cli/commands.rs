//! CLI command definitions

use clap::Parser;
use stakeholder_domain::{Complexity, DevelopmentType, JargonLevel, SessionConfig};
use std::path::PathBuf;
use std::time::Duration;

/// CLI arguments for stakeholder
///
/// Every session flag is optional so that config files can supply the
/// value when the flag is absent.
#[derive(Parser, Debug)]
#[command(name = "stakeholder")]
#[command(author, version, about = "Look busy - a terminal screensaver for programmers")]
#[command(long_about = r#"
Stakeholder fills the terminal with plausible engineering activity:
code analysis, performance metrics, system monitoring, data processing
and network traffic, themed for your development type.

Press Ctrl+C to stop.

Configuration files are loaded from (in priority order):
1. --config <path>           Explicit config file
2. ./stakeholder.toml        Project-level config
3. ~/.config/stakeholder/config.toml   Global config

Example:
  stakeholder --dev-type machine-learning --jargon high
  stakeholder -d security --complexity extreme --alerts --team
  stakeholder --duration 300 --project payments-core --framework axum
"#)]
pub struct Cli {
    /// Development type to simulate (backend, frontend, fullstack, data-science,
    /// dev-ops, blockchain, machine-learning, systems-programming,
    /// game-development, security, mobile)
    #[arg(short, long, value_name = "TYPE")]
    pub dev_type: Option<DevelopmentType>,

    /// Jargon level (low, medium, high, extreme)
    #[arg(short, long, value_name = "LEVEL")]
    pub jargon: Option<JargonLevel>,

    /// Complexity level; controls activities per cycle (low, medium, high, extreme)
    #[arg(short, long, value_name = "LEVEL")]
    pub complexity: Option<Complexity>,

    /// Session duration in seconds (0 = run until interrupted)
    #[arg(short = 'T', long, value_name = "SECS")]
    pub duration: Option<u64>,

    /// Stop after this many cycles
    #[arg(long, value_name = "N")]
    pub cycles: Option<u64>,

    /// Show random system alerts
    #[arg(short, long)]
    pub alerts: bool,

    /// Show simulated team activity
    #[arg(short, long)]
    pub team: bool,

    /// Skip detail lines and progress bars
    #[arg(short, long)]
    pub minimal: bool,

    /// Project name shown during boot
    #[arg(short, long, value_name = "NAME")]
    pub project: Option<String>,

    /// Framework shown during boot
    #[arg(short, long, value_name = "NAME")]
    pub framework: Option<String>,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Write logs to this file instead of stderr
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}

impl Cli {
    /// Apply flags given on the command line on top of `base`.
    ///
    /// Boolean switches can only turn a feature on.
    pub fn apply_to(&self, base: SessionConfig) -> SessionConfig {
        let mut config = base;
        if let Some(dev_type) = self.dev_type {
            config = config.with_dev_type(dev_type);
        }
        if let Some(jargon) = self.jargon {
            config = config.with_jargon(jargon);
        }
        if let Some(complexity) = self.complexity {
            config = config.with_complexity(complexity);
        }
        if self.alerts {
            config = config.with_alerts(true);
        }
        if self.team {
            config = config.with_team_activity(true);
        }
        if self.minimal {
            config = config.with_minimal_output(true);
        }
        if let Some(project) = &self.project {
            config = config.with_project_name(project.clone());
        }
        if let Some(framework) = &self.framework {
            config = config.with_framework(framework.clone());
        }
        config
    }

    /// Session duration: the flag wins over `fallback`, and zero means unlimited
    pub fn resolve_duration(&self, fallback: Option<Duration>) -> Option<Duration> {
        match self.duration {
            Some(0) => None,
            Some(secs) => Some(Duration::from_secs(secs)),
            None => fallback,
        }
    }
}
