//! CLI entrypoint for stakeholder
//!
//! This is the main binary that wires together all layers: it resolves
//! configuration, installs the shutdown listener and runs the session.

use anyhow::{Result, anyhow, bail};
use clap::Parser;
use stakeholder_application::{RunSessionInput, RunSessionUseCase, SessionPresenter};
use stakeholder_domain::Severity;
use stakeholder_infrastructure::{ConfigLoader, FileConfig, spawn_shutdown_listener};
use stakeholder_presentation::{
    Cli, ConsoleFormatter, ConsolePresenter, OutputConfig, PlainPresenter, clear_screen,
};
use std::io::IsTerminal;
use std::path::Path;
use tokio_util::sync::CancellationToken;
use tracing::{error, info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Held until exit so buffered log lines are flushed
    let _log_guard = init_logging(cli.verbose, cli.log_file.as_deref())?;

    if cli.show_config {
        ConfigLoader::print_config_sources(cli.config.as_ref());
        return Ok(());
    }

    // === Configuration ===
    let file_config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())
            .map_err(|e| anyhow!("Failed to load configuration: {}", e))?
    };
    check_config(&file_config)?;

    let (session_config, timing) = file_config.resolve();
    let config = cli.apply_to(session_config);

    let output = OutputConfig {
        color: file_config.output.color,
        clear_screen: file_config.output.clear_screen,
    }
    .with_no_color(cli.no_color);
    output.apply();

    let mut input = RunSessionInput::new(config).with_timing(timing);
    if let Some(duration) = cli.resolve_duration(file_config.timing.duration()) {
        input = input.with_duration(duration);
    }
    if let Some(cycles) = cli.cycles {
        input = input.with_max_cycles(cycles);
    }

    info!(
        dev_type = %input.config.dev_type,
        jargon = %input.config.jargon,
        complexity = %input.config.complexity,
        "Starting stakeholder"
    );

    // === Run ===
    let interactive = std::io::stdout().is_terminal();
    let clear = output.clears_screen(interactive);

    let cancellation = CancellationToken::new();
    let listener = spawn_shutdown_listener(cancellation.clone());

    if clear {
        clear_screen()?;
    }

    let console = ConsolePresenter::new();
    let presenter: &dyn SessionPresenter = if interactive {
        &console
    } else {
        &PlainPresenter
    };

    let mut use_case = RunSessionUseCase::from_entropy();
    let result = use_case
        .execute_with_presenter(input, presenter, &cancellation)
        .await;

    // Stops the listener when the session ended on its own
    cancellation.cancel();
    if let Err(e) = listener.await {
        warn!("Shutdown listener failed: {}", e);
    }

    let summary = result?;

    if clear {
        clear_screen()?;
    }
    println!("{}", ConsoleFormatter::format_terminated());
    if cli.verbose > 0 {
        println!("{}", ConsoleFormatter::format_summary(&summary));
    }

    info!(
        cycles = summary.cycles,
        activities = summary.activities_run,
        reason = ?summary.stop_reason,
        "Session finished"
    );

    Ok(())
}

/// Initialize logging based on verbosity level.
///
/// Logs go to stderr, or to `log_file` through a non-blocking writer so
/// they never interleave with the session output.
fn init_logging(verbose: u8, log_file: Option<&Path>) -> Result<Option<WorkerGuard>> {
    let filter = match verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    match log_file {
        Some(path) => {
            let directory = path
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .unwrap_or_else(|| Path::new("."));
            let file_name = path
                .file_name()
                .ok_or_else(|| anyhow!("Invalid log file path: {}", path.display()))?;

            let appender = tracing_appender::rolling::never(directory, file_name);
            let (writer, guard) = tracing_appender::non_blocking(appender);

            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_target(false)
                .with_ansi(false)
                .with_writer(writer)
                .init();

            Ok(Some(guard))
        }
        None => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_target(false)
                .with_writer(std::io::stderr)
                .init();

            Ok(None)
        }
    }
}

/// Log every config issue; abort if any of them is an error.
fn check_config(config: &FileConfig) -> Result<()> {
    let issues = config.validate();
    for issue in &issues {
        match issue.severity {
            Severity::Warning => warn!("{}", issue.message),
            Severity::Error => error!("{}", issue.message),
        }
    }

    let errors = issues.iter().filter(|i| i.is_error()).count();
    if errors > 0 {
        bail!("Invalid configuration: {} error(s)", errors);
    }
    Ok(())
}
