//! Run Session use case
//!
//! The activity scheduler: each cycle picks a random ordered subset of the
//! five activities, interprets their scripts against the presenter with
//! random pauses in between, then maybe interjects an alert or team update.

use crate::activities::{Activity, ActivityStep, boot_script};
use crate::config::TimingConfig;
use crate::ports::presenter::{NoPresenter, SessionPresenter};
use crate::use_cases::shared::{pause_cancellable, should_stop};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;
use stakeholder_domain::content::alerts;
use stakeholder_domain::{SessionConfig, sample_ordered};
use std::time::Duration;
use thiserror::Error;
use tokio::time::Instant;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, trace};

/// Chance per cycle of an alert (when alerts are enabled)
pub const ALERT_PROBABILITY: f64 = 0.1;
/// Chance per cycle of a team-activity line (when enabled)
pub const TEAM_ACTIVITY_PROBABILITY: f64 = 0.2;

/// Errors that can occur before a session starts
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RunSessionError {
    #[error("Invalid pause range: min {min:?} is greater than max {max:?}")]
    InvalidPauseRange { min: Duration, max: Duration },
}

/// Why the session loop stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StopReason {
    /// Shutdown requested (signal)
    Cancelled,
    /// The configured duration budget ran out
    DurationElapsed,
    /// The configured cycle limit was reached
    CycleLimit,
}

/// What a finished session did
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionSummary {
    pub cycles: u64,
    pub activities_run: u64,
    pub alerts_shown: u64,
    pub team_updates_shown: u64,
    pub elapsed: Duration,
    pub stop_reason: StopReason,
}

/// Input for the RunSession use case
#[derive(Debug, Clone)]
pub struct RunSessionInput {
    pub config: SessionConfig,
    pub timing: TimingConfig,
    /// Stop after this much wall time (`None` = until cancelled)
    pub duration: Option<Duration>,
    /// Stop after this many cycles (`None` = unlimited)
    pub max_cycles: Option<u64>,
}

impl RunSessionInput {
    pub fn new(config: SessionConfig) -> Self {
        Self {
            config,
            timing: TimingConfig::default(),
            duration: None,
            max_cycles: None,
        }
    }

    pub fn with_timing(mut self, timing: TimingConfig) -> Self {
        self.timing = timing;
        self
    }

    /// Zero means unlimited.
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = (!duration.is_zero()).then_some(duration);
        self
    }

    pub fn with_max_cycles(mut self, cycles: u64) -> Self {
        self.max_cycles = Some(cycles);
        self
    }
}

/// How a script run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScriptOutcome {
    Completed,
    Interrupted,
}

/// Use case for running a simulated session
pub struct RunSessionUseCase<R: Rng = StdRng> {
    rng: R,
}

impl RunSessionUseCase<StdRng> {
    /// Seed from OS entropy
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }

    /// Deterministic output for a given seed
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> RunSessionUseCase<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Execute without a presenter (nothing is shown)
    pub async fn execute(
        &mut self,
        input: RunSessionInput,
        cancellation: &CancellationToken,
    ) -> Result<SessionSummary, RunSessionError> {
        self.execute_with_presenter(input, &NoPresenter, cancellation)
            .await
    }

    /// Execute the session loop until cancelled, out of time or out of cycles
    pub async fn execute_with_presenter(
        &mut self,
        input: RunSessionInput,
        presenter: &dyn SessionPresenter,
        cancellation: &CancellationToken,
    ) -> Result<SessionSummary, RunSessionError> {
        let RunSessionInput {
            config,
            timing,
            duration,
            max_cycles,
        } = input;

        if !timing.is_valid() {
            return Err(RunSessionError::InvalidPauseRange {
                min: timing.min_pause,
                max: timing.max_pause,
            });
        }

        let started = Instant::now();
        // A deadline past the clock's range is no deadline
        let deadline = duration.and_then(|d| started.checked_add(d));
        let mut summary = SessionSummary {
            cycles: 0,
            activities_run: 0,
            alerts_shown: 0,
            team_updates_shown: 0,
            elapsed: Duration::ZERO,
            stop_reason: StopReason::Cancelled,
        };

        info!(
            dev_type = %config.dev_type,
            complexity = %config.complexity,
            "Starting session"
        );
        presenter.on_session_start(&config);

        if timing.boot_sequence {
            run_script(boot_script(&config), &config, &timing, presenter, cancellation).await;
        }

        summary.stop_reason = loop {
            if cancellation.is_cancelled() {
                break StopReason::Cancelled;
            }
            if deadline.is_some_and(|d| Instant::now() >= d) {
                break StopReason::DurationElapsed;
            }
            if max_cycles.is_some_and(|max| summary.cycles >= max) {
                break StopReason::CycleLimit;
            }

            summary.cycles += 1;
            debug!(cycle = summary.cycles, "Starting cycle");

            let selected =
                sample_ordered(&mut self.rng, &Activity::ALL, config.activities_per_cycle());
            trace!(?selected, "Selected activities");

            let mut interrupted = false;
            for activity in selected {
                if should_stop(cancellation, deadline) {
                    interrupted = true;
                    break;
                }

                presenter.on_activity_start(activity);
                summary.activities_run += 1;
                let script = activity.script(&mut self.rng, &config);
                if run_script(script, &config, &timing, presenter, cancellation).await
                    == ScriptOutcome::Interrupted
                {
                    interrupted = true;
                    break;
                }

                let pause = timing.draw_pause(&mut self.rng);
                if pause_cancellable(pause, cancellation).await
                    || should_stop(cancellation, deadline)
                {
                    interrupted = true;
                    break;
                }
            }

            // No interjections once shutdown has begun
            if interrupted && cancellation.is_cancelled() {
                continue;
            }

            if config.alerts_enabled && self.rng.gen_bool(ALERT_PROBABILITY) {
                let alert = alerts::alert(&mut self.rng, config.dev_type);
                presenter.on_alert(&alert);
                summary.alerts_shown += 1;
            }

            if config.team_activity && self.rng.gen_bool(TEAM_ACTIVITY_PROBABILITY) {
                let message = alerts::team_activity(&mut self.rng);
                presenter.on_team_activity(&message);
                summary.team_updates_shown += 1;
            }
        };

        summary.elapsed = started.elapsed();
        info!(
            cycles = summary.cycles,
            activities = summary.activities_run,
            reason = ?summary.stop_reason,
            "Session ended"
        );
        presenter.on_session_end(&summary);

        Ok(summary)
    }
}

/// Interpret one script against the presenter.
///
/// Minimal output drops progress bars and detail lines.
async fn run_script(
    script: Vec<ActivityStep>,
    config: &SessionConfig,
    timing: &TimingConfig,
    presenter: &dyn SessionPresenter,
    cancellation: &CancellationToken,
) -> ScriptOutcome {
    for step in script {
        if cancellation.is_cancelled() {
            return ScriptOutcome::Interrupted;
        }
        match step {
            ActivityStep::Line(line) => {
                if config.minimal_output && line.tone.is_detail() {
                    continue;
                }
                presenter.on_line(&line);
            }
            ActivityStep::Progress { label, steps } => {
                if config.minimal_output {
                    continue;
                }
                presenter.on_progress_start(&label, steps);
                for _ in 0..steps {
                    if pause_cancellable(timing.progress_tick, cancellation).await {
                        presenter.on_progress_finish(false);
                        return ScriptOutcome::Interrupted;
                    }
                    presenter.on_progress_advance(1);
                }
                presenter.on_progress_finish(true);
            }
            ActivityStep::Pause(duration) => {
                if pause_cancellable(duration, cancellation).await {
                    return ScriptOutcome::Interrupted;
                }
            }
        }
    }
    ScriptOutcome::Completed
}
