//! Timing parameters for the scheduler.
//!
//! [`TimingConfig`] groups the durations that control how fast the
//! [`RunSessionUseCase`](crate::use_cases::run_session::RunSessionUseCase)
//! prints. These are application-layer concerns, not domain policy.

use rand::Rng;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Scheduler pacing parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimingConfig {
    /// Lower bound of the pause between activities (inclusive).
    pub min_pause: Duration,
    /// Upper bound of the pause between activities (exclusive).
    pub max_pause: Duration,
    /// Interval between progress-bar ticks.
    pub progress_tick: Duration,
    /// Run the boot sequence before the first cycle.
    pub boot_sequence: bool,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            min_pause: Duration::from_millis(100),
            max_pause: Duration::from_millis(500),
            progress_tick: Duration::from_millis(20),
            boot_sequence: true,
        }
    }
}

impl TimingConfig {
    // ==================== Builder Methods ====================

    pub fn with_pause_range(mut self, min: Duration, max: Duration) -> Self {
        self.min_pause = min;
        self.max_pause = max;
        self
    }

    pub fn with_progress_tick(mut self, tick: Duration) -> Self {
        self.progress_tick = tick;
        self
    }

    pub fn with_boot_sequence(mut self, enabled: bool) -> Self {
        self.boot_sequence = enabled;
        self
    }

    /// Whether the pause range is usable (`min_pause <= max_pause`).
    pub fn is_valid(&self) -> bool {
        self.min_pause <= self.max_pause
    }

    /// Draw a pause uniformly from `[min_pause, max_pause)`.
    ///
    /// A degenerate range (`min == max`) always yields `min_pause`.
    pub fn draw_pause<R: Rng + ?Sized>(&self, rng: &mut R) -> Duration {
        let min = self.min_pause.as_millis() as u64;
        let max = self.max_pause.as_millis() as u64;
        if max <= min {
            return self.min_pause;
        }
        Duration::from_millis(rng.gen_range(min..max))
    }
}
