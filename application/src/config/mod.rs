//! Application-level configuration.
//!
//! - [`TimingConfig`]: scheduler pacing (pauses, progress ticks, boot sequence)

pub mod timing;

pub use timing::TimingConfig;
