//! Random selection primitives used by the content tables and the scheduler.

pub mod sample;
pub mod weighted;

pub use sample::sample_ordered;
pub use weighted::{WeightedTable, choose_or, pick_weighted};
