//! Content generators.
//!
//! Every generator is a pure function of a random source, a category
//! ([`DevelopmentType`](crate::DevelopmentType)) and sometimes a level. Tables
//! are exhaustive `match`es; a category with no entries maps to an empty
//! slice and the generator returns its literal fallback.

pub mod alerts;
pub mod code_analysis;
pub mod jargon;
pub mod metrics;
pub mod network;
pub mod system;
pub mod telemetry;
