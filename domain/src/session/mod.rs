//! Session model: the configuration axes of a simulated session.

pub mod config;
pub mod development_type;
pub mod levels;

pub use config::{DEFAULT_PROJECT_NAME, SessionConfig};
pub use development_type::DevelopmentType;
pub use levels::{Complexity, JargonLevel};
