//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid development type: {0}")]
    InvalidDevelopmentType(String),

    #[error("Invalid jargon level: {0}")]
    InvalidJargonLevel(String),

    #[error("Invalid complexity: {0}")]
    InvalidComplexity(String),
}

impl DomainError {
    /// The rejected input value
    pub fn value(&self) -> &str {
        match self {
            DomainError::InvalidDevelopmentType(v)
            | DomainError::InvalidJargonLevel(v)
            | DomainError::InvalidComplexity(v) => v,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let error = DomainError::InvalidComplexity("insane".to_string());
        assert_eq!(error.to_string(), "Invalid complexity: insane");
    }

    #[test]
    fn test_value_returns_rejected_input() {
        assert_eq!(
            DomainError::InvalidDevelopmentType("cobol".to_string()).value(),
            "cobol"
        );
        assert_eq!(
            DomainError::InvalidJargonLevel("max".to_string()).value(),
            "max"
        );
    }
}
