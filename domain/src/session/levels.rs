//! Ordered level axes: [`JargonLevel`] and [`Complexity`].
//!
//! Both are ranked (`Ord`), so "more" comparisons read naturally:
//! `level >= JargonLevel::High`.

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// How much technical jargon is mixed into the output.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum JargonLevel {
    Low,
    #[default]
    Medium,
    High,
    Extreme,
}

impl JargonLevel {
    pub const ALL: [JargonLevel; 4] = [
        JargonLevel::Low,
        JargonLevel::Medium,
        JargonLevel::High,
        JargonLevel::Extreme,
    ];
}

impl fmt::Display for JargonLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JargonLevel::Low => write!(f, "low"),
            JargonLevel::Medium => write!(f, "medium"),
            JargonLevel::High => write!(f, "high"),
            JargonLevel::Extreme => write!(f, "extreme"),
        }
    }
}

impl std::str::FromStr for JargonLevel {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "low" | "l" => Ok(JargonLevel::Low),
            "medium" | "med" | "m" => Ok(JargonLevel::Medium),
            "high" | "h" => Ok(JargonLevel::High),
            "extreme" | "x" => Ok(JargonLevel::Extreme),
            _ => Err(DomainError::InvalidJargonLevel(s.to_string())),
        }
    }
}

/// How busy the simulated session looks.
///
/// Complexity controls how many activities run per scheduler cycle.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Complexity {
    Low,
    #[default]
    Medium,
    High,
    Extreme,
}

impl Complexity {
    pub const ALL: [Complexity; 4] = [
        Complexity::Low,
        Complexity::Medium,
        Complexity::High,
        Complexity::Extreme,
    ];

    /// Number of activities executed per cycle
    pub fn activity_count(&self) -> usize {
        match self {
            Complexity::Low => 1,
            Complexity::Medium => 2,
            Complexity::High => 3,
            Complexity::Extreme => 4,
        }
    }
}

impl fmt::Display for Complexity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Complexity::Low => write!(f, "low"),
            Complexity::Medium => write!(f, "medium"),
            Complexity::High => write!(f, "high"),
            Complexity::Extreme => write!(f, "extreme"),
        }
    }
}

impl std::str::FromStr for Complexity {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "low" | "l" => Ok(Complexity::Low),
            "medium" | "med" | "m" => Ok(Complexity::Medium),
            "high" | "h" => Ok(Complexity::High),
            "extreme" | "x" => Ok(Complexity::Extreme),
            _ => Err(DomainError::InvalidComplexity(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_activity_count_in_range_and_monotonic() {
        let counts: Vec<usize> = Complexity::ALL.iter().map(|c| c.activity_count()).collect();
        assert_eq!(counts, vec![1, 2, 3, 4]);
        for pair in counts.windows(2) {
            assert!(pair[0] <= pair[1]);
        }
    }

    #[test]
    fn test_complexity_ordering() {
        assert!(Complexity::Low < Complexity::Medium);
        assert!(Complexity::High < Complexity::Extreme);
    }

    #[test]
    fn test_jargon_ordering() {
        assert!(JargonLevel::Extreme >= JargonLevel::High);
        assert!(JargonLevel::Low < JargonLevel::Medium);
    }

    #[test]
    fn test_from_str_roundtrip() {
        for level in JargonLevel::ALL {
            assert_eq!(level.to_string().parse::<JargonLevel>().unwrap(), level);
        }
        for complexity in Complexity::ALL {
            assert_eq!(
                complexity.to_string().parse::<Complexity>().unwrap(),
                complexity
            );
        }
    }

    #[test]
    fn test_from_str_invalid() {
        assert!("ultra".parse::<Complexity>().is_err());
        assert!("".parse::<JargonLevel>().is_err());
    }

    #[test]
    fn test_defaults_are_medium() {
        assert_eq!(Complexity::default(), Complexity::Medium);
        assert_eq!(JargonLevel::default(), JargonLevel::Medium);
    }

    #[test]
    fn test_serde_lowercase() {
        let json = serde_json::to_string(&Complexity::Extreme).unwrap();
        assert_eq!(json, "\"extreme\"");
    }
}
