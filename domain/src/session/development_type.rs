//! Development type: the flavor axis of a session.
//!
//! The development type selects which string tables the content generators
//! draw from. Every table is an exhaustive `match` over this enum, so adding a
//! variant forces every table to decide what the new category prints.

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Which kind of engineering work the session pretends to be doing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DevelopmentType {
    #[default]
    Backend,
    Frontend,
    Fullstack,
    DataScience,
    DevOps,
    Blockchain,
    MachineLearning,
    SystemsProgramming,
    GameDevelopment,
    Security,
    Mobile,
}

impl DevelopmentType {
    /// All development types, in declaration order
    pub const ALL: [DevelopmentType; 11] = [
        DevelopmentType::Backend,
        DevelopmentType::Frontend,
        DevelopmentType::Fullstack,
        DevelopmentType::DataScience,
        DevelopmentType::DevOps,
        DevelopmentType::Blockchain,
        DevelopmentType::MachineLearning,
        DevelopmentType::SystemsProgramming,
        DevelopmentType::GameDevelopment,
        DevelopmentType::Security,
        DevelopmentType::Mobile,
    ];

    /// Get a human-readable name for display
    pub fn display_name(&self) -> &'static str {
        match self {
            DevelopmentType::Backend => "Backend",
            DevelopmentType::Frontend => "Frontend",
            DevelopmentType::Fullstack => "Full Stack",
            DevelopmentType::DataScience => "Data Science",
            DevelopmentType::DevOps => "DevOps",
            DevelopmentType::Blockchain => "Blockchain",
            DevelopmentType::MachineLearning => "Machine Learning",
            DevelopmentType::SystemsProgramming => "Systems Programming",
            DevelopmentType::GameDevelopment => "Game Development",
            DevelopmentType::Security => "Security",
            DevelopmentType::Mobile => "Mobile",
        }
    }

    /// Whether this type deals with data pipelines (affects unit selection)
    pub fn is_data_oriented(&self) -> bool {
        matches!(
            self,
            DevelopmentType::DataScience | DevelopmentType::MachineLearning
        )
    }
}

impl fmt::Display for DevelopmentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DevelopmentType::Backend => "backend",
            DevelopmentType::Frontend => "frontend",
            DevelopmentType::Fullstack => "fullstack",
            DevelopmentType::DataScience => "data-science",
            DevelopmentType::DevOps => "dev-ops",
            DevelopmentType::Blockchain => "blockchain",
            DevelopmentType::MachineLearning => "machine-learning",
            DevelopmentType::SystemsProgramming => "systems-programming",
            DevelopmentType::GameDevelopment => "game-development",
            DevelopmentType::Security => "security",
            DevelopmentType::Mobile => "mobile",
        };
        write!(f, "{}", name)
    }
}

impl std::str::FromStr for DevelopmentType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace(['_', ' '], "-");
        match normalized.as_str() {
            "backend" | "be" => Ok(DevelopmentType::Backend),
            "frontend" | "fe" => Ok(DevelopmentType::Frontend),
            "fullstack" | "full-stack" | "fs" => Ok(DevelopmentType::Fullstack),
            "data-science" | "datascience" | "ds" => Ok(DevelopmentType::DataScience),
            "dev-ops" | "devops" | "ops" => Ok(DevelopmentType::DevOps),
            "blockchain" | "web3" => Ok(DevelopmentType::Blockchain),
            "machine-learning" | "machinelearning" | "ml" => {
                Ok(DevelopmentType::MachineLearning)
            }
            "systems-programming" | "systems" | "sys" => Ok(DevelopmentType::SystemsProgramming),
            "game-development" | "gamedev" | "game" => Ok(DevelopmentType::GameDevelopment),
            "security" | "sec" => Ok(DevelopmentType::Security),
            "mobile" | "mob" => Ok(DevelopmentType::Mobile),
            _ => Err(DomainError::InvalidDevelopmentType(s.to_string())),
        }
    }
}
