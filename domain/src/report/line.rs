//! Styled output lines

use serde::{Deserialize, Serialize};
use std::fmt;

/// Semantic tone of a line; the presentation layer maps tones to colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    /// Activity title ("Analyzing code structure...")
    Heading,
    Info,
    Success,
    Warning,
    Critical,
    /// Secondary detail, dropped in minimal output
    Detail,
}

impl Tone {
    pub fn is_detail(&self) -> bool {
        matches!(self, Tone::Detail)
    }
}

/// One line of simulated output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportLine {
    pub tone: Tone,
    pub text: String,
}

impl ReportLine {
    pub fn new(tone: Tone, text: impl Into<String>) -> Self {
        Self {
            tone,
            text: text.into(),
        }
    }

    pub fn heading(text: impl Into<String>) -> Self {
        Self::new(Tone::Heading, text)
    }

    pub fn info(text: impl Into<String>) -> Self {
        Self::new(Tone::Info, text)
    }

    pub fn success(text: impl Into<String>) -> Self {
        Self::new(Tone::Success, text)
    }

    pub fn warning(text: impl Into<String>) -> Self {
        Self::new(Tone::Warning, text)
    }

    pub fn critical(text: impl Into<String>) -> Self {
        Self::new(Tone::Critical, text)
    }

    pub fn detail(text: impl Into<String>) -> Self {
        Self::new(Tone::Detail, text)
    }
}

impl fmt::Display for ReportLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}
