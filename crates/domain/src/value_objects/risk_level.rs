//! Categorical risk level

use serde::{Deserialize, Serialize};
use std::fmt;

/// Categorical risk level derived from a numeric risk score
///
/// Ordering follows severity: `Low < Medium < High`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum RiskLevel {
    /// Score below 12
    Low,
    /// Score in [12, 18)
    Medium,
    /// Score of 18 or above
    High,
}

impl RiskLevel {
    /// Categorize a numeric score, thresholds inclusive on the lower bound
    #[must_use]
    pub fn from_score(score: f64) -> Self {
        if score >= 18.0 {
            Self::High
        } else if score >= 12.0 {
            Self::Medium
        } else {
            Self::Low
        }
    }

    /// The level name as used in the summary artifact
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }

    /// All levels in fixed presentation order (Low, Medium, High)
    #[must_use]
    pub const fn all() -> [Self; 3] {
        [Self::Low, Self::Medium, Self::High]
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for RiskLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Low" => Ok(Self::Low),
            "Medium" => Ok(Self::Medium),
            "High" => Ok(Self::High),
            _ => Err(format!("Unrecognized risk level: {s}")),
        }
    }
}
