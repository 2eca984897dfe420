//! Priority ranks used as the secondary ordering key.

use super::ParsePriorityError;
use serde::{Deserialize, Serialize};

/// Priority of a card, lowest to highest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    /// Nice to have.
    Low,
    /// Normal priority.
    Medium,
    /// Should be picked up soon.
    High,
    /// Needs attention now. Project boards call this `critical`.
    #[serde(alias = "critical")]
    Urgent,
}

impl Priority {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
            Self::Urgent => "urgent",
        }
    }

    /// Returns the numeric rank; higher sorts first.
    #[must_use]
    pub const fn rank(self) -> u8 {
        match self {
            Self::Low => 1,
            Self::Medium => 2,
            Self::High => 3,
            Self::Urgent => 4,
        }
    }

    /// Returns the rank of an optional priority. Missing priorities rank 0.
    #[must_use]
    pub const fn rank_of(priority: Option<Self>) -> u8 {
        match priority {
            Some(value) => value.rank(),
            None => 0,
        }
    }

    /// Parses a priority where `""` and `"none"` mean no priority.
    ///
    /// # Errors
    ///
    /// Returns [`ParsePriorityError`] for unrecognised values.
    pub fn parse_optional(value: &str) -> Result<Option<Self>, ParsePriorityError> {
        let normalized = value.trim().to_ascii_lowercase();
        if normalized.is_empty() || normalized == "none" {
            return Ok(None);
        }
        Self::try_from(value).map(Some)
    }
}

impl TryFrom<&str> for Priority {
    type Error = ParsePriorityError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            "urgent" | "critical" => Ok(Self::Urgent),
            _ => Err(ParsePriorityError(value.to_owned())),
        }
    }
}
