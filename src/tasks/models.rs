//! Task model types.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

/// Task urgency levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize)]
pub enum Urgency {
    /// Low urgency (default).
    #[default]
    Low,
    /// Medium urgency.
    Medium,
    /// High urgency.
    High,
}

impl Urgency {
    /// Parse an urgency from a string.
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not a valid urgency.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Result<Self, InvalidUrgency> {
        match s.to_lowercase().as_str() {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            _ => Err(InvalidUrgency(s.to_string())),
        }
    }

    /// Get the string representation of the urgency, as it appears in the
    /// encoded task record.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }
}

impl std::fmt::Display for Urgency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Error when an invalid urgency string is provided.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidUrgency(pub String);

impl std::fmt::Display for InvalidUrgency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "invalid urgency: '{}' (must be one of: low, medium, high)", self.0)
    }
}

impl std::error::Error for InvalidUrgency {}

/// A task in the to-do list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Short title describing the task. Never empty.
    pub title: String,
    /// How urgent the task is.
    pub urgency: Urgency,
    /// Calendar date the task is due.
    pub due_date: NaiveDate,
    /// Time of day the task is due.
    pub due_time: NaiveTime,
    /// Whether the task has been completed.
    pub completed: bool,
}
