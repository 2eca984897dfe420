//! Bucket statuses for project and task boards.

use super::ParseStatusError;
use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use std::hash::Hash;

/// A closed status enumeration whose values name the columns of a board.
///
/// The derived `Ord` must follow column order so that boards iterate their
/// buckets left to right.
pub trait BucketKey: Copy + Eq + Ord + Hash + Debug + Send + Sync + 'static {
    /// Every bucket the board shows, in column order.
    const ALL: &'static [Self];

    /// Bucket whose arrival is celebrated.
    const TERMINAL_SUCCESS: Self;

    /// Returns the canonical storage representation.
    fn as_str(self) -> &'static str;

    /// Returns the human-readable column title.
    fn label(self) -> &'static str;

    /// Parses a storage or user-supplied status string.
    ///
    /// # Errors
    ///
    /// Returns [`ParseStatusError`] when the value names no bucket.
    fn parse(value: &str) -> Result<Self, ParseStatusError>;
}

/// Lowercases and folds `-` and spaces into `_`.
fn normalize(value: &str) -> String {
    value
        .trim()
        .chars()
        .map(|ch| match ch {
            '-' | ' ' => '_',
            other => other.to_ascii_lowercase(),
        })
        .collect()
}

/// Lifecycle status of a project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectStatus {
    /// Project is being scoped.
    Planning,
    /// Project is underway.
    Active,
    /// Project is paused.
    OnHold,
    /// Project has been delivered.
    Completed,
    /// Project is kept for reference only.
    Archived,
}

impl BucketKey for ProjectStatus {
    const ALL: &'static [Self] = &[
        Self::Planning,
        Self::Active,
        Self::OnHold,
        Self::Completed,
        Self::Archived,
    ];
    const TERMINAL_SUCCESS: Self = Self::Completed;

    fn as_str(self) -> &'static str {
        match self {
            Self::Planning => "planning",
            Self::Active => "active",
            Self::OnHold => "on_hold",
            Self::Completed => "completed",
            Self::Archived => "archived",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::Planning => "Planning",
            Self::Active => "Active",
            Self::OnHold => "On Hold",
            Self::Completed => "Completed",
            Self::Archived => "Archived",
        }
    }

    fn parse(value: &str) -> Result<Self, ParseStatusError> {
        match normalize(value).as_str() {
            "planning" => Ok(Self::Planning),
            "active" => Ok(Self::Active),
            "on_hold" => Ok(Self::OnHold),
            "completed" => Ok(Self::Completed),
            "archived" => Ok(Self::Archived),
            _ => Err(ParseStatusError(value.to_owned())),
        }
    }
}

impl TryFrom<&str> for ProjectStatus {
    type Error = ParseStatusError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

/// Progress status of a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    /// Task has not been started.
    Pending,
    /// Task is being worked on.
    InProgress,
    /// Task work is finished.
    Completed,
    /// Task has been checked by an officer.
    Verified,
}

impl BucketKey for TaskStatus {
    const ALL: &'static [Self] = &[
        Self::Pending,
        Self::InProgress,
        Self::Completed,
        Self::Verified,
    ];
    const TERMINAL_SUCCESS: Self = Self::Completed;

    fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::InProgress => "in_progress",
            Self::Completed => "completed",
            Self::Verified => "verified",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::InProgress => "In Progress",
            Self::Completed => "Completed",
            Self::Verified => "Verified",
        }
    }

    fn parse(value: &str) -> Result<Self, ParseStatusError> {
        match normalize(value).as_str() {
            "pending" => Ok(Self::Pending),
            "in_progress" => Ok(Self::InProgress),
            "completed" => Ok(Self::Completed),
            "verified" => Ok(Self::Verified),
            _ => Err(ParseStatusError(value.to_owned())),
        }
    }
}

impl TryFrom<&str> for TaskStatus {
    type Error = ParseStatusError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}
