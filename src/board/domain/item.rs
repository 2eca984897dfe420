//! Board items: the cards of project and task boards.

use super::{ItemId, Priority, ProjectStatus, TaskStatus};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A card on a board, classified into a bucket by its status.
///
/// Display attributes (name, description, assignees, and so on) travel in
/// the opaque `payload`; the board never inspects them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item<S> {
    id: ItemId,
    status: S,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    due_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    priority: Option<Priority>,
    #[serde(default)]
    payload: Value,
}

/// A card on the projects board.
pub type Project = Item<ProjectStatus>;

/// A card on a task board.
pub type Task = Item<TaskStatus>;

impl<S: Copy> Item<S> {
    /// Creates an item with no due date, no priority, and an empty payload.
    #[must_use]
    pub const fn new(id: ItemId, status: S) -> Self {
        Self {
            id,
            status,
            due_at: None,
            priority: None,
            payload: Value::Null,
        }
    }

    /// Sets the due timestamp.
    #[must_use]
    pub const fn with_due_at(mut self, due_at: DateTime<Utc>) -> Self {
        self.due_at = Some(due_at);
        self
    }

    /// Sets the priority.
    #[must_use]
    pub const fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Sets the opaque display payload.
    #[must_use]
    pub fn with_payload(mut self, payload: Value) -> Self {
        self.payload = payload;
        self
    }

    /// Returns the item identifier.
    #[must_use]
    pub const fn id(&self) -> &ItemId {
        &self.id
    }

    /// Returns the status that selects the item's bucket.
    #[must_use]
    pub const fn status(&self) -> S {
        self.status
    }

    /// Returns the due timestamp, if any.
    #[must_use]
    pub const fn due_at(&self) -> Option<DateTime<Utc>> {
        self.due_at
    }

    /// Returns the priority, if any.
    #[must_use]
    pub const fn priority(&self) -> Option<Priority> {
        self.priority
    }

    /// Returns the opaque display payload.
    #[must_use]
    pub const fn payload(&self) -> &Value {
        &self.payload
    }

    /// Returns whether the due timestamp lies strictly before `now`.
    #[must_use]
    pub fn is_overdue(&self, now: DateTime<Utc>) -> bool {
        self.due_at.is_some_and(|due_at| due_at < now)
    }

    pub(crate) const fn reclassify(&mut self, status: S) {
        self.status = status;
    }
}
