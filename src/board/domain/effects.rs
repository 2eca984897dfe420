//! Side effects produced by reconciling a move.

use super::ItemId;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Tone of a toast notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    /// The move was persisted.
    Success,
    /// The move was rejected and reverted.
    Error,
}

/// Auto-dismissing toast shown after a move resolves.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    /// Tone of the toast.
    pub kind: NotificationKind,
    /// Text shown to the user.
    pub message: String,
    /// Time until the toast dismisses itself.
    pub ttl: Duration,
}

impl Notification {
    /// Creates a success toast.
    #[must_use]
    pub fn success(message: impl Into<String>, ttl: Duration) -> Self {
        Self {
            kind: NotificationKind::Success,
            message: message.into(),
            ttl,
        }
    }

    /// Creates an error toast.
    #[must_use]
    pub fn error(message: impl Into<String>, ttl: Duration) -> Self {
        Self {
            kind: NotificationKind::Error,
            message: message.into(),
            ttl,
        }
    }
}

/// Viewport coordinates of a dropped card, in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ScreenPosition {
    /// Horizontal offset from the viewport's left edge.
    pub x: i32,
    /// Vertical offset from the viewport's top edge.
    pub y: i32,
}

impl ScreenPosition {
    /// Creates a screen position.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// One-shot celebration fired when a card reaches the success column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Celebration {
    /// Card that was completed.
    pub item_id: ItemId,
    /// Where the card was dropped, when the caller knows it.
    pub position: Option<ScreenPosition>,
    /// Time until the celebration dismisses itself.
    pub ttl: Duration,
}
