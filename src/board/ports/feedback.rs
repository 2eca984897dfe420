//! Feedback port for toasts and celebrations.

use crate::board::domain::{Celebration, Notification};

/// Fire-and-forget sink for user-facing effects of a resolved move.
///
/// Implementations must not block; dismissal after the effect's `ttl` is
/// the sink's responsibility.
pub trait BoardFeedback: Send + Sync {
    /// Shows an auto-dismissing toast.
    fn notify(&self, notification: Notification);

    /// Fires a one-shot celebration.
    fn celebrate(&self, celebration: Celebration);
}
