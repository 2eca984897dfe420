//! Feedback adapter that emits `tracing` events.

use crate::board::{
    domain::{Celebration, Notification, NotificationKind},
    ports::BoardFeedback,
};
use tracing::{info, warn};

/// Feedback sink for headless consumers; writes effects to the log.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingFeedback;

impl BoardFeedback for TracingFeedback {
    fn notify(&self, notification: Notification) {
        match notification.kind {
            NotificationKind::Success => {
                info!(
                    message = %notification.message,
                    ttl = ?notification.ttl,
                    "board notification"
                );
            }
            NotificationKind::Error => {
                warn!(
                    message = %notification.message,
                    ttl = ?notification.ttl,
                    "board notification"
                );
            }
        }
    }

    fn celebrate(&self, celebration: Celebration) {
        info!(
            item_id = %celebration.item_id,
            position = ?celebration.position,
            ttl = ?celebration.ttl,
            "board celebration"
        );
    }
}
