//! Feedback sink that records effects for later inspection.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::board::{
    domain::{Celebration, Notification, NotificationKind},
    ports::BoardFeedback,
};

/// Thread-safe recorder of notifications and celebrations.
#[derive(Debug, Clone, Default)]
pub struct RecordingFeedback {
    state: Arc<Mutex<RecordedFeedback>>,
}

#[derive(Debug, Default)]
struct RecordedFeedback {
    notifications: Vec<Notification>,
    celebrations: Vec<Celebration>,
}

impl RecordingFeedback {
    /// Creates an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns every notification received, oldest first.
    #[must_use]
    pub fn notifications(&self) -> Vec<Notification> {
        self.lock().notifications.clone()
    }

    /// Returns every celebration received, oldest first.
    #[must_use]
    pub fn celebrations(&self) -> Vec<Celebration> {
        self.lock().celebrations.clone()
    }

    /// Counts notifications of the given kind.
    #[must_use]
    pub fn count(&self, kind: NotificationKind) -> usize {
        self.lock()
            .notifications
            .iter()
            .filter(|notification| notification.kind == kind)
            .count()
    }

    fn lock(&self) -> MutexGuard<'_, RecordedFeedback> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl BoardFeedback for RecordingFeedback {
    fn notify(&self, notification: Notification) {
        self.lock().notifications.push(notification);
    }

    fn celebrate(&self, celebration: Celebration) {
        self.lock().celebrations.push(celebration);
    }
}
