//! Timing configuration for board feedback.

use super::BoardConfigError;
use serde::{Deserialize, Serialize};
use std::time::Duration;

const DEFAULT_ANIMATION_COOLDOWN_MS: u64 = 500;
const DEFAULT_NOTIFICATION_TTL_MS: u64 = 3_000;
const DEFAULT_CELEBRATION_TTL_MS: u64 = 3_000;

/// Board timing configuration.
///
/// Missing fields fall back to their defaults when decoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BoardConfig {
    /// How long a moved card stays flagged as animating, in milliseconds.
    pub animation_cooldown_ms: u64,
    /// How long a toast stays visible, in milliseconds.
    pub notification_ttl_ms: u64,
    /// How long a celebration stays visible, in milliseconds.
    pub celebration_ttl_ms: u64,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            animation_cooldown_ms: DEFAULT_ANIMATION_COOLDOWN_MS,
            notification_ttl_ms: DEFAULT_NOTIFICATION_TTL_MS,
            celebration_ttl_ms: DEFAULT_CELEBRATION_TTL_MS,
        }
    }
}

impl BoardConfig {
    /// Creates a configuration without the post-move animation window.
    ///
    /// Useful for headless consumers that never render a drag animation.
    #[must_use]
    pub const fn instant() -> Self {
        Self {
            animation_cooldown_ms: 0,
            notification_ttl_ms: DEFAULT_NOTIFICATION_TTL_MS,
            celebration_ttl_ms: DEFAULT_CELEBRATION_TTL_MS,
        }
    }

    /// Decodes and validates a JSON configuration document.
    ///
    /// # Errors
    ///
    /// Returns [`BoardConfigError::Parse`] for malformed JSON or unknown
    /// fields, and [`BoardConfigError::ZeroLifetime`] when validation fails.
    pub fn from_json(raw: &str) -> Result<Self, BoardConfigError> {
        let config: Self =
            serde_json::from_str(raw).map_err(|err| BoardConfigError::Parse(err.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Checks that user-visible lifetimes are non-zero.
    ///
    /// # Errors
    ///
    /// Returns [`BoardConfigError::ZeroLifetime`] naming the offending field.
    pub const fn validate(&self) -> Result<(), BoardConfigError> {
        if self.notification_ttl_ms == 0 {
            return Err(BoardConfigError::ZeroLifetime("notification_ttl_ms"));
        }
        if self.celebration_ttl_ms == 0 {
            return Err(BoardConfigError::ZeroLifetime("celebration_ttl_ms"));
        }
        Ok(())
    }

    /// Returns the animation window after a move.
    #[must_use]
    pub const fn animation_cooldown(&self) -> Duration {
        Duration::from_millis(self.animation_cooldown_ms)
    }

    /// Returns the toast lifetime.
    #[must_use]
    pub const fn notification_ttl(&self) -> Duration {
        Duration::from_millis(self.notification_ttl_ms)
    }

    /// Returns the celebration lifetime.
    #[must_use]
    pub const fn celebration_ttl(&self) -> Duration {
        Duration::from_millis(self.celebration_ttl_ms)
    }
}
