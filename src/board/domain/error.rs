//! Error types for board domain validation and parsing.

use super::ItemId;
use thiserror::Error;

/// Errors returned by board state operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BoardDomainError {
    /// The item identifier is empty after trimming.
    #[error("item identifier must not be empty")]
    EmptyItemId,

    /// No bucket on the board holds the item.
    #[error("item not found on board: {0}")]
    ItemNotFound(ItemId),

    /// The item exists but is not in the bucket the move started from.
    #[error("item {item_id} is not in the '{bucket}' column")]
    ItemNotInBucket {
        /// Item the move referred to.
        item_id: ItemId,
        /// Bucket the move claimed as its source.
        bucket: &'static str,
    },
}

/// Errors returned while loading or validating a board configuration.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BoardConfigError {
    /// The configuration document could not be decoded.
    #[error("invalid board configuration: {0}")]
    Parse(String),

    /// A lifetime that must be visible to the user was configured as zero.
    #[error("{0} must be greater than zero")]
    ZeroLifetime(&'static str),
}

/// Error returned while parsing bucket statuses.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown status: {0}")]
pub struct ParseStatusError(pub String);

/// Error returned while parsing priority ranks.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown priority: {0}")]
pub struct ParsePriorityError(pub String);
