//! Repository port for the authoritative item list and status updates.

use crate::board::domain::{BucketKey, Item, ItemId};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for item repository operations.
pub type ItemRepositoryResult<T> = Result<T, ItemRepositoryError>;

/// Backing store for board items.
#[async_trait]
pub trait ItemRepository<S: BucketKey>: Send + Sync {
    /// Returns the authoritative flat list of items.
    ///
    /// # Errors
    ///
    /// Returns [`ItemRepositoryError::Persistence`] when the store cannot be
    /// read.
    async fn fetch_all(&self) -> ItemRepositoryResult<Vec<Item<S>>>;

    /// Persists a new status for one item.
    ///
    /// This is the single remote call awaited per move.
    ///
    /// # Errors
    ///
    /// Returns [`ItemRepositoryError::NotFound`] when the store has no such
    /// item, or [`ItemRepositoryError::Persistence`] when the write fails.
    async fn update_status(&self, id: &ItemId, status: S) -> ItemRepositoryResult<()>;
}

/// Errors returned by item repository implementations.
#[derive(Debug, Clone, Error)]
pub enum ItemRepositoryError {
    /// The item was not found.
    #[error("item not found: {0}")]
    NotFound(ItemId),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl ItemRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
