//! In-memory item repository with scripted update failures.

use async_trait::async_trait;
use std::collections::HashSet;
use std::sync::{Arc, PoisonError, RwLock};

use crate::board::{
    domain::{BucketKey, Item, ItemId},
    ports::{ItemRepository, ItemRepositoryError, ItemRepositoryResult},
};

/// Thread-safe in-memory item store.
///
/// Status updates succeed unless a failure has been scripted with
/// [`Self::fail_all_updates`] or [`Self::fail_updates_for`].
#[derive(Debug, Clone)]
pub struct InMemoryItemRepository<S: BucketKey> {
    state: Arc<RwLock<InMemoryItemState<S>>>,
}

#[derive(Debug)]
struct InMemoryItemState<S: BucketKey> {
    items: Vec<Item<S>>,
    failure: FailureMode,
    update_calls: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum FailureMode {
    Never,
    Always,
    ForItems(HashSet<ItemId>),
}

impl FailureMode {
    fn rejects(&self, id: &ItemId) -> bool {
        match self {
            Self::Never => false,
            Self::Always => true,
            Self::ForItems(ids) => ids.contains(id),
        }
    }
}

impl<S: BucketKey> Default for InMemoryItemRepository<S> {
    fn default() -> Self {
        Self::with_items(Vec::new())
    }
}

impl<S: BucketKey> InMemoryItemRepository<S> {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a repository holding `items` in the given order.
    #[must_use]
    pub fn with_items(items: impl IntoIterator<Item = Item<S>>) -> Self {
        Self {
            state: Arc::new(RwLock::new(InMemoryItemState {
                items: items.into_iter().collect(),
                failure: FailureMode::Never,
                update_calls: 0,
            })),
        }
    }

    /// Adds or replaces an item.
    ///
    /// # Errors
    ///
    /// Returns [`ItemRepositoryError::Persistence`] when the lock is
    /// poisoned.
    pub fn upsert(&self, item: Item<S>) -> ItemRepositoryResult<()> {
        let mut state = self.state.write().map_err(|err| {
            ItemRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        match state.items.iter_mut().find(|stored| stored.id() == item.id()) {
            Some(stored) => *stored = item,
            None => state.items.push(item),
        }
        Ok(())
    }

    /// Makes every subsequent status update fail.
    pub fn fail_all_updates(&self) {
        self.write_state().failure = FailureMode::Always;
    }

    /// Makes subsequent status updates for `id` fail.
    pub fn fail_updates_for(&self, id: ItemId) {
        let mut state = self.write_state();
        match &mut state.failure {
            FailureMode::ForItems(ids) => {
                ids.insert(id);
            }
            failure => *failure = FailureMode::ForItems(HashSet::from([id])),
        }
    }

    /// Lets every subsequent status update succeed.
    pub fn succeed_all_updates(&self) {
        self.write_state().failure = FailureMode::Never;
    }

    /// Returns how many status updates were attempted.
    #[must_use]
    pub fn update_calls(&self) -> usize {
        self.read_state().update_calls
    }

    /// Returns the stored status of `id`.
    #[must_use]
    pub fn status_of(&self, id: &ItemId) -> Option<S> {
        self.read_state()
            .items
            .iter()
            .find(|item| item.id() == id)
            .map(Item::status)
    }

    fn read_state(&self) -> std::sync::RwLockReadGuard<'_, InMemoryItemState<S>> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write_state(&self) -> std::sync::RwLockWriteGuard<'_, InMemoryItemState<S>> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }
}

#[async_trait]
impl<S: BucketKey> ItemRepository<S> for InMemoryItemRepository<S> {
    async fn fetch_all(&self) -> ItemRepositoryResult<Vec<Item<S>>> {
        let state = self.state.read().map_err(|err| {
            ItemRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        Ok(state.items.clone())
    }

    async fn update_status(&self, id: &ItemId, status: S) -> ItemRepositoryResult<()> {
        let mut state = self.state.write().map_err(|err| {
            ItemRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        state.update_calls = state.update_calls.saturating_add(1);
        if state.failure.rejects(id) {
            return Err(ItemRepositoryError::persistence(std::io::Error::other(
                format!("scripted failure updating item {id}"),
            )));
        }
        let item = state
            .items
            .iter_mut()
            .find(|item| item.id() == id)
            .ok_or_else(|| ItemRepositoryError::NotFound(id.clone()))?;
        item.reclassify(status);
        Ok(())
    }
}
