//! Service layer that persists optimistic moves and reconciles them.

use crate::board::{
    domain::{
        BoardDomainError, BucketKey, Item, MoveOutcome, MoveRequest, Reconciliation, ReorderBoard,
    },
    ports::{BoardFeedback, ItemRepository, ItemRepositoryError},
};
use mockable::Clock;
use std::sync::{Arc, Mutex, MutexGuard, Weak};
use thiserror::Error;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

/// Board state shared between the UI and the sync service.
pub type SharedBoard<S, C> = Arc<Mutex<ReorderBoard<S, C>>>;

/// Service-level errors for board synchronisation.
///
/// A rejected status update is not an error here: it is reconciled by
/// reverting the move and reported through [`MoveReport::RolledBack`].
#[derive(Debug, Error)]
pub enum BoardSyncError {
    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] BoardDomainError),
    /// Fetching the authoritative item list failed.
    #[error(transparent)]
    Repository(#[from] ItemRepositoryError),
    /// A thread panicked while holding the board lock.
    #[error("board state lock poisoned")]
    LockPoisoned,
}

/// Result type for board sync operations.
pub type BoardSyncResult<T> = Result<T, BoardSyncError>;

/// Final report of one move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveReport<S> {
    /// Source and destination matched; no remote call was made.
    Unchanged,
    /// The store accepted the move.
    Confirmed(Reconciliation<S>),
    /// The store rejected the move and the board reverted it.
    RolledBack(Reconciliation<S>),
    /// The board was dropped or the ticket was already reconciled; nothing
    /// was applied.
    Stale,
}

/// Orchestrates optimistic moves against an item repository.
///
/// The service holds only a weak reference to the board, so a board torn
/// down while a status update is in flight turns reconciliation into a
/// no-op.
pub struct BoardSyncService<S, R, F, C>
where
    S: BucketKey,
    R: ItemRepository<S>,
    F: BoardFeedback,
    C: Clock + Send + Sync,
{
    board: Weak<Mutex<ReorderBoard<S, C>>>,
    repository: Arc<R>,
    feedback: Arc<F>,
}

impl<S, R, F, C> Clone for BoardSyncService<S, R, F, C>
where
    S: BucketKey,
    R: ItemRepository<S>,
    F: BoardFeedback,
    C: Clock + Send + Sync,
{
    fn clone(&self) -> Self {
        Self {
            board: Weak::clone(&self.board),
            repository: Arc::clone(&self.repository),
            feedback: Arc::clone(&self.feedback),
        }
    }
}

impl<S, R, F, C> BoardSyncService<S, R, F, C>
where
    S: BucketKey,
    R: ItemRepository<S>,
    F: BoardFeedback,
    C: Clock + Send + Sync,
{
    /// Creates a service bound to `board`.
    #[must_use]
    pub fn new(board: &SharedBoard<S, C>, repository: Arc<R>, feedback: Arc<F>) -> Self {
        Self {
            board: Arc::downgrade(board),
            repository,
            feedback,
        }
    }

    /// Reloads the authoritative item list and rebuilds the board.
    ///
    /// Returns the number of items on the board afterwards, or zero when the
    /// board no longer exists.
    ///
    /// # Errors
    ///
    /// Returns [`BoardSyncError::Repository`] when fetching fails, or
    /// [`BoardSyncError::LockPoisoned`] when the board lock is poisoned.
    pub async fn refresh(&self) -> BoardSyncResult<usize> {
        let items = self.repository.fetch_all().await?;
        self.apply_snapshot(items)
    }

    /// Rebuilds the board from an item list pushed by the backend.
    ///
    /// Returns the number of items on the board afterwards, or zero when the
    /// board no longer exists.
    ///
    /// # Errors
    ///
    /// Returns [`BoardSyncError::LockPoisoned`] when the board lock is
    /// poisoned.
    pub fn apply_snapshot(&self, items: Vec<Item<S>>) -> BoardSyncResult<usize> {
        let Some(board) = self.board.upgrade() else {
            debug!("dropping item snapshot for a board that no longer exists");
            return Ok(0);
        };
        let mut guard = lock_board(&board)?;
        guard.replace_items(items);
        Ok(guard.collection().len())
    }

    /// Moves a card optimistically and persists the new status.
    ///
    /// The board changes before the store is called. The store's answer
    /// either confirms the move or reverts it; feedback is dispatched in
    /// both cases. Persistence failures are absorbed here and never
    /// returned.
    ///
    /// # Errors
    ///
    /// Returns [`BoardSyncError::Domain`] when the card is missing or not in
    /// `request.from`, or [`BoardSyncError::LockPoisoned`] when the board
    /// lock is poisoned.
    pub async fn move_item(&self, request: MoveRequest<S>) -> BoardSyncResult<MoveReport<S>> {
        let pending = {
            let Some(board) = self.board.upgrade() else {
                debug!(
                    item_id = %request.item_id,
                    "ignoring move for a board that no longer exists"
                );
                return Ok(MoveReport::Stale);
            };
            let mut guard = lock_board(&board)?;
            match guard.begin_move(request)? {
                MoveOutcome::Unchanged => return Ok(MoveReport::Unchanged),
                MoveOutcome::Started(pending) => pending,
            }
        };

        let outcome = self
            .repository
            .update_status(&pending.item_id, pending.to)
            .await;

        let Some(board) = self.board.upgrade() else {
            debug!(ticket = %pending.ticket, "board dropped before move resolved");
            return Ok(MoveReport::Stale);
        };
        let reconciliation = {
            let mut guard = lock_board(&board)?;
            match &outcome {
                Ok(()) => guard.reconcile_success(pending.ticket),
                Err(err) => {
                    warn!(ticket = %pending.ticket, error = %err, "status update failed");
                    guard.reconcile_failure(pending.ticket)
                }
            }
        };
        let Some(reconciliation) = reconciliation else {
            return Ok(MoveReport::Stale);
        };

        self.dispatch(&reconciliation);
        Ok(if outcome.is_ok() {
            MoveReport::Confirmed(reconciliation)
        } else {
            MoveReport::RolledBack(reconciliation)
        })
    }

    /// Runs [`Self::move_item`] on the Tokio runtime without awaiting it.
    ///
    /// The board reflects the move as soon as the spawned task first runs.
    #[must_use]
    pub fn spawn_move(&self, request: MoveRequest<S>) -> JoinHandle<BoardSyncResult<MoveReport<S>>>
    where
        R: 'static,
        F: 'static,
        C: 'static,
    {
        let service = self.clone();
        tokio::spawn(async move { service.move_item(request).await })
    }

    fn dispatch(&self, reconciliation: &Reconciliation<S>) {
        self.feedback.notify(reconciliation.notification.clone());
        if let Some(celebration) = &reconciliation.celebration {
            self.feedback.celebrate(celebration.clone());
        }
    }
}

fn lock_board<S: BucketKey, C: Clock>(
    board: &Mutex<ReorderBoard<S, C>>,
) -> BoardSyncResult<MutexGuard<'_, ReorderBoard<S, C>>> {
    board.lock().map_err(|_| BoardSyncError::LockPoisoned)
}
