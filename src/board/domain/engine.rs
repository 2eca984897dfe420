//! Board state container with optimistic moves and reconciliation.

use super::{
    BoardConfig, BoardDomainError, BucketKey, BucketSummary, Celebration, Collection, Item,
    ItemId, MoveTicket, Notification, ScreenPosition,
};
use chrono::{DateTime, TimeDelta, Utc};
use mockable::Clock;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// A user request to move a card between columns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveRequest<S> {
    /// Card being moved.
    pub item_id: ItemId,
    /// Column the drag started from.
    pub from: S,
    /// Column the card was dropped on.
    pub to: S,
    /// Drop location, used to place the celebration.
    pub position: Option<ScreenPosition>,
}

impl<S> MoveRequest<S> {
    /// Creates a move request without a drop location.
    #[must_use]
    pub const fn new(item_id: ItemId, from: S, to: S) -> Self {
        Self {
            item_id,
            from,
            to,
            position: None,
        }
    }

    /// Records where the card was dropped.
    #[must_use]
    pub const fn dropped_at(mut self, position: ScreenPosition) -> Self {
        self.position = Some(position);
        self
    }
}

/// A move that has been applied locally and awaits the store's answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingMove<S> {
    /// Ticket used to reconcile this move.
    pub ticket: MoveTicket,
    /// Card that moved.
    pub item_id: ItemId,
    /// Column the card left.
    pub from: S,
    /// Column the card now sits in.
    pub to: S,
    /// Index the card held in its source column.
    pub source_index: usize,
    /// Drop location, if known.
    pub position: Option<ScreenPosition>,
}

/// Result of asking the board to start a move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveOutcome<S> {
    /// Source and destination match; nothing changed and nothing is owed
    /// to the store.
    Unchanged,
    /// The move was applied locally; persist it and reconcile the ticket.
    Started(PendingMove<S>),
}

/// How reconciliation treated the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReconciliationKind {
    /// The store accepted the move; the local state stands.
    Confirmed,
    /// The store rejected the move; the card went back to its source.
    Reverted,
    /// The store rejected the move but the card is no longer on the board.
    RevertSkipped,
}

/// Effects owed to the user once a move resolves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reconciliation<S> {
    /// The move that resolved.
    pub pending: PendingMove<S>,
    /// What happened to the board.
    pub kind: ReconciliationKind,
    /// Toast to show.
    pub notification: Notification,
    /// Celebration to fire, if the card reached the success column.
    pub celebration: Option<Celebration>,
}

/// Externally owned board state for one collection type.
///
/// The board applies moves immediately and keeps each in-flight move under
/// a [`MoveTicket`]. Moves are not serialised per item: a second move of
/// the same card applies on top of the first, and each ticket reconciles
/// independently in whatever order the store answers.
#[derive(Debug)]
pub struct ReorderBoard<S: BucketKey, C: Clock> {
    collection: Collection<S>,
    config: BoardConfig,
    clock: Arc<C>,
    animating: HashMap<ItemId, DateTime<Utc>>,
    pending: HashMap<MoveTicket, PendingMove<S>>,
    next_ticket: u64,
}

impl<S: BucketKey, C: Clock> ReorderBoard<S, C> {
    /// Creates an empty board.
    #[must_use]
    pub fn new(clock: Arc<C>, config: BoardConfig) -> Self {
        Self {
            collection: Collection::empty(),
            config,
            clock,
            animating: HashMap::new(),
            pending: HashMap::new(),
            next_ticket: 0,
        }
    }

    /// Creates a board grouped from an initial item list.
    #[must_use]
    pub fn with_items(
        items: impl IntoIterator<Item = Item<S>>,
        clock: Arc<C>,
        config: BoardConfig,
    ) -> Self {
        let mut board = Self::new(clock, config);
        board.replace_items(items);
        board
    }

    /// Returns the current bucketed items.
    ///
    /// Buckets are ordered as of the last mutation. Call
    /// [`Self::refresh_order`] first, or use [`Self::snapshot`], when due
    /// dates may have passed since then.
    #[must_use]
    pub const fn collection(&self) -> &Collection<S> {
        &self.collection
    }

    /// Returns an owned copy of the bucketed items, ordered at the current
    /// time.
    #[must_use]
    pub fn snapshot(&self) -> Collection<S> {
        let mut snapshot = self.collection.clone();
        snapshot.resort(self.clock.utc());
        snapshot
    }

    /// Re-applies the ordering policy to every bucket at the current time.
    ///
    /// Renderers that keep a board open across due dates call this on a
    /// timer.
    pub fn refresh_order(&mut self) {
        self.collection.resort(self.clock.utc());
    }

    /// Returns the board configuration.
    #[must_use]
    pub const fn config(&self) -> &BoardConfig {
        &self.config
    }

    /// Returns column header data at the current time.
    #[must_use]
    pub fn summaries(&self) -> Vec<BucketSummary<S>> {
        self.collection.summaries(self.clock.utc())
    }

    /// Returns the number of moves awaiting reconciliation.
    #[must_use]
    pub fn pending_moves(&self) -> usize {
        self.pending.len()
    }

    /// Returns whether `ticket` still awaits reconciliation.
    #[must_use]
    pub fn is_pending(&self, ticket: MoveTicket) -> bool {
        self.pending.contains_key(&ticket)
    }

    /// Rebuilds the buckets from an authoritative item list.
    ///
    /// In-flight tickets survive the rebuild and reconcile against the new
    /// state.
    pub fn replace_items(&mut self, items: impl IntoIterator<Item = Item<S>>) {
        self.collection = Collection::group(items, self.clock.utc());
        info!(items = self.collection.len(), "rebuilt board from item list");
    }

    /// Returns whether `id` is inside its post-move animation window.
    #[must_use]
    pub fn is_animating(&self, id: &ItemId) -> bool {
        let now = self.clock.utc();
        self.animating.get(id).is_some_and(|until| now < *until)
    }

    /// Returns whether the UI should let the user start dragging `id`.
    #[must_use]
    pub fn can_drag(&self, id: &ItemId) -> bool {
        self.collection.get(id).is_some() && !self.is_animating(id)
    }

    /// Applies a move locally, before the store has confirmed it.
    ///
    /// Moving a card onto its own column returns [`MoveOutcome::Unchanged`]
    /// without touching the board. Otherwise the card is rewritten to the
    /// destination status, inserted at its policy position, and flagged as
    /// animating.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::ItemNotFound`] when no bucket holds the
    /// card, or [`BoardDomainError::ItemNotInBucket`] when the card sits in
    /// a different bucket than `request.from`.
    pub fn begin_move(
        &mut self,
        request: MoveRequest<S>,
    ) -> Result<MoveOutcome<S>, BoardDomainError> {
        if request.from == request.to {
            debug!(
                item_id = %request.item_id,
                bucket = request.from.as_str(),
                "ignoring move onto the same column"
            );
            return Ok(MoveOutcome::Unchanged);
        }

        let now = self.clock.utc();
        self.collection.resort(now);
        let Some((source_index, mut item)) = self.collection.remove(request.from, &request.item_id)
        else {
            return Err(self.missing_item_error(request.item_id, request.from));
        };
        item.reclassify(request.to);
        self.collection.insert_sorted(item, now);
        self.start_animation(&request.item_id, now);

        let ticket = self.issue_ticket();
        let pending = PendingMove {
            ticket,
            item_id: request.item_id,
            from: request.from,
            to: request.to,
            source_index,
            position: request.position,
        };
        self.pending.insert(ticket, pending.clone());
        info!(
            %ticket,
            item_id = %pending.item_id,
            from = pending.from.as_str(),
            to = pending.to.as_str(),
            "applied optimistic move"
        );
        Ok(MoveOutcome::Started(pending))
    }

    /// Finalises a move the store accepted.
    ///
    /// Returns `None` when the ticket is unknown, for example because it was
    /// already reconciled.
    pub fn reconcile_success(&mut self, ticket: MoveTicket) -> Option<Reconciliation<S>> {
        let Some(pending) = self.pending.remove(&ticket) else {
            debug!(%ticket, "ignoring reconciliation for unknown move");
            return None;
        };
        self.refresh_order();

        let celebration = (pending.to == S::TERMINAL_SUCCESS
            && pending.from != S::TERMINAL_SUCCESS)
            .then(|| Celebration {
                item_id: pending.item_id.clone(),
                position: pending.position,
                ttl: self.config.celebration_ttl(),
            });
        let notification = Notification::success(
            format!("Moved to {}", pending.to.label()),
            self.config.notification_ttl(),
        );
        info!(%ticket, item_id = %pending.item_id, "move confirmed");

        Some(Reconciliation {
            pending,
            kind: ReconciliationKind::Confirmed,
            notification,
            celebration,
        })
    }

    /// Reverts a move the store rejected.
    ///
    /// The card is taken from wherever it currently sits and returned to the
    /// move's source column with its source status. When nothing else
    /// changed, the source column regains its exact previous order. Returns
    /// `None` when the ticket is unknown.
    pub fn reconcile_failure(&mut self, ticket: MoveTicket) -> Option<Reconciliation<S>> {
        let Some(pending) = self.pending.remove(&ticket) else {
            debug!(%ticket, "ignoring reconciliation for unknown move");
            return None;
        };

        let now = self.clock.utc();
        self.collection.resort(now);
        let kind = match self.collection.take(&pending.item_id) {
            Some(mut item) => {
                item.reclassify(pending.from);
                self.collection.insert_near(item, pending.source_index, now);
                warn!(
                    %ticket,
                    item_id = %pending.item_id,
                    to = pending.from.as_str(),
                    "move rejected, reverted"
                );
                ReconciliationKind::Reverted
            }
            None => {
                warn!(
                    %ticket,
                    item_id = %pending.item_id,
                    "move rejected for an item no longer on the board"
                );
                ReconciliationKind::RevertSkipped
            }
        };
        let notification = Notification::error(
            format!("Failed to move to {}", pending.to.label()),
            self.config.notification_ttl(),
        );

        Some(Reconciliation {
            pending,
            kind,
            notification,
            celebration: None,
        })
    }

    fn missing_item_error(&self, item_id: ItemId, from: S) -> BoardDomainError {
        if self.collection.get(&item_id).is_some() {
            BoardDomainError::ItemNotInBucket {
                item_id,
                bucket: from.as_str(),
            }
        } else {
            BoardDomainError::ItemNotFound(item_id)
        }
    }

    fn start_animation(&mut self, id: &ItemId, now: DateTime<Utc>) {
        self.animating.retain(|_, until| now < *until);
        let cooldown_ms = i64::try_from(self.config.animation_cooldown_ms).unwrap_or(i64::MAX);
        let until = TimeDelta::try_milliseconds(cooldown_ms)
            .and_then(|cooldown| now.checked_add_signed(cooldown))
            .unwrap_or(DateTime::<Utc>::MAX_UTC);
        self.animating.insert(id.clone(), until);
    }

    fn issue_ticket(&mut self) -> MoveTicket {
        self.next_ticket = self.next_ticket.wrapping_add(1);
        MoveTicket::new(self.next_ticket)
    }
}
