//! Domain model for optimistic board reordering.
//!
//! The board domain groups items into status buckets, orders each bucket by
//! urgency, and tracks in-flight moves. All infrastructure concerns (remote
//! persistence, toasts, animations) stay outside the domain boundary and are
//! described here only as effect values.

mod collection;
mod config;
mod effects;
mod engine;
mod error;
mod ids;
mod item;
mod ordering;
mod priority;
mod status;

pub use collection::{BucketSummary, Collection};
pub use config::BoardConfig;
pub use effects::{Celebration, Notification, NotificationKind, ScreenPosition};
pub use engine::{
    MoveOutcome, MoveRequest, PendingMove, Reconciliation, ReconciliationKind, ReorderBoard,
};
pub use error::{BoardConfigError, BoardDomainError, ParsePriorityError, ParseStatusError};
pub use ids::{ItemId, MoveTicket};
pub use item::{Item, Project, Task};
pub use ordering::{OrderingKey, is_policy_ordered, ordering_key, sort_bucket};
pub use priority::Priority;
pub use status::{BucketKey, ProjectStatus, TaskStatus};
