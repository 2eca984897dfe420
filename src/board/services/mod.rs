//! Application services for board synchronisation.

mod sync;

pub use sync::{BoardSyncError, BoardSyncResult, BoardSyncService, MoveReport, SharedBoard};
