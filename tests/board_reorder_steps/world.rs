//! Shared world state for board reorder BDD scenarios.

use std::sync::{Arc, Mutex};

use hubboard::board::{
    adapters::memory::{InMemoryItemRepository, RecordingFeedback},
    domain::{BoardConfig, ProjectStatus, ReorderBoard},
    services::{BoardSyncError, BoardSyncService, MoveReport, SharedBoard},
};
use mockable::DefaultClock;
use rstest::fixture;

/// Service type used by the BDD world.
pub type TestBoardService = BoardSyncService<
    ProjectStatus,
    InMemoryItemRepository<ProjectStatus>,
    RecordingFeedback,
    DefaultClock,
>;

/// Scenario world for board reorder behaviour tests.
pub struct BoardWorld {
    pub board: SharedBoard<ProjectStatus, DefaultClock>,
    pub repository: Arc<InMemoryItemRepository<ProjectStatus>>,
    pub feedback: Arc<RecordingFeedback>,
    pub service: TestBoardService,
    pub last_move_result: Option<Result<MoveReport<ProjectStatus>, BoardSyncError>>,
}

impl BoardWorld {
    /// Creates a world with an empty board and store.
    #[must_use]
    pub fn new() -> Self {
        let board = Arc::new(Mutex::new(ReorderBoard::new(
            Arc::new(DefaultClock),
            BoardConfig::default(),
        )));
        let repository = Arc::new(InMemoryItemRepository::new());
        let feedback = Arc::new(RecordingFeedback::new());
        let service =
            BoardSyncService::new(&board, Arc::clone(&repository), Arc::clone(&feedback));

        Self {
            board,
            repository,
            feedback,
            service,
            last_move_result: None,
        }
    }

    /// Returns the identifiers of one column, in order.
    pub fn column(&self, status: ProjectStatus) -> Result<Vec<String>, eyre::Report> {
        let guard = self
            .board
            .lock()
            .map_err(|_| eyre::eyre!("board lock poisoned"))?;
        Ok(guard
            .collection()
            .bucket_ids(status)
            .into_iter()
            .map(str::to_owned)
            .collect())
    }
}

impl Default for BoardWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> BoardWorld {
    BoardWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}

/// Parses a column name used in a feature file.
pub fn parse_status(value: &str) -> Result<ProjectStatus, eyre::Report> {
    ProjectStatus::try_from(value)
        .map_err(|err| eyre::eyre!("invalid column in scenario: {err}"))
}
