//! In-memory adapters for tests and local demos.

mod feedback;
mod repository;

pub use feedback::RecordingFeedback;
pub use repository::InMemoryItemRepository;
