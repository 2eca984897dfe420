//! Port contracts for board persistence and user feedback.
//!
//! Ports define infrastructure-agnostic interfaces used by board services.

pub mod feedback;
pub mod repository;

pub use feedback::BoardFeedback;
pub use repository::{ItemRepository, ItemRepositoryError, ItemRepositoryResult};
