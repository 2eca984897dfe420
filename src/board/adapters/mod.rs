//! Adapter implementations of the board ports.

pub mod memory;
pub mod tracing_feedback;

pub use tracing_feedback::TracingFeedback;
