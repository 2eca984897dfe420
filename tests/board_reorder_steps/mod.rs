//! Step definitions for board reorder behaviour tests.

pub mod given;
pub mod then;
pub mod when;
pub mod world;
