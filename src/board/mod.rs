//! Optimistic reorder and reclassify engine for kanban boards.
//!
//! A board partitions projects or tasks into fixed status columns. Moving a
//! card rewrites its status locally before the backing store confirms the
//! change; the store's answer then either confirms the move or reverts it.
//! The module follows hexagonal architecture:
//!
//! - Domain types and the board state container in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
