//! Hubboard: optimistic kanban board state for the Projects Hub.
//!
//! This crate holds the client-side state behind drag-and-drop project and
//! task boards. Items are grouped into status columns, ordered by urgency,
//! moved optimistically while a remote status update is in flight, and
//! reverted when the update fails.
//!
//! # Architecture
//!
//! Hubboard follows hexagonal architecture principles:
//!
//! - **Domain**: Pure board state with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for persistence and user feedback
//! - **Adapters**: Concrete implementations of ports (in-memory, tracing)
//! - **Services**: Async orchestration around the single remote call
//!
//! # Modules
//!
//! - [`board`]: Grouping, ordering, optimistic moves, and reconciliation

pub mod board;
