//! Session-scoped record storage.
//!
//! # Responsibility
//! - Own the ordered, append-only sequence of records for one session.
//! - Hand out immutable snapshots to projections.
//!
//! # Invariants
//! - No delete, update or reorder operation exists.
//! - A snapshot never observes appends made after it was taken.

pub mod session_store;
