//! Sample domain model shared by the store, validator and projections.
//!
//! # Responsibility
//! - Define the canonical `Record` for one submitted test sample.
//! - Define the closed `Material` set accepted by the entry form.
//!
//! # Invariants
//! - A `Record` only exists after validation and append; fields never change.
//! - Record ids are 1-based and strictly increasing within one session.

pub mod record;
