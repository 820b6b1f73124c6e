//! Display projections derived from a store snapshot.
//!
//! # Responsibility
//! - Map a snapshot to table rows and to scatter-plot points.
//! - Provide rendering-support helpers (trend lines) over projection output.
//!
//! # Invariants
//! - Every projection is a pure function of its snapshot.
//! - Projections never mutate or retain the snapshot.

pub mod plot;
pub mod table;
pub mod trend;
