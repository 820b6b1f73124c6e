//! Append-only in-memory store with copy-on-write snapshots.
//!
//! # Invariants
//! - `append` assigns `count() + 1` and never fails.
//! - Records are kept in insertion order, i.e. ascending id order.
//! - The store performs no validation; callers pass validated `NewRecord`s.

use crate::model::record::{NewRecord, Record, RecordId};
use std::ops::Deref;
use std::sync::Arc;

/// Point-in-time immutable view of a store.
///
/// Cloning is cheap; the records are shared, not copied.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Snapshot {
    records: Arc<Vec<Record>>,
}

impl Snapshot {
    /// Builds a snapshot from already-stored records.
    ///
    /// Used by projections tests and hosts replaying a known sequence.
    pub fn from_records(records: Vec<Record>) -> Self {
        Self {
            records: Arc::new(records),
        }
    }
}

impl Deref for Snapshot {
    type Target = [Record];

    fn deref(&self) -> &Self::Target {
        self.records.as_slice()
    }
}

/// Ordered record collection owned by exactly one session.
#[derive(Debug, Default)]
pub struct SessionStore {
    records: Arc<Vec<Record>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a validated record and returns it with its assigned id.
    pub fn append(&mut self, record: NewRecord) -> Record {
        let id = self.next_id();
        let stored = Record::from_new(id, record);
        // Clones the backing vector only while an older snapshot is alive.
        Arc::make_mut(&mut self.records).push(stored.clone());
        stored
    }

    /// Returns all records in insertion order.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            records: Arc::clone(&self.records),
        }
    }

    pub fn count(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    fn next_id(&self) -> RecordId {
        self.records.last().map_or(1, |last| last.id + 1)
    }
}
