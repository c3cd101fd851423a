//! In-memory response store

use crate::models::RsvpRecord;
use parking_lot::RwLock;

/// Append-only, insertion-ordered collection of accepted responses.
///
/// Lives for the process lifetime; there is no persistence and no removal
/// or update operation. The lock keeps concurrent submissions from
/// interleaving an append with a list snapshot.
#[derive(Default)]
pub struct ResponseStore {
    records: RwLock<Vec<RsvpRecord>>,
}

impl ResponseStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one accepted record at the end.
    pub fn append(&self, record: RsvpRecord) {
        self.records.write().push(record);
    }

    /// Snapshot of all records in insertion order.
    pub fn list_all(&self) -> Vec<RsvpRecord> {
        self.records.read().clone()
    }

    /// Number of stored records.
    pub fn len(&self) -> usize {
        self.records.read().len()
    }

    /// True if nothing has been stored yet.
    pub fn is_empty(&self) -> bool {
        self.records.read().is_empty()
    }
}
