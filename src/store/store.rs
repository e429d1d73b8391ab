//! In-memory record store
//!
//! Records live in an id-keyed ordered map. Ids are issued from a monotonic
//! counter and never mutated, so key order is insertion order among live
//! records. The map and the counter share one lock and every operation takes
//! it exactly once.

use std::collections::BTreeMap;

use parking_lot::Mutex;

use super::errors::{StoreError, StoreResult};
use super::record::{Record, RecordFields};

#[derive(Debug)]
struct StoreInner {
    records: BTreeMap<u64, Record>,
    /// Strictly greater than every id ever issued
    next_id: u64,
}

/// Owner of all student records and the id counter.
#[derive(Debug)]
pub struct RecordStore {
    inner: Mutex<StoreInner>,
}

impl RecordStore {
    /// Create an empty store. The first id issued is 1.
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(StoreInner {
                records: BTreeMap::new(),
                next_id: 1,
            }),
        }
    }

    /// Create a store holding the five demo students (ids 1-5).
    pub fn seeded() -> Self {
        let store = Self::new();
        let seed = [
            ("John Doe", 20, "A", "john@school.com"),
            ("Jane Smith", 21, "B", "jane@school.com"),
            ("Mike Johnson", 19, "A", "mike@school.com"),
            ("Sarah Wilson", 22, "C", "sarah@school.com"),
            ("Tom Brown", 18, "B", "tom@school.com"),
        ];
        for (name, age, grade, email) in seed {
            store.insert(RecordFields {
                name: name.to_string(),
                age,
                grade: grade.to_string(),
                email: email.to_string(),
            });
        }
        store
    }

    /// All live records in insertion order.
    pub fn list(&self) -> Vec<Record> {
        self.inner.lock().records.values().cloned().collect()
    }

    /// Number of live records.
    pub fn len(&self) -> usize {
        self.inner.lock().records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The id the next insert will receive.
    pub fn next_id(&self) -> u64 {
        self.inner.lock().next_id
    }

    pub fn get(&self, id: u64) -> StoreResult<Record> {
        self.inner
            .lock()
            .records
            .get(&id)
            .cloned()
            .ok_or(StoreError::NotFound(id))
    }

    /// Store a new record under the next id.
    pub fn insert(&self, fields: RecordFields) -> Record {
        let mut inner = self.inner.lock();
        let id = inner.next_id;
        inner.next_id += 1;

        let record = Record::from_fields(id, fields);
        inner.records.insert(id, record.clone());
        record
    }

    /// Replace every non-id field of an existing record.
    pub fn update(&self, id: u64, fields: RecordFields) -> StoreResult<Record> {
        let mut inner = self.inner.lock();
        let slot = inner.records.get_mut(&id).ok_or(StoreError::NotFound(id))?;
        *slot = Record::from_fields(id, fields);
        Ok(slot.clone())
    }

    /// Delete a record, returning the removed value.
    pub fn remove(&self, id: u64) -> StoreResult<Record> {
        self.inner
            .lock()
            .records
            .remove(&id)
            .ok_or(StoreError::NotFound(id))
    }

    /// Records whose name, email or grade contains `query`, ignoring case.
    /// An empty query matches everything.
    pub fn search(&self, query: &str) -> Vec<Record> {
        let needle = query.to_lowercase();
        self.inner
            .lock()
            .records
            .values()
            .filter(|r| r.matches(&needle))
            .cloned()
            .collect()
    }
}

impl Default for RecordStore {
    fn default() -> Self {
        Self::new()
    }
}
