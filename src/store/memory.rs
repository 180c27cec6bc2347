//! # In-Memory Store and Sink
//!
//! In-process implementations of the store boundary traits:
//!
//! - [`MemoryStore`]: record triples in a hash map behind a single RwLock
//!   (read-heavy workload). Per-key read-your-writes follows directly from
//!   the lock.
//! - [`CollectingSink`]: appends every emitted record to an in-order log,
//!   so tests can replay the ephemeral stream and check determinism.

use hashbrown::HashMap;
use parking_lot::{Mutex, RwLock};

use crate::records::RecordBlob;
use crate::store::{EventSink, StoreBackend, TableId};

/// Hash-map store backend.
#[derive(Debug, Default)]
pub struct MemoryStore {
    records: RwLock<HashMap<(TableId, Vec<u8>), RecordBlob>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored records across all tables.
    pub fn len(&self) -> usize {
        self.records.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.read().is_empty()
    }
}

impl StoreBackend for MemoryStore {
    fn read(&self, table_id: TableId, key: &[u8]) -> eyre::Result<Option<RecordBlob>> {
        Ok(self
            .records
            .read()
            .get(&(table_id, key.to_vec()))
            .cloned())
    }

    fn write(&self, table_id: TableId, key: &[u8], blob: RecordBlob) -> eyre::Result<()> {
        self.records
            .write()
            .insert((table_id, key.to_vec()), blob);
        Ok(())
    }
}

/// One emitted ephemeral record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmittedRecord {
    pub table_id: TableId,
    pub key: Vec<u8>,
    pub blob: RecordBlob,
}

/// Event sink that keeps every emission in order.
#[derive(Debug, Default)]
pub struct CollectingSink {
    events: Mutex<Vec<EmittedRecord>>,
}

impl CollectingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.events.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.lock().is_empty()
    }

    /// Drains the collected emissions in emission order.
    pub fn take(&self) -> Vec<EmittedRecord> {
        std::mem::take(&mut *self.events.lock())
    }
}

impl EventSink for CollectingSink {
    fn emit(&self, table_id: TableId, key: &[u8], blob: RecordBlob) {
        self.events.lock().push(EmittedRecord {
            table_id,
            key: key.to_vec(),
            blob,
        });
    }
}
