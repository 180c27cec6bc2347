//! # Table Accessor
//!
//! `Table` binds a schema to a table identifier and exposes the two access
//! patterns built on the record codec:
//!
//! - **Persistent get/set** against a [`StoreBackend`]
//! - **Ephemeral emission** into an [`EventSink`]
//!
//! Both paths run the identical encode; only the sink differs. An ephemeral
//! record never mutates store state.

use eyre::Result;
use tracing::trace;

use crate::records::{decode_record, encode_key, encode_record, Record, TableSchema};
use crate::store::{EventSink, StoreBackend, TableId};
use crate::types::Value;

/// Schema-bound accessor for one table.
#[derive(Debug, Clone, Copy)]
pub struct Table<'a> {
    id: TableId,
    schema: &'a TableSchema,
}

impl<'a> Table<'a> {
    pub fn new(id: TableId, schema: &'a TableSchema) -> Self {
        Self { id, schema }
    }

    pub fn id(&self) -> TableId {
        self.id
    }

    pub fn schema(&self) -> &'a TableSchema {
        self.schema
    }

    /// Encodes the value tuple and writes it under the encoded key tuple.
    pub fn set<S: StoreBackend>(
        &self,
        store: &S,
        key: &[Value],
        values: &[Value],
    ) -> Result<()> {
        let key_tuple = encode_key(key, self.schema)?;
        let blob = encode_record(values, self.schema)?;
        trace!(
            table = ?self.id,
            key_len = key_tuple.len(),
            static_len = blob.static_data.len(),
            dynamic_len = blob.dynamic_data.len(),
            "set record"
        );
        store.write(self.id, &key_tuple, blob)
    }

    /// Reads and decodes the record under the encoded key tuple. Returns
    /// None if the store has no record for that key.
    pub fn get<S: StoreBackend>(&self, store: &S, key: &[Value]) -> Result<Option<Record>> {
        let key_tuple = encode_key(key, self.schema)?;
        let Some(blob) = store.read(self.id, &key_tuple)? else {
            trace!(table = ?self.id, key_len = key_tuple.len(), "get: absent");
            return Ok(None);
        };
        let values = decode_record(&blob, self.schema)?;
        trace!(
            table = ?self.id,
            key_len = key_tuple.len(),
            field_count = values.len(),
            "get record"
        );
        Ok(Some(Record::new(key.to_vec(), values)))
    }

    /// Encodes the record identically to [`Table::set`] but hands it to an
    /// event sink instead of the store. No stored state is touched.
    pub fn emit_ephemeral<E: EventSink>(
        &self,
        sink: &E,
        key: &[Value],
        values: &[Value],
    ) -> Result<()> {
        let key_tuple = encode_key(key, self.schema)?;
        let blob = encode_record(values, self.schema)?;
        trace!(
            table = ?self.id,
            key_len = key_tuple.len(),
            dynamic_len = blob.dynamic_data.len(),
            "emit ephemeral record"
        );
        sink.emit(self.id, &key_tuple, blob);
        Ok(())
    }
}
