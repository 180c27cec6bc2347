//! # rowpack - Schema-Driven Binary Record Codec
//!
//! rowpack stores and transmits structured, typed records using exactly
//! three byte buffers per record: a fixed-width static blob, one packed
//! length-counter word, and a concatenated dynamic blob. Field offsets and
//! widths are derived once per schema, so per-record work is O(field count)
//! with no per-row type metadata on the wire.
//!
//! ## Quick Start
//!
//! ```ignore
//! use rowpack::records::{encode_record, decode_record, FieldDef, TableSchema};
//! use rowpack::types::{FieldType, StaticType, Value};
//!
//! let schema = TableSchema::new(
//!     vec![FieldDef::new("id", StaticType::Uint(4))],
//!     vec![
//!         FieldDef::new("score", StaticType::Uint(4)),
//!         FieldDef::new("name", FieldType::Text),
//!     ],
//! )?;
//!
//! let blob = encode_record(&[Value::Uint(1000), Value::Text("alice".into())], &schema)?;
//! let values = decode_record(&blob, &schema)?;
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │   Table accessor (get / set / emit)      │
//! ├─────────────────────┬───────────────────┤
//! │  StoreBackend trait │  EventSink trait  │
//! ├─────────────────────┴───────────────────┤
//! │        Record codec (encode/decode)      │
//! ├──────────────┬──────────────────────────┤
//! │ Static codec │ Dynamic codec + counter  │
//! ├──────────────┴──────────────────────────┤
//! │    Schema validation + field layout      │
//! └─────────────────────────────────────────┘
//! ```
//!
//! Every codec function is pure and deterministic; the store and sink
//! traits are the only side-effecting seams, and their implementations own
//! all concurrency guarantees.
//!
//! ## Module Overview
//!
//! - [`types`]: field type tags and owned values
//! - [`records`]: schema, layout, packed length counter, encode/decode
//! - [`store`]: store/sink traits, table accessor, in-memory backends

pub mod records;
pub mod store;
pub mod types;

pub use records::{
    decode_record, encode_record, EncodedLengths, FieldDef, FieldLayout, Record, RecordBlob,
    TableSchema, MAX_DYNAMIC_FIELDS,
};
pub use store::{
    CollectingSink, EventSink, MemoryStore, StoreBackend, Table, TableId, TableKind,
};
pub use types::{FieldType, StaticType, Value};
