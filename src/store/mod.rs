//! # Store Boundary
//!
//! The only side-effecting layer of the crate. The codec itself is pure;
//! this module defines the seams it hands records across:
//!
//! - [`StoreBackend`]: keyed persistence for record triples. The backend
//!   owns all atomicity and ordering guarantees; the codec only requires
//!   that, per key, the most recent completed `write` is what a later
//!   `read` observes.
//! - [`EventSink`]: fire-and-forget emission of ephemeral records, for
//!   append-only data that consumers observe by subscription rather than
//!   by querying stored state.
//! - [`Table`]: a schema-bound accessor composing the codec with either
//!   collaborator.
//!
//! [`memory`] provides in-process implementations of both traits.

pub mod memory;
pub mod table;

use std::fmt;

use eyre::Result;

use crate::records::RecordBlob;

const TABLE_ID_BYTES: usize = 32;
const KIND_BYTES: usize = 2;
const NAMESPACE_BYTES: usize = 14;
const NAME_BYTES: usize = 16;

/// Whether a table's records live in the keyed store or only on the event
/// stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TableKind {
    Persistent,
    Ephemeral,
}

impl TableKind {
    fn tag(self) -> [u8; KIND_BYTES] {
        match self {
            TableKind::Persistent => *b"tb",
            TableKind::Ephemeral => *b"et",
        }
    }
}

/// Opaque fixed-width table identifier: a 2-byte kind tag, a 14-byte
/// namespace, and a 16-byte name, each zero-padded on the right.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct TableId([u8; TABLE_ID_BYTES]);

impl TableId {
    /// Packs a namespace and table name into an identifier. Both must fit
    /// their fixed-width slots.
    pub fn new(kind: TableKind, namespace: &str, name: &str) -> Result<Self> {
        eyre::ensure!(
            namespace.len() <= NAMESPACE_BYTES,
            "namespace {:?} exceeds {} bytes",
            namespace,
            NAMESPACE_BYTES
        );
        eyre::ensure!(
            name.len() <= NAME_BYTES,
            "table name {:?} exceeds {} bytes",
            name,
            NAME_BYTES
        );

        let mut id = [0u8; TABLE_ID_BYTES];
        id[..KIND_BYTES].copy_from_slice(&kind.tag());
        id[KIND_BYTES..KIND_BYTES + namespace.len()].copy_from_slice(namespace.as_bytes());
        id[KIND_BYTES + NAMESPACE_BYTES..KIND_BYTES + NAMESPACE_BYTES + name.len()]
            .copy_from_slice(name.as_bytes());
        Ok(Self(id))
    }

    /// Wraps an identifier derived elsewhere.
    pub fn from_bytes(bytes: [u8; TABLE_ID_BYTES]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; TABLE_ID_BYTES] {
        &self.0
    }
}

impl fmt::Debug for TableId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TableId(0x")?;
        for byte in &self.0 {
            write!(f, "{byte:02x}")?;
        }
        write!(f, ")")
    }
}

/// Keyed persistence for record triples. Implementations use interior
/// mutability; both methods take `&self` so one backend can serve
/// concurrent tables.
pub trait StoreBackend {
    /// Reads the record stored under `(table_id, key)`, or None if absent.
    fn read(&self, table_id: TableId, key: &[u8]) -> Result<Option<RecordBlob>>;

    /// Stores a record under `(table_id, key)`, replacing any previous one.
    fn write(&self, table_id: TableId, key: &[u8], blob: RecordBlob) -> Result<()>;
}

/// Fire-and-forget emission of ephemeral records. No return value is
/// consumed by the codec.
pub trait EventSink {
    fn emit(&self, table_id: TableId, key: &[u8], blob: RecordBlob);
}

pub use memory::{CollectingSink, EmittedRecord, MemoryStore};
pub use table::Table;
