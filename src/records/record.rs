//! # Whole-Record Codec
//!
//! Composes the static and dynamic codecs into whole-record encode/decode
//! over the three-buffer wire form, [`RecordBlob`].
//!
//! A [`Record`] exists only at this boundary: on the wire a record is
//! exactly its three buffers, never a language-native aggregate.

use eyre::Result;

use crate::records::decode::{decode_dynamic, decode_static};
use crate::records::encode::{encode_dynamic, encode_static};
use crate::records::lengths::EncodedLengths;
use crate::records::schema::TableSchema;
use crate::types::Value;

/// The wire form of one record's value fields: static blob, packed length
/// counter, and dynamic blob. The counter and dynamic blob are only
/// meaningful as a pair.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordBlob {
    pub static_data: Vec<u8>,
    pub encoded_lengths: EncodedLengths,
    pub dynamic_data: Vec<u8>,
}

/// A typed record at the codec boundary: key tuple plus value tuple, both
/// in schema order (static values first, then dynamic).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub key: Vec<Value>,
    pub values: Vec<Value>,
}

impl Record {
    pub fn new(key: Vec<Value>, values: Vec<Value>) -> Self {
        Self { key, values }
    }
}

/// Encodes a full value tuple into its wire triple. Deterministic:
/// identical values and schema always produce byte-identical buffers.
pub fn encode_record(values: &[Value], schema: &TableSchema) -> Result<RecordBlob> {
    let (static_values, dynamic_values) = schema.split_values(values)?;
    let static_data = encode_static(static_values, schema)?;
    let (encoded_lengths, dynamic_data) = encode_dynamic(dynamic_values, schema)?;
    Ok(RecordBlob {
        static_data,
        encoded_lengths,
        dynamic_data,
    })
}

/// Decodes a wire triple back into the full value tuple, static values
/// first, then dynamic, in schema order.
pub fn decode_record(blob: &RecordBlob, schema: &TableSchema) -> Result<Vec<Value>> {
    let mut values = decode_static(&blob.static_data, schema)?;
    values.extend(decode_dynamic(
        &blob.encoded_lengths,
        &blob.dynamic_data,
        schema,
    )?);
    Ok(values)
}
