//! # Record Encoding
//!
//! Encode-side half of the record codec: typed values in, wire buffers out.
//!
//! - [`encode_static`] fills the fixed-width blob using the layout's offsets
//! - [`encode_dynamic`] concatenates variable-width payloads and packs their
//!   lengths into an [`EncodedLengths`] counter
//! - [`encode_key`] applies the static rule to a schema's key fields,
//!   producing the store key tuple
//!
//! All functions are pure and deterministic: the same values and schema
//! always produce byte-identical output.

use eyre::Result;
use smallvec::SmallVec;

use crate::records::lengths::{EncodedLengths, MAX_DYNAMIC_FIELDS};
use crate::records::schema::TableSchema;
use crate::types::{FieldType, StaticType, Value};

/// Writes one static value into `dst`, which must be exactly the type's
/// byte width. Integers are big-endian, truncated to the declared width
/// after a range check; bool is one 0/1 byte; byte arrays copy verbatim.
pub(crate) fn write_static(dst: &mut [u8], ty: StaticType, value: &Value) -> Result<()> {
    match (ty, value) {
        (StaticType::Bool, Value::Bool(b)) => {
            dst[0] = u8::from(*b);
        }
        (StaticType::Uint(_), Value::Uint(v)) => {
            let width = dst.len();
            if width < 16 {
                let max = (1u128 << (8 * width)) - 1;
                eyre::ensure!(*v <= max, "uint value {} does not fit {} bytes", v, width);
            }
            dst.copy_from_slice(&v.to_be_bytes()[16 - width..]);
        }
        (StaticType::Int(_), Value::Int(v)) => {
            let width = dst.len();
            if width < 16 {
                let bits = 8 * width as u32;
                let min = -(1i128 << (bits - 1));
                let max = (1i128 << (bits - 1)) - 1;
                eyre::ensure!(
                    (min..=max).contains(v),
                    "int value {} does not fit {} bytes",
                    v,
                    width
                );
            }
            // Two's-complement truncation keeps the low bytes.
            dst.copy_from_slice(&v.to_be_bytes()[16 - width..]);
        }
        (StaticType::FixedBytes(w), Value::FixedBytes(bytes)) => {
            eyre::ensure!(
                bytes.len() == w as usize,
                "fixed bytes value has {} bytes, field declares {}",
                bytes.len(),
                w
            );
            dst.copy_from_slice(bytes);
        }
        (StaticType::Address, Value::Address(addr)) => {
            dst.copy_from_slice(addr);
        }
        _ => eyre::bail!("expected {:?} value, got {}", ty, value.kind()),
    }
    Ok(())
}

/// Encodes the static value fields into a blob of exactly
/// `layout.total_static_size()` bytes, each value at its precomputed offset.
pub fn encode_static(values: &[Value], schema: &TableSchema) -> Result<Vec<u8>> {
    let fields = schema.static_value_fields();
    eyre::ensure!(
        values.len() == fields.len(),
        "schema has {} static value fields, got {} values",
        fields.len(),
        values.len()
    );

    let layout = schema.layout();
    let mut blob = vec![0u8; layout.total_static_size()];
    for (idx, (field, value)) in fields.iter().zip(values).enumerate() {
        let FieldType::Static(ty) = field.field_type else {
            eyre::bail!("field {} in static section is not static", field.name);
        };
        let offset = layout.static_offset(idx);
        let width = ty.byte_width();
        write_static(&mut blob[offset..offset + width], ty, value)
            .map_err(|e| eyre::eyre!("field {}: {}", field.name, e))?;
    }
    Ok(blob)
}

/// Encodes the dynamic value fields: each value serialized to its natural
/// byte form in schema order, lengths packed into the counter, payloads
/// concatenated. A counter overflow is reported before any blob is returned.
pub fn encode_dynamic(values: &[Value], schema: &TableSchema) -> Result<(EncodedLengths, Vec<u8>)> {
    let fields = schema.dynamic_value_fields();
    eyre::ensure!(
        values.len() == fields.len(),
        "schema has {} dynamic value fields, got {} values",
        fields.len(),
        values.len()
    );

    let mut lengths: SmallVec<[u64; MAX_DYNAMIC_FIELDS]> = SmallVec::new();
    let mut blob = Vec::new();
    for (field, value) in fields.iter().zip(values) {
        let before = blob.len();
        match (field.field_type, value) {
            (FieldType::Bytes, Value::Bytes(bytes)) => {
                blob.extend_from_slice(bytes);
            }
            (FieldType::Text, Value::Text(text)) => {
                blob.extend_from_slice(text.as_bytes());
            }
            (FieldType::Array(elem_ty), Value::Array(elems)) => {
                let width = elem_ty.byte_width();
                for elem in elems {
                    let start = blob.len();
                    blob.resize(start + width, 0);
                    write_static(&mut blob[start..], elem_ty, elem)
                        .map_err(|e| eyre::eyre!("field {}: {}", field.name, e))?;
                }
            }
            (ty, value) => eyre::bail!(
                "field {}: expected {:?} value, got {}",
                field.name,
                ty,
                value.kind()
            ),
        }
        lengths.push((blob.len() - before) as u64);
    }

    let counter = EncodedLengths::encode(&lengths)?;
    Ok((counter, blob))
}

/// Encodes a key tuple: the concatenation of each key field's fixed-width
/// encoding in schema order.
pub fn encode_key(values: &[Value], schema: &TableSchema) -> Result<Vec<u8>> {
    let fields = schema.key_fields();
    eyre::ensure!(
        values.len() == fields.len(),
        "schema has {} key fields, got {} values",
        fields.len(),
        values.len()
    );

    let mut key = Vec::with_capacity(schema.layout().key_width());
    for (field, value) in fields.iter().zip(values) {
        let FieldType::Static(ty) = field.field_type else {
            eyre::bail!("key field {} is not static", field.name);
        };
        let start = key.len();
        key.resize(start + ty.byte_width(), 0);
        write_static(&mut key[start..], ty, value)
            .map_err(|e| eyre::eyre!("key field {}: {}", field.name, e))?;
    }
    Ok(key)
}
