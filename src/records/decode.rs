//! # Record Decoding
//!
//! Decode-side half of the record codec: wire buffers in, typed values out.
//!
//! Decoding is checked: a static blob whose length disagrees with the
//! layout, a counter whose total disagrees with the dynamic blob, a ragged
//! array payload, or invalid UTF-8 in a text field all return an error
//! instead of reading out of bounds or decoding silently. Inputs produced
//! by the matching encoder never trip these checks.

use eyre::Result;

use crate::records::lengths::EncodedLengths;
use crate::records::schema::TableSchema;
use crate::types::{FieldType, StaticType, Value, ADDRESS_WIDTH};

/// Reads one static value from `bytes`, which must be exactly the type's
/// byte width. Total over well-formed slices: every bit pattern of the
/// correct width decodes.
pub(crate) fn read_static(ty: StaticType, bytes: &[u8]) -> Value {
    match ty {
        StaticType::Bool => Value::Bool(bytes[0] != 0),
        StaticType::Uint(_) => {
            let mut buf = [0u8; 16];
            buf[16 - bytes.len()..].copy_from_slice(bytes);
            Value::Uint(u128::from_be_bytes(buf))
        }
        StaticType::Int(_) => {
            let fill = if bytes[0] & 0x80 != 0 { 0xFF } else { 0x00 };
            let mut buf = [fill; 16];
            buf[16 - bytes.len()..].copy_from_slice(bytes);
            Value::Int(i128::from_be_bytes(buf))
        }
        StaticType::FixedBytes(_) => Value::FixedBytes(bytes.to_vec()),
        StaticType::Address => {
            let mut addr = [0u8; ADDRESS_WIDTH];
            addr.copy_from_slice(bytes);
            Value::Address(addr)
        }
    }
}

/// Decodes the static blob into the static value fields in schema order.
/// Rejects a blob whose length differs from the layout's static width.
pub fn decode_static(blob: &[u8], schema: &TableSchema) -> Result<Vec<Value>> {
    let layout = schema.layout();
    eyre::ensure!(
        blob.len() == layout.total_static_size(),
        "static blob is {} bytes, layout expects {}",
        blob.len(),
        layout.total_static_size()
    );

    let fields = schema.static_value_fields();
    let mut values = Vec::with_capacity(fields.len());
    for (idx, field) in fields.iter().enumerate() {
        let FieldType::Static(ty) = field.field_type else {
            eyre::bail!("field {} in static section is not static", field.name);
        };
        let offset = layout.static_offset(idx);
        values.push(read_static(ty, &blob[offset..offset + ty.byte_width()]));
    }
    Ok(values)
}

/// Decodes a single static value field straight from its offset, without
/// touching the rest of the blob.
pub fn read_static_field(blob: &[u8], idx: usize, schema: &TableSchema) -> Result<Value> {
    let layout = schema.layout();
    eyre::ensure!(
        blob.len() == layout.total_static_size(),
        "static blob is {} bytes, layout expects {}",
        blob.len(),
        layout.total_static_size()
    );
    let fields = schema.static_value_fields();
    let field = fields
        .get(idx)
        .ok_or_else(|| eyre::eyre!("static field index {} out of range", idx))?;
    let FieldType::Static(ty) = field.field_type else {
        eyre::bail!("field {} in static section is not static", field.name);
    };
    let offset = layout.static_offset(idx);
    Ok(read_static(ty, &blob[offset..offset + ty.byte_width()]))
}

/// Decodes the dynamic blob into the dynamic value fields in schema order,
/// using the counter to delimit sub-slices. A schema with no dynamic fields
/// returns an empty sequence without touching the blob.
pub fn decode_dynamic(
    lengths: &EncodedLengths,
    blob: &[u8],
    schema: &TableSchema,
) -> Result<Vec<Value>> {
    let fields = schema.dynamic_value_fields();
    if fields.is_empty() {
        return Ok(Vec::new());
    }

    eyre::ensure!(
        lengths.total() == blob.len() as u64,
        "dynamic blob is {} bytes, counter total is {}",
        blob.len(),
        lengths.total()
    );

    let mut cursor = 0usize;
    let mut values = Vec::with_capacity(fields.len());
    for (idx, field) in fields.iter().enumerate() {
        let len = lengths.len_at(idx) as usize;
        let end = cursor + len;
        eyre::ensure!(
            end <= blob.len(),
            "counter slot {} overruns the dynamic blob",
            idx
        );
        let slice = &blob[cursor..end];
        let value = match field.field_type {
            FieldType::Bytes => Value::Bytes(slice.to_vec()),
            FieldType::Text => {
                let text = std::str::from_utf8(slice)
                    .map_err(|e| eyre::eyre!("field {}: invalid UTF-8: {}", field.name, e))?;
                Value::Text(text.to_string())
            }
            FieldType::Array(elem_ty) => {
                let width = elem_ty.byte_width();
                eyre::ensure!(
                    len % width == 0,
                    "field {}: array payload of {} bytes is not a multiple of element width {}",
                    field.name,
                    len,
                    width
                );
                let elems = slice
                    .chunks_exact(width)
                    .map(|chunk| read_static(elem_ty, chunk))
                    .collect();
                Value::Array(elems)
            }
            FieldType::Static(_) => {
                eyre::bail!("field {} in dynamic section is not dynamic", field.name)
            }
        };
        values.push(value);
        cursor = end;
    }

    eyre::ensure!(
        cursor == blob.len(),
        "counter slots cover {} bytes, dynamic blob has {}",
        cursor,
        blob.len()
    );
    Ok(values)
}
