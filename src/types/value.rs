//! # Owned Value Representation
//!
//! This module provides `Value`, the fully-owned typed value used on both
//! sides of the record codec. Encoding consumes a slice of values in schema
//! order; decoding rebuilds the same slice from the wire buffers.
//!
//! A `Value` does not carry its schema type: `Value::Uint` may encode as any
//! declared uint width, and `Value::FixedBytes` as any declared fixed width.
//! The codec checks each value against the schema's `FieldType` at encode
//! time and reports a mismatch as an error rather than guessing.

use crate::types::field_type::{FieldType, StaticType, ADDRESS_WIDTH};

/// Fully-owned record value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    Bool(bool),
    Uint(u128),
    Int(i128),
    /// Fixed-width byte array; length must equal the field's declared width.
    FixedBytes(Vec<u8>),
    Address([u8; ADDRESS_WIDTH]),
    /// Variable-length byte string.
    Bytes(Vec<u8>),
    Text(String),
    /// Homogeneous array of static-typed elements.
    Array(Vec<Value>),
}

impl Value {
    /// Returns true if this value can encode as the given static type.
    /// Range checks (an oversized uint for a narrow width) happen at encode
    /// time; this only checks the shape.
    pub fn matches_static(&self, ty: StaticType) -> bool {
        match (self, ty) {
            (Value::Bool(_), StaticType::Bool) => true,
            (Value::Uint(_), StaticType::Uint(_)) => true,
            (Value::Int(_), StaticType::Int(_)) => true,
            (Value::FixedBytes(_), StaticType::FixedBytes(_)) => true,
            (Value::Address(_), StaticType::Address) => true,
            _ => false,
        }
    }

    /// Returns true if this value can encode as the given field type.
    pub fn matches(&self, ty: FieldType) -> bool {
        match (self, ty) {
            (v, FieldType::Static(st)) => v.matches_static(st),
            (Value::Bytes(_), FieldType::Bytes) => true,
            (Value::Text(_), FieldType::Text) => true,
            (Value::Array(elems), FieldType::Array(elem_ty)) => {
                elems.iter().all(|e| e.matches_static(elem_ty))
            }
            _ => false,
        }
    }

    /// Short tag for error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Bool(_) => "bool",
            Value::Uint(_) => "uint",
            Value::Int(_) => "int",
            Value::FixedBytes(_) => "fixed bytes",
            Value::Address(_) => "address",
            Value::Bytes(_) => "bytes",
            Value::Text(_) => "text",
            Value::Array(_) => "array",
        }
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<u32> for Value {
    fn from(v: u32) -> Self {
        Value::Uint(v as u128)
    }
}

impl From<u64> for Value {
    fn from(v: u64) -> Self {
        Value::Uint(v as u128)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Int(v as i128)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Int(v as i128)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Text(v.to_string())
    }
}

impl From<Vec<u8>> for Value {
    fn from(v: Vec<u8>) -> Self {
        Value::Bytes(v)
    }
}

impl From<[u8; ADDRESS_WIDTH]> for Value {
    fn from(v: [u8; ADDRESS_WIDTH]) -> Self {
        Value::Address(v)
    }
}
