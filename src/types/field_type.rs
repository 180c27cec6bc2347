//! # Field Type System
//!
//! This module provides the canonical field type enums used across schema
//! definitions, layout computation, and record encoding.
//!
//! ## Type Categories
//!
//! | Category | Types | Encoding |
//! |----------|-------|----------|
//! | **Static** | bool, uint, int, fixed bytes, address | Fixed width, offset known per schema |
//! | **Dynamic** | bytes, text, array | Variable width, length known per record |
//!
//! ## Static Widths
//!
//! | Type | Width (bytes) |
//! |------|---------------|
//! | bool | 1 |
//! | uint / int | declared, 1..=16 |
//! | fixed bytes | declared, 1..=32 |
//! | address | 20 |
//!
//! Integer values are carried as `u128`/`i128`, which caps declared integer
//! widths at 16 bytes. Wider fixed-width data is declared as fixed bytes.
//! No static field may exceed 32 bytes.
//!
//! Array elements are always static types, so an array's byte length is
//! `element_width * element_count` and splits back into elements without
//! per-element length prefixes.

use eyre::Result;

/// Maximum byte width of any single static field.
pub const MAX_STATIC_FIELD_WIDTH: usize = 32;

/// Maximum declared byte width of an integer field.
pub const MAX_INT_WIDTH: usize = 16;

/// Byte width of an address field.
pub const ADDRESS_WIDTH: usize = 20;

/// Fixed-width field type. The byte width of every instance is known at
/// schema-build time, so its offset inside the static blob is precomputable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StaticType {
    Bool,
    /// Unsigned big-endian integer of the declared byte width (1..=16).
    Uint(u8),
    /// Signed two's-complement big-endian integer of the declared byte width (1..=16).
    Int(u8),
    /// Byte array of exactly the declared width (1..=32), copied verbatim.
    FixedBytes(u8),
    /// 20-byte account identifier, copied verbatim.
    Address,
}

impl StaticType {
    /// Returns a uint type, validating the declared width.
    pub fn uint(width: u8) -> Result<Self> {
        eyre::ensure!(
            (1..=MAX_INT_WIDTH as u8).contains(&width),
            "uint width {} outside supported range 1..=16",
            width
        );
        Ok(StaticType::Uint(width))
    }

    /// Returns an int type, validating the declared width.
    pub fn int(width: u8) -> Result<Self> {
        eyre::ensure!(
            (1..=MAX_INT_WIDTH as u8).contains(&width),
            "int width {} outside supported range 1..=16",
            width
        );
        Ok(StaticType::Int(width))
    }

    /// Returns a fixed-bytes type, validating the declared width.
    pub fn fixed_bytes(width: u8) -> Result<Self> {
        eyre::ensure!(
            (1..=MAX_STATIC_FIELD_WIDTH as u8).contains(&width),
            "fixed bytes width {} outside supported range 1..=32",
            width
        );
        Ok(StaticType::FixedBytes(width))
    }

    /// Byte width of this type's encoding.
    pub fn byte_width(&self) -> usize {
        match self {
            StaticType::Bool => 1,
            StaticType::Uint(w) | StaticType::Int(w) | StaticType::FixedBytes(w) => *w as usize,
            StaticType::Address => ADDRESS_WIDTH,
        }
    }

    /// Validates the declared width. Directly-constructed enum values can
    /// carry out-of-range widths; schema registration rejects them here.
    pub fn validate(&self) -> Result<()> {
        match self {
            StaticType::Bool | StaticType::Address => Ok(()),
            StaticType::Uint(w) => StaticType::uint(*w).map(|_| ()),
            StaticType::Int(w) => StaticType::int(*w).map(|_| ()),
            StaticType::FixedBytes(w) => StaticType::fixed_bytes(*w).map(|_| ()),
        }
    }
}

/// Field type tag: either a static type or one of the dynamic shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldType {
    Static(StaticType),
    /// Raw byte string of per-record length.
    Bytes,
    /// UTF-8 text of per-record length.
    Text,
    /// Homogeneous array of a static element type.
    Array(StaticType),
}

impl FieldType {
    /// Returns the fixed byte width for static types, or None for dynamic types.
    pub fn fixed_size(&self) -> Option<usize> {
        match self {
            FieldType::Static(ty) => Some(ty.byte_width()),
            FieldType::Bytes | FieldType::Text | FieldType::Array(_) => None,
        }
    }

    /// Returns true if this field's width is known at schema-build time.
    pub fn is_static(&self) -> bool {
        self.fixed_size().is_some()
    }

    /// Returns true if this field's width is only known per record.
    pub fn is_dynamic(&self) -> bool {
        self.fixed_size().is_none()
    }

    pub fn validate(&self) -> Result<()> {
        match self {
            FieldType::Static(ty) | FieldType::Array(ty) => ty.validate(),
            FieldType::Bytes | FieldType::Text => Ok(()),
        }
    }
}

impl From<StaticType> for FieldType {
    fn from(ty: StaticType) -> Self {
        FieldType::Static(ty)
    }
}
