//! # Table Schema and Field Layout
//!
//! This module provides `TableSchema`, the validated field declaration for
//! one table, and `FieldLayout`, the derived static-offset table.
//!
//! ## Schema Shape
//!
//! A table declares two ordered field lists:
//!
//! - **Key fields**: all static; their concatenated encodings form the
//!   store key for a record.
//! - **Value fields**: static fields first, then dynamic fields, order
//!   preserved within each group. The static fields fill the static blob;
//!   the dynamic fields fill the dynamic blob and the packed length counter.
//!
//! ## Layout Internals
//!
//! - `static_offsets`: pre-computed byte offset of each static value field
//!   (cumulative sum of preceding widths)
//! - `total_static_size`: width of the static blob
//! - `dynamic_field_count`: number of counter slots in use
//! - `key_width`: width of the encoded key tuple
//!
//! Dynamic fields get no precomputed offsets: their widths are per-record,
//! delimited by the counter at decode time.
//!
//! ## Validation
//!
//! All structural limits are enforced once at schema construction, never at
//! record time: dynamic field count within counter capacity, static field
//! count within the layout maximum, every declared width in range.

use eyre::Result;
use smallvec::SmallVec;

use crate::records::lengths::MAX_DYNAMIC_FIELDS;
use crate::types::{FieldType, Value};

/// Maximum number of static value fields in one schema.
pub const MAX_STATIC_FIELDS: usize = 28;

/// One declared field: a name and a type tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDef {
    pub name: String,
    pub field_type: FieldType,
}

impl FieldDef {
    pub fn new(name: impl Into<String>, field_type: impl Into<FieldType>) -> Self {
        Self {
            name: name.into(),
            field_type: field_type.into(),
        }
    }
}

/// Derived static-offset table for one schema. Pure function of the field
/// declarations; computed once and shared by every record of the schema.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldLayout {
    static_offsets: SmallVec<[usize; MAX_STATIC_FIELDS]>,
    total_static_size: usize,
    dynamic_field_count: usize,
    key_width: usize,
}

impl FieldLayout {
    /// Computes the layout for validated field lists. Offsets are the
    /// cumulative sum of preceding static widths in declared order.
    pub(crate) fn derive(key_fields: &[FieldDef], value_fields: &[FieldDef]) -> Self {
        let mut static_offsets = SmallVec::new();
        let mut offset = 0;
        let mut dynamic_field_count = 0;

        for field in value_fields {
            match field.field_type.fixed_size() {
                Some(size) => {
                    static_offsets.push(offset);
                    offset += size;
                }
                None => dynamic_field_count += 1,
            }
        }

        let key_width = key_fields
            .iter()
            .filter_map(|f| f.field_type.fixed_size())
            .sum();

        Self {
            static_offsets,
            total_static_size: offset,
            dynamic_field_count,
            key_width,
        }
    }

    /// Byte offset of the static value field at `idx` within the static blob.
    pub fn static_offset(&self, idx: usize) -> usize {
        self.static_offsets[idx]
    }

    pub fn static_field_count(&self) -> usize {
        self.static_offsets.len()
    }

    pub fn dynamic_field_count(&self) -> usize {
        self.dynamic_field_count
    }

    /// Exact byte length of the static blob.
    pub fn total_static_size(&self) -> usize {
        self.total_static_size
    }

    /// Exact byte length of an encoded key tuple.
    pub fn key_width(&self) -> usize {
        self.key_width
    }
}

/// Validated table schema with its derived layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableSchema {
    key_fields: Vec<FieldDef>,
    value_fields: Vec<FieldDef>,
    layout: FieldLayout,
}

impl TableSchema {
    /// Validates the field declarations and derives the layout. Rejection
    /// here is fatal to the schema; a schema that constructs never fails a
    /// structural check during encode or decode.
    pub fn new(key_fields: Vec<FieldDef>, value_fields: Vec<FieldDef>) -> Result<Self> {
        for field in key_fields.iter().chain(value_fields.iter()) {
            field
                .field_type
                .validate()
                .map_err(|e| eyre::eyre!("field {}: {}", field.name, e))?;
        }

        for field in &key_fields {
            eyre::ensure!(
                field.field_type.is_static(),
                "key field {} must have a static type",
                field.name
            );
        }

        let mut seen_dynamic = false;
        for field in &value_fields {
            if field.field_type.is_dynamic() {
                seen_dynamic = true;
            } else {
                eyre::ensure!(
                    !seen_dynamic,
                    "static value field {} declared after a dynamic field; \
                     static fields must come first",
                    field.name
                );
            }
        }

        let dynamic_count = value_fields
            .iter()
            .filter(|f| f.field_type.is_dynamic())
            .count();
        eyre::ensure!(
            dynamic_count <= MAX_DYNAMIC_FIELDS,
            "schema declares {} dynamic value fields, counter capacity is {}",
            dynamic_count,
            MAX_DYNAMIC_FIELDS
        );

        let static_count = value_fields.len() - dynamic_count;
        eyre::ensure!(
            static_count <= MAX_STATIC_FIELDS,
            "schema declares {} static value fields, maximum is {}",
            static_count,
            MAX_STATIC_FIELDS
        );

        let layout = FieldLayout::derive(&key_fields, &value_fields);
        Ok(Self {
            key_fields,
            value_fields,
            layout,
        })
    }

    pub fn key_fields(&self) -> &[FieldDef] {
        &self.key_fields
    }

    pub fn value_fields(&self) -> &[FieldDef] {
        &self.value_fields
    }

    /// The static prefix of the value fields, in declared order.
    pub fn static_value_fields(&self) -> &[FieldDef] {
        &self.value_fields[..self.layout.static_field_count()]
    }

    /// The dynamic suffix of the value fields, in declared order.
    pub fn dynamic_value_fields(&self) -> &[FieldDef] {
        &self.value_fields[self.layout.static_field_count()..]
    }

    pub fn layout(&self) -> &FieldLayout {
        &self.layout
    }

    /// Splits a full value tuple into its static and dynamic halves,
    /// checking the tuple length against the schema.
    pub(crate) fn split_values<'v>(
        &self,
        values: &'v [Value],
    ) -> Result<(&'v [Value], &'v [Value])> {
        eyre::ensure!(
            values.len() == self.value_fields.len(),
            "schema has {} value fields, got {} values",
            self.value_fields.len(),
            values.len()
        );
        Ok(values.split_at(self.layout.static_field_count()))
    }
}
