//! # Schema-Driven Record Codec
//!
//! This module converts between typed field values and the three-buffer
//! wire representation of a record.
//!
//! ## Wire Layout
//!
//! ```text
//! +---------------------+----------------------+---------------------+
//! | staticData          | encodedLengths       | dynamicData         |
//! | [u8; staticWidth]   | [u8; 32] packed word | [u8; total()]       |
//! +---------------------+----------------------+---------------------+
//! ```
//!
//! | Buffer | Contents |
//! |--------|----------|
//! | **staticData** | Each static field's fixed-width big-endian encoding at its precomputed offset |
//! | **encodedLengths** | Total dynamic byte length + per-field lengths, bit-packed into one word |
//! | **dynamicData** | Each dynamic field's natural byte encoding, concatenated in schema order |
//!
//! ## Design Goals
//!
//! 1. **Schema-driven**: offsets and widths come from the schema, never
//!    from the wire; the format does not self-describe
//! 2. **Deterministic**: identical values always produce identical bytes,
//!    so emitted records can be replayed to reconstruct state
//! 3. **Prefix-free dynamic blob**: lengths live in the side counter, so
//!    dynamic payloads concatenate directly
//! 4. **Pure**: every codec function is a synchronous function over its own
//!    buffers, safe to call from any number of threads
//!
//! ## Module Structure
//!
//! - `schema`: field declarations, validation, and the derived offset layout
//! - `lengths`: the packed length counter word
//! - `encode`: static/dynamic/key encoders
//! - `decode`: checked static/dynamic decoders
//! - `record`: whole-record composition and the wire triple

pub mod decode;
pub mod encode;
pub mod lengths;
pub mod record;
pub mod schema;

#[cfg(test)]
mod tests;

pub use decode::{decode_dynamic, decode_static, read_static_field};
pub use encode::{encode_dynamic, encode_key, encode_static};
pub use lengths::{EncodedLengths, MAX_DYNAMIC_FIELDS, MAX_FIELD_LENGTH, MAX_TOTAL_LENGTH};
pub use record::{decode_record, encode_record, Record, RecordBlob};
pub use schema::{FieldDef, FieldLayout, TableSchema, MAX_STATIC_FIELDS};
