//! # Packed Length Counter
//!
//! This module provides `EncodedLengths`, a single 32-byte big-endian word
//! holding the total dynamic-data byte length plus the individual byte
//! length of each dynamic field.
//!
//! ## Word Layout
//!
//! ```text
//! byte  0         5        10        15        20        25            32
//!       +---------+---------+---------+---------+---------+------------+
//!       | slot 4  | slot 3  | slot 2  | slot 1  | slot 0  |   total    |
//!       | 5 bytes | 5 bytes | 5 bytes | 5 bytes | 5 bytes |  7 bytes   |
//!       +---------+---------+---------+---------+---------+------------+
//! ```
//!
//! The total occupies the least significant 7 bytes (56 bits); slot *k*
//! occupies the 5 bytes (40 bits) immediately above slot *k-1*. Capacity is
//! exactly 5 slots; each slot caps at 2^40-1 bytes, the total at 2^56-1.
//!
//! ## Design
//!
//! Keeping every length in one fixed-width side word, instead of length-
//! prefixing each dynamic field inside the data blob, keeps the blob itself
//! prefix-free and directly concatenable, and makes the aggregate length
//! readable without scanning the blob. The counter and its blob are only
//! meaningful as a pair and must travel together.

use eyre::Result;

/// Number of length slots in the counter; the hard cap on dynamic fields
/// per schema.
pub const MAX_DYNAMIC_FIELDS: usize = 5;

/// Maximum byte length of a single dynamic field (40-bit slot).
pub const MAX_FIELD_LENGTH: u64 = (1 << 40) - 1;

/// Maximum total dynamic byte length (56-bit accumulator).
pub const MAX_TOTAL_LENGTH: u64 = (1 << 56) - 1;

const WORD_BYTES: usize = 32;
const SLOT_BYTES: usize = 5;
const TOTAL_BYTES: usize = 7;
const TOTAL_START: usize = WORD_BYTES - TOTAL_BYTES;

/// Bit-packed dynamic length counter. The zero value is the empty counter
/// (no dynamic fields, total 0).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct EncodedLengths([u8; WORD_BYTES]);

impl EncodedLengths {
    /// Packs one byte length per dynamic field, in schema order. Fails if
    /// more than [`MAX_DYNAMIC_FIELDS`] lengths are given, any length
    /// exceeds its slot, or the total exceeds the accumulator.
    pub fn encode(lengths: &[u64]) -> Result<Self> {
        eyre::ensure!(
            lengths.len() <= MAX_DYNAMIC_FIELDS,
            "{} dynamic lengths exceed counter capacity {}",
            lengths.len(),
            MAX_DYNAMIC_FIELDS
        );

        let mut word = [0u8; WORD_BYTES];
        let mut total: u64 = 0;
        for (slot, &len) in lengths.iter().enumerate() {
            eyre::ensure!(
                len <= MAX_FIELD_LENGTH,
                "dynamic field {} length {} exceeds slot maximum {}",
                slot,
                len,
                MAX_FIELD_LENGTH
            );
            total += len;
            let start = TOTAL_START - SLOT_BYTES * (slot + 1);
            word[start..start + SLOT_BYTES].copy_from_slice(&len.to_be_bytes()[3..]);
        }
        eyre::ensure!(
            total <= MAX_TOTAL_LENGTH,
            "total dynamic length {} exceeds counter maximum {}",
            total,
            MAX_TOTAL_LENGTH
        );
        word[TOTAL_START..].copy_from_slice(&total.to_be_bytes()[1..]);

        Ok(Self(word))
    }

    /// Aggregate dynamic-data byte length.
    pub fn total(&self) -> u64 {
        let mut buf = [0u8; 8];
        buf[1..].copy_from_slice(&self.0[TOTAL_START..]);
        u64::from_be_bytes(buf)
    }

    /// Byte length of the dynamic field at `index`. The index bound is the
    /// schema's dynamic field count, which the counter does not know; an
    /// out-of-range index within capacity reads an empty slot (0).
    ///
    /// # Panics
    ///
    /// Panics if `index >= MAX_DYNAMIC_FIELDS`.
    pub fn len_at(&self, index: usize) -> u64 {
        assert!(
            index < MAX_DYNAMIC_FIELDS,
            "counter slot index {index} out of range"
        );
        let start = TOTAL_START - SLOT_BYTES * (index + 1);
        let mut buf = [0u8; 8];
        buf[3..].copy_from_slice(&self.0[start..start + SLOT_BYTES]);
        u64::from_be_bytes(buf)
    }

    /// True for the all-zero word, the counter a schema with no dynamic
    /// fields encodes to. A word reinterpreted via
    /// [`EncodedLengths::from_bytes`] with a zero total but non-zero slot
    /// bytes is not empty.
    pub fn is_empty(&self) -> bool {
        self.0 == [0u8; WORD_BYTES]
    }

    /// Big-endian wire form of the counter word.
    pub fn as_bytes(&self) -> &[u8; WORD_BYTES] {
        &self.0
    }

    /// Reinterprets a wire word as a counter. Trusts that the word was
    /// produced by [`EncodedLengths::encode`] or an equivalent producer.
    pub fn from_bytes(bytes: [u8; WORD_BYTES]) -> Self {
        Self(bytes)
    }
}
