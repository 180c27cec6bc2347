//! Tests for the records module

use super::*;
use crate::types::{FieldType, StaticType, Value};

fn addr(byte: u8) -> [u8; 20] {
    [byte; 20]
}

/// Key: uint32. Values: uint32, bool, bytes, uint32[].
fn scenario_schema() -> TableSchema {
    TableSchema::new(
        vec![FieldDef::new("id", StaticType::Uint(4))],
        vec![
            FieldDef::new("score", StaticType::Uint(4)),
            FieldDef::new("active", StaticType::Bool),
            FieldDef::new("payload", FieldType::Bytes),
            FieldDef::new("history", FieldType::Array(StaticType::Uint(4))),
        ],
    )
    .unwrap()
}

fn scenario_values() -> Vec<Value> {
    vec![
        Value::Uint(1000),
        Value::Bool(true),
        Value::Bytes(vec![0xAA, 0xBB]),
        Value::Array(vec![Value::Uint(7), Value::Uint(8)]),
    ]
}

#[test]
fn layout_offsets_are_cumulative_static_widths() {
    let schema = TableSchema::new(
        vec![],
        vec![
            FieldDef::new("a", StaticType::Uint(4)),
            FieldDef::new("b", StaticType::Bool),
            FieldDef::new("c", StaticType::Address),
        ],
    )
    .unwrap();

    let layout = schema.layout();
    assert_eq!(layout.static_offset(0), 0);
    assert_eq!(layout.static_offset(1), 4);
    assert_eq!(layout.static_offset(2), 5);
    assert_eq!(layout.total_static_size(), 25);
    assert_eq!(layout.static_field_count(), 3);
    assert_eq!(layout.dynamic_field_count(), 0);
}

#[test]
fn layout_is_a_pure_function_of_the_schema() {
    let fields = || {
        (
            vec![FieldDef::new("k", StaticType::Uint(8))],
            vec![
                FieldDef::new("a", StaticType::Int(2)),
                FieldDef::new("b", FieldType::Text),
            ],
        )
    };
    let (k1, v1) = fields();
    let (k2, v2) = fields();

    let first = TableSchema::new(k1, v1).unwrap();
    let second = TableSchema::new(k2, v2).unwrap();
    assert_eq!(first.layout(), second.layout());
}

#[test]
fn schema_rejects_too_many_dynamic_fields() {
    let value_fields = (0..MAX_DYNAMIC_FIELDS + 1)
        .map(|i| FieldDef::new(format!("d{i}"), FieldType::Bytes))
        .collect();

    let result = TableSchema::new(vec![], value_fields);
    assert!(result.is_err());
    assert!(result
        .unwrap_err()
        .to_string()
        .contains("counter capacity"));
}

#[test]
fn schema_accepts_counter_capacity_exactly() {
    let value_fields = (0..MAX_DYNAMIC_FIELDS)
        .map(|i| FieldDef::new(format!("d{i}"), FieldType::Bytes))
        .collect();

    assert!(TableSchema::new(vec![], value_fields).is_ok());
}

#[test]
fn schema_rejects_too_many_static_fields() {
    let value_fields = (0..MAX_STATIC_FIELDS + 1)
        .map(|i| FieldDef::new(format!("s{i}"), StaticType::Bool))
        .collect();

    let result = TableSchema::new(vec![], value_fields);
    assert!(result.is_err());
    assert!(result
        .unwrap_err()
        .to_string()
        .contains(&format!("maximum is {MAX_STATIC_FIELDS}")));
}

#[test]
fn schema_accepts_static_field_maximum_exactly() {
    let value_fields = (0..MAX_STATIC_FIELDS)
        .map(|i| FieldDef::new(format!("s{i}"), StaticType::Bool))
        .collect();

    assert!(TableSchema::new(vec![], value_fields).is_ok());
}

#[test]
fn schema_rejects_dynamic_key_field() {
    let result = TableSchema::new(vec![FieldDef::new("k", FieldType::Text)], vec![]);
    assert!(result.is_err());
    assert!(result.unwrap_err().to_string().contains("static type"));
}

#[test]
fn schema_rejects_static_field_after_dynamic() {
    let result = TableSchema::new(
        vec![],
        vec![
            FieldDef::new("d", FieldType::Bytes),
            FieldDef::new("s", StaticType::Uint(4)),
        ],
    );
    assert!(result.is_err());
    assert!(result
        .unwrap_err()
        .to_string()
        .contains("static fields must come first"));
}

#[test]
fn schema_rejects_out_of_range_widths() {
    assert!(StaticType::uint(0).is_err());
    assert!(StaticType::uint(17).is_err());
    assert!(StaticType::int(17).is_err());
    assert!(StaticType::fixed_bytes(33).is_err());
    assert!(StaticType::fixed_bytes(32).is_ok());

    let result = TableSchema::new(vec![], vec![FieldDef::new("w", StaticType::Uint(17))]);
    assert!(result.is_err());
}

#[test]
fn lengths_pack_total_and_per_field_slots() {
    let lengths = EncodedLengths::encode(&[2, 8]).unwrap();
    assert_eq!(lengths.total(), 10);
    assert_eq!(lengths.len_at(0), 2);
    assert_eq!(lengths.len_at(1), 8);
    assert_eq!(lengths.len_at(2), 0);
}

#[test]
fn lengths_wire_word_is_big_endian() {
    let lengths = EncodedLengths::encode(&[2, 8]).unwrap();
    let word = lengths.as_bytes();

    // Total (10) in the low 7 bytes, slot 0 and slot 1 in the 5-byte
    // slots immediately above.
    assert_eq!(word[31], 10);
    assert_eq!(word[24], 2);
    assert_eq!(word[19], 8);
    assert!(word[..19].iter().all(|&b| b == 0));

    assert_eq!(EncodedLengths::from_bytes(*word), lengths);
}

#[test]
fn lengths_zero_value_is_empty() {
    let empty = EncodedLengths::encode(&[]).unwrap();
    assert!(empty.is_empty());
    assert_eq!(empty.total(), 0);
    assert_eq!(empty, EncodedLengths::default());
}

#[test]
fn lengths_is_empty_means_the_all_zero_word() {
    // Zero total but a dirty slot byte: malformed as a counter, and not
    // the empty word.
    let mut word = [0u8; 32];
    word[24] = 3;
    let dirty = EncodedLengths::from_bytes(word);
    assert_eq!(dirty.total(), 0);
    assert!(!dirty.is_empty());
}

#[test]
fn lengths_reject_slot_overflow() {
    let result = EncodedLengths::encode(&[MAX_FIELD_LENGTH + 1]);
    assert!(result.is_err());
    assert!(result.unwrap_err().to_string().contains("slot maximum"));

    assert!(EncodedLengths::encode(&[MAX_FIELD_LENGTH]).is_ok());
}

#[test]
fn lengths_reject_too_many_slots() {
    let result = EncodedLengths::encode(&[1; MAX_DYNAMIC_FIELDS + 1]);
    assert!(result.is_err());
    assert!(result
        .unwrap_err()
        .to_string()
        .contains("counter capacity"));
}

#[test]
fn static_encoding_is_big_endian_at_fixed_offsets() {
    let schema = scenario_schema();
    let blob = encode_static(&[Value::Uint(1000), Value::Bool(true)], &schema).unwrap();
    assert_eq!(blob, vec![0x00, 0x00, 0x03, 0xE8, 0x01]);
}

#[test]
fn static_roundtrip_recovers_typed_values() {
    let schema = TableSchema::new(
        vec![],
        vec![
            FieldDef::new("n", StaticType::Uint(4)),
            FieldDef::new("flag", StaticType::Bool),
            FieldDef::new("owner", StaticType::Address),
        ],
    )
    .unwrap();

    let values = vec![Value::Uint(1000), Value::Bool(true), Value::Address(addr(0x42))];
    let blob = encode_static(&values, &schema).unwrap();
    assert_eq!(blob.len(), 25);
    assert_eq!(decode_static(&blob, &schema).unwrap(), values);
}

#[test]
fn static_decode_rejects_length_mismatch() {
    let schema = scenario_schema();
    let result = decode_static(&[0u8; 4], &schema);
    assert!(result.is_err());
    assert!(result.unwrap_err().to_string().contains("layout expects"));
}

#[test]
fn static_encode_rejects_value_wider_than_field() {
    let schema = TableSchema::new(vec![], vec![FieldDef::new("n", StaticType::Uint(2))]).unwrap();
    let result = encode_static(&[Value::Uint(65536)], &schema);
    assert!(result.is_err());
    assert!(result.unwrap_err().to_string().contains("does not fit"));
}

#[test]
fn static_encode_rejects_type_mismatch() {
    let schema = TableSchema::new(vec![], vec![FieldDef::new("n", StaticType::Uint(4))]).unwrap();
    let result = encode_static(&[Value::Bool(true)], &schema);
    assert!(result.is_err());
    assert!(result.unwrap_err().to_string().contains("expected"));
}

#[test]
fn static_encode_rejects_wrong_fixed_bytes_length() {
    let schema =
        TableSchema::new(vec![], vec![FieldDef::new("h", StaticType::FixedBytes(8))]).unwrap();
    let result = encode_static(&[Value::FixedBytes(vec![1, 2, 3])], &schema);
    assert!(result.is_err());
}

#[test]
fn signed_values_roundtrip_with_sign_extension() {
    let schema = TableSchema::new(
        vec![],
        vec![
            FieldDef::new("a", StaticType::Int(2)),
            FieldDef::new("b", StaticType::Int(8)),
        ],
    )
    .unwrap();

    let values = vec![Value::Int(-1), Value::Int(-123_456_789)];
    let blob = encode_static(&values, &schema).unwrap();
    assert_eq!(&blob[..2], &[0xFF, 0xFF]);
    assert_eq!(decode_static(&blob, &schema).unwrap(), values);
}

#[test]
fn int_range_check_respects_declared_width() {
    let schema = TableSchema::new(vec![], vec![FieldDef::new("a", StaticType::Int(1))]).unwrap();
    assert!(encode_static(&[Value::Int(127)], &schema).is_ok());
    assert!(encode_static(&[Value::Int(-128)], &schema).is_ok());
    assert!(encode_static(&[Value::Int(128)], &schema).is_err());
    assert!(encode_static(&[Value::Int(-129)], &schema).is_err());
}

#[test]
fn dynamic_encoding_concatenates_in_schema_order() {
    let schema = scenario_schema();
    let (lengths, blob) = encode_dynamic(
        &[
            Value::Bytes(vec![0xAA, 0xBB]),
            Value::Array(vec![Value::Uint(7), Value::Uint(8)]),
        ],
        &schema,
    )
    .unwrap();

    assert_eq!(lengths.total(), 10);
    assert_eq!(lengths.len_at(0), 2);
    assert_eq!(lengths.len_at(1), 8);
    assert_eq!(
        blob,
        vec![0xAA, 0xBB, 0x00, 0x00, 0x00, 0x07, 0x00, 0x00, 0x00, 0x08]
    );
}

#[test]
fn whole_record_scenario_matches_expected_wire_bytes() {
    let schema = scenario_schema();
    let blob = encode_record(&scenario_values(), &schema).unwrap();

    assert_eq!(blob.static_data, vec![0x00, 0x00, 0x03, 0xE8, 0x01]);
    assert_eq!(blob.encoded_lengths.total(), 10);
    assert_eq!(blob.encoded_lengths.len_at(0), 2);
    assert_eq!(blob.encoded_lengths.len_at(1), 8);
    assert_eq!(
        blob.dynamic_data,
        vec![0xAA, 0xBB, 0x00, 0x00, 0x00, 0x07, 0x00, 0x00, 0x00, 0x08]
    );

    assert_eq!(decode_record(&blob, &schema).unwrap(), scenario_values());
}

#[test]
fn record_roundtrip_over_all_field_shapes() {
    let schema = TableSchema::new(
        vec![FieldDef::new("id", StaticType::Uint(8))],
        vec![
            FieldDef::new("flag", StaticType::Bool),
            FieldDef::new("count", StaticType::Uint(16)),
            FieldDef::new("delta", StaticType::Int(4)),
            FieldDef::new("hash", StaticType::FixedBytes(32)),
            FieldDef::new("owner", StaticType::Address),
            FieldDef::new("blob", FieldType::Bytes),
            FieldDef::new("label", FieldType::Text),
            FieldDef::new("owners", FieldType::Array(StaticType::Address)),
        ],
    )
    .unwrap();

    let values = vec![
        Value::Bool(false),
        Value::Uint(u128::MAX),
        Value::Int(-42),
        Value::FixedBytes(vec![0x11; 32]),
        Value::Address(addr(0x22)),
        Value::Bytes(vec![]),
        Value::Text("héllo wörld".to_string()),
        Value::Array(vec![Value::Address(addr(1)), Value::Address(addr(2))]),
    ];

    let blob = encode_record(&values, &schema).unwrap();
    assert_eq!(decode_record(&blob, &schema).unwrap(), values);
}

#[test]
fn encoding_is_deterministic() {
    let schema = scenario_schema();
    let first = encode_record(&scenario_values(), &schema).unwrap();
    let second = encode_record(&scenario_values(), &schema).unwrap();
    assert_eq!(first, second);
}

#[test]
fn schema_without_dynamic_fields_produces_empty_counter_and_blob() {
    let schema = TableSchema::new(vec![], vec![FieldDef::new("n", StaticType::Uint(4))]).unwrap();

    let blob = encode_record(&[Value::Uint(5)], &schema).unwrap();
    assert!(blob.encoded_lengths.is_empty());
    assert_eq!(blob.encoded_lengths.total(), 0);
    assert!(blob.dynamic_data.is_empty());

    // Decode must not look at the dynamic blob at all.
    let values = decode_dynamic(&blob.encoded_lengths, &[0xFF; 4], &schema).unwrap();
    assert!(values.is_empty());
}

#[test]
fn zero_length_dynamic_fields_decode_as_empty_values() {
    let schema = TableSchema::new(
        vec![],
        vec![
            FieldDef::new("blob", FieldType::Bytes),
            FieldDef::new("items", FieldType::Array(StaticType::Uint(4))),
        ],
    )
    .unwrap();

    let values = vec![Value::Bytes(vec![]), Value::Array(vec![])];
    let blob = encode_record(&values, &schema).unwrap();
    assert_eq!(blob.encoded_lengths.total(), 0);
    assert!(blob.dynamic_data.is_empty());
    assert_eq!(decode_record(&blob, &schema).unwrap(), values);
}

#[test]
fn dynamic_decode_rejects_counter_blob_disagreement() {
    let schema = scenario_schema();
    let lengths = EncodedLengths::encode(&[2, 8]).unwrap();
    let result = decode_dynamic(&lengths, &[0u8; 9], &schema);
    assert!(result.is_err());
    assert!(result.unwrap_err().to_string().contains("counter total"));
}

#[test]
fn dynamic_decode_rejects_ragged_array_payload() {
    let schema = TableSchema::new(
        vec![],
        vec![FieldDef::new("items", FieldType::Array(StaticType::Uint(4)))],
    )
    .unwrap();

    let lengths = EncodedLengths::encode(&[6]).unwrap();
    let result = decode_dynamic(&lengths, &[0u8; 6], &schema);
    assert!(result.is_err());
    assert!(result
        .unwrap_err()
        .to_string()
        .contains("not a multiple of element width"));
}

#[test]
fn dynamic_decode_rejects_invalid_utf8_text() {
    let schema =
        TableSchema::new(vec![], vec![FieldDef::new("label", FieldType::Text)]).unwrap();

    let lengths = EncodedLengths::encode(&[2]).unwrap();
    let result = decode_dynamic(&lengths, &[0xFF, 0xFE], &schema);
    assert!(result.is_err());
    assert!(result.unwrap_err().to_string().contains("invalid UTF-8"));
}

#[test]
fn dynamic_type_mismatch_is_rejected_at_encode() {
    let schema =
        TableSchema::new(vec![], vec![FieldDef::new("label", FieldType::Text)]).unwrap();
    let result = encode_dynamic(&[Value::Bytes(vec![1])], &schema);
    assert!(result.is_err());
}

#[test]
fn array_elements_must_match_the_element_type() {
    let schema = TableSchema::new(
        vec![],
        vec![FieldDef::new("items", FieldType::Array(StaticType::Uint(4)))],
    )
    .unwrap();

    let result = encode_dynamic(&[Value::Array(vec![Value::Bool(true)])], &schema);
    assert!(result.is_err());
}

#[test]
fn value_tuple_length_must_match_schema() {
    let schema = scenario_schema();
    assert!(encode_record(&[Value::Uint(1)], &schema).is_err());
    assert!(encode_record(&scenario_values()[..3], &schema).is_err());
}

#[test]
fn single_static_field_reads_straight_from_offset() {
    let schema = scenario_schema();
    let blob = encode_static(&[Value::Uint(1000), Value::Bool(true)], &schema).unwrap();

    assert_eq!(read_static_field(&blob, 0, &schema).unwrap(), Value::Uint(1000));
    assert_eq!(read_static_field(&blob, 1, &schema).unwrap(), Value::Bool(true));
    assert!(read_static_field(&blob, 2, &schema).is_err());
}

#[test]
fn key_tuple_concatenates_fixed_width_encodings() {
    let schema = TableSchema::new(
        vec![
            FieldDef::new("a", StaticType::Uint(4)),
            FieldDef::new("b", StaticType::Bool),
        ],
        vec![FieldDef::new("v", StaticType::Uint(1))],
    )
    .unwrap();

    let key = encode_key(&[Value::Uint(1000), Value::Bool(true)], &schema).unwrap();
    assert_eq!(key, vec![0x00, 0x00, 0x03, 0xE8, 0x01]);
    assert_eq!(key.len(), schema.layout().key_width());
}

#[test]
fn value_shape_checks_match_field_types() {
    assert!(Value::Uint(1).matches_static(StaticType::Uint(4)));
    assert!(!Value::Uint(1).matches_static(StaticType::Int(4)));
    assert!(Value::Text("x".into()).matches(FieldType::Text));
    assert!(Value::Array(vec![Value::Uint(1)]).matches(FieldType::Array(StaticType::Uint(4))));
    assert!(!Value::Array(vec![Value::Bool(true)]).matches(FieldType::Array(StaticType::Uint(4))));
    assert!(!Value::Bytes(vec![]).matches(FieldType::Text));
}

#[test]
fn key_tuple_length_must_match_schema() {
    let schema = scenario_schema();
    assert!(encode_key(&[], &schema).is_err());
    assert!(encode_key(&[Value::Uint(1), Value::Uint(2)], &schema).is_err());
}
