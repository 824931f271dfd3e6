//! Property tests for the wire codec.

use nimbus_codec::{decode, decode_optional, encode, is_value_type, CodecError};
use nimbus_testkit::generators::{
    plain_json_strategy, typed_leaf_strategy, typed_value_strategy,
};
use nimbus_types::TypedValue;
use proptest::prelude::*;
use serde_json::json;

proptest! {
    #[test]
    fn typed_values_survive_roundtrip(value in typed_value_strategy()) {
        let json = encode(&value).unwrap();
        prop_assert_eq!(decode(&json).unwrap(), value);
    }

    #[test]
    fn plain_json_is_idempotent(json in plain_json_strategy()) {
        let decoded = decode(&json).unwrap();
        prop_assert_eq!(&encode(&decoded).unwrap(), &json);
        prop_assert_eq!(decode(&encode(&decoded).unwrap()).unwrap(), decoded);
    }

    #[test]
    fn domain_leaves_are_value_types(value in typed_leaf_strategy()) {
        // Dates are wrapped by the codec itself and are not domain kinds.
        prop_assert_eq!(is_value_type(&value), !matches!(value, TypedValue::Date(_)));
    }

    #[test]
    fn arrays_keep_length_and_order(items in prop::collection::vec(typed_leaf_strategy(), 0..8)) {
        let json = encode(&TypedValue::Array(items.clone())).unwrap();
        let encoded = json.as_array().unwrap();
        prop_assert_eq!(encoded.len(), items.len());
        for (item, encoded) in items.iter().zip(encoded) {
            prop_assert_eq!(&encode(item).unwrap(), encoded);
        }
    }
}

#[test]
fn array_like_object_keeps_string_keys() {
    let json = json!({"0": "a", "1": "b"});
    let decoded = decode(&json).unwrap();
    assert!(decoded.as_array().is_none());
    assert_eq!(decoded.get("0"), Some(&TypedValue::from("a")));
    assert_eq!(decoded.get("1"), Some(&TypedValue::from("b")));
    assert_eq!(encode(&decoded).unwrap(), json);
}

#[test]
fn sparse_array_like_object_is_not_truncated() {
    let json = json!({"0": "a", "5": "f", "length": 6});
    assert_eq!(encode(&decode(&json).unwrap()).unwrap(), json);
}

#[test]
fn null_and_absent_edges() {
    assert_eq!(encode(&TypedValue::Absent), Err(CodecError::AbsentValue));
    assert_eq!(encode(&TypedValue::Null).unwrap(), serde_json::Value::Null);
    assert_eq!(decode(&serde_json::Value::Null).unwrap(), TypedValue::Null);
    assert_eq!(decode_optional(None).unwrap(), TypedValue::Absent);
}

#[test]
fn record_payload_is_unwrapped_once() {
    // The record's own format may itself look like an envelope; it is not
    // interpreted by the codec.
    let json = json!({
        "$type": "record",
        "$record": {"_id": "note/n1", "$type": "geo", "when": {"$type": "date"}},
    });
    let value = decode(&json).unwrap();
    let record = value.as_record().unwrap();
    assert_eq!(record.get("$type"), Some(&json!("geo")));
    assert_eq!(record.get("when"), Some(&json!({"$type": "date"})));
    assert_eq!(encode(&value).unwrap(), json);
}
