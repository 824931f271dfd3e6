//! Property-based test generators using proptest.
//!
//! Provides strategies for plain JSON and for typed values that survive an
//! encode/decode round trip.

use nimbus_types::{Asset, Geolocation, Record, Reference, TypedValue, UnknownValue};
use proptest::prelude::*;
use serde_json::{Map, Value};
use time::OffsetDateTime;

/// Latest instant with a four-digit year (9999-12-31T23:59:59Z).
const MAX_UNIX_SECONDS: i64 = 253_402_300_799;

/// Strategy for mapping keys. Includes integer-like keys such as `"0"` and
/// never starts with `$`.
pub fn key_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        prop::string::string_regex("[a-z_][a-z0-9_]{0,7}").expect("Invalid regex"),
        (0u32..20).prop_map(|n| n.to_string()),
    ]
}

/// Strategy for finite JSON scalars.
pub fn json_scalar_strategy() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(Value::from),
        (-1.0e9f64..1.0e9).prop_map(Value::from),
        prop::string::string_regex("[ -~]{0,16}")
            .expect("Invalid regex")
            .prop_map(Value::String),
    ]
}

/// Strategy for plain JSON without any `$type` keys.
pub fn plain_json_strategy() -> impl Strategy<Value = Value> {
    json_scalar_strategy().prop_recursive(4, 48, 6, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..6).prop_map(Value::Array),
            prop::collection::btree_map(key_strategy(), inner, 0..6)
                .prop_map(|map| Value::Object(map.into_iter().collect::<Map<_, _>>())),
        ]
    })
}

/// Strategy for UTC dates with millisecond precision and four-digit years.
pub fn date_strategy() -> impl Strategy<Value = OffsetDateTime> {
    (0..=MAX_UNIX_SECONDS, 0i128..1000).prop_map(|(seconds, millis)| {
        let nanos = i128::from(seconds) * 1_000_000_000 + millis * 1_000_000;
        OffsetDateTime::from_unix_timestamp_nanos(nanos).expect("timestamp in range")
    })
}

/// Strategy for record types.
pub fn record_type_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-z][a-z_]{0,11}").expect("Invalid regex")
}

/// Strategy for record identifiers.
pub fn record_id_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-z0-9][a-z0-9-]{0,15}").expect("Invalid regex")
}

/// Strategy for geolocations anywhere on the globe.
pub fn geolocation_strategy() -> impl Strategy<Value = Geolocation> {
    (-90.0f64..=90.0, -180.0f64..=180.0)
        .prop_map(|(lat, lng)| Geolocation::new(lat, lng).expect("coordinates in range"))
}

/// Strategy for assets, with or without a URL.
pub fn asset_strategy() -> impl Strategy<Value = Asset> {
    (
        prop::string::string_regex("[a-z0-9]{1,8}\\.(png|pdf|txt)").expect("Invalid regex"),
        prop::option::of(Just("https://files.example.com/")),
    )
        .prop_map(|(name, base)| {
            let asset = Asset::new(name.clone()).expect("name is not empty");
            match base {
                Some(base) => asset.with_url(format!("{base}{name}")),
                None => asset,
            }
        })
}

/// Strategy for references.
pub fn reference_strategy() -> impl Strategy<Value = Reference> {
    (record_type_strategy(), record_id_strategy())
        .prop_map(|(t, id)| Reference::new(t, id).expect("valid reference"))
}

/// Strategy for records with plain JSON attributes.
///
/// Attribute names never start with `_`, which records reserve for
/// metadata.
pub fn record_strategy() -> impl Strategy<Value = Record> {
    let attribute_name = prop::string::string_regex("[a-z][a-z0-9_]{0,7}").expect("Invalid regex");
    (
        record_type_strategy(),
        record_id_strategy(),
        prop::collection::btree_map(attribute_name, plain_json_strategy(), 0..4),
    )
        .prop_map(|(t, id, attributes)| {
            attributes.into_iter().fold(
                Record::with_id(t, id).expect("valid record"),
                |record, (key, value)| record.with_attribute(key, value),
            )
        })
}

/// Strategy for the domain kinds that decode back to themselves.
pub fn typed_leaf_strategy() -> impl Strategy<Value = TypedValue> {
    prop_oneof![
        date_strategy().prop_map(TypedValue::Date),
        geolocation_strategy().prop_map(TypedValue::Geolocation),
        asset_strategy().prop_map(TypedValue::Asset),
        reference_strategy().prop_map(TypedValue::Reference),
        record_strategy().prop_map(TypedValue::Record),
        prop::option::of(prop::string::string_regex("[a-z]{1,8}").expect("Invalid regex"))
            .prop_map(|t| TypedValue::Unknown(UnknownValue::new(t))),
    ]
}

/// Strategy for typed values that survive `decode(encode(v))`.
///
/// Excludes `Absent`, sequences and roles, none of which decode back.
pub fn typed_value_strategy() -> impl Strategy<Value = TypedValue> {
    let leaf = prop_oneof![
        2 => json_scalar_strategy().prop_map(scalar_to_typed),
        1 => typed_leaf_strategy(),
    ];
    leaf.prop_recursive(3, 32, 5, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..5).prop_map(TypedValue::Array),
            prop::collection::btree_map(key_strategy(), inner, 0..5).prop_map(TypedValue::Map),
        ]
    })
}

fn scalar_to_typed(value: Value) -> TypedValue {
    match value {
        Value::Bool(b) => TypedValue::Bool(b),
        Value::Number(n) => TypedValue::Number(n),
        Value::String(s) => TypedValue::String(s),
        _ => TypedValue::Null,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::test_runner::TestRunner;

    #[test]
    fn plain_json_has_no_type_keys() {
        fn has_type_key(value: &Value) -> bool {
            match value {
                Value::Object(map) => {
                    map.keys().any(|k| k.starts_with('$')) || map.values().any(has_type_key)
                }
                Value::Array(items) => items.iter().any(has_type_key),
                _ => false,
            }
        }

        let mut runner = TestRunner::default();
        runner
            .run(&plain_json_strategy(), |value| {
                prop_assert!(!has_type_key(&value));
                Ok(())
            })
            .unwrap();
    }

    #[test]
    fn dates_have_millisecond_precision() {
        let mut runner = TestRunner::default();
        runner
            .run(&date_strategy(), |date| {
                prop_assert_eq!(date.nanosecond() % 1_000_000, 0);
                prop_assert!(date.year() <= 9999);
                Ok(())
            })
            .unwrap();
    }
}
