//! # Nimbus Codec
//!
//! Wire-format JSON encoding/decoding of Nimbus typed values.
//!
//! The backend exchanges domain values as JSON objects tagged with a
//! `$type` discriminator:
//!
//! | `$type`   | value                                 |
//! |-----------|---------------------------------------|
//! | `geo`     | [`nimbus_types::Geolocation`]         |
//! | `asset`   | [`nimbus_types::Asset`]               |
//! | `date`    | ISO-8601 timestamp under `$date`      |
//! | `ref`     | [`nimbus_types::Reference`]           |
//! | `unknown` | [`nimbus_types::UnknownValue`]        |
//! | `record`  | record's own encoding under `$record` |
//!
//! Objects without a recognised `$type` are plain mappings and are
//! converted key by key. Arrays are converted element-wise and scalars pass
//! through unchanged.
//!
//! ## Usage
//!
//! ```
//! use nimbus_codec::{decode, encode};
//! use nimbus_types::{Geolocation, TypedValue};
//!
//! let value = TypedValue::map([
//!     ("name", TypedValue::from("HQ")),
//!     ("location", TypedValue::from(Geolocation::new(22.3, 114.2).unwrap())),
//! ]);
//! let json = encode(&value).unwrap();
//! assert_eq!(json["location"]["$type"], "geo");
//!
//! let decoded = decode(&json).unwrap();
//! assert_eq!(value, decoded);
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

mod decoder;
mod encoder;
mod error;
mod kind;

pub use decoder::{decode, decode_optional, from_json_str};
pub use encoder::{encode, to_json_string};
pub use error::{CodecError, CodecResult};
pub use kind::{is_value_type, value_kind, ValueKind};
pub use nimbus_types::wire;

#[cfg(test)]
mod tests {
    use super::*;
    use nimbus_types::{Asset, Geolocation, Record, Reference, TypedValue, UnknownValue};
    use serde_json::json;
    use time::macros::datetime;

    fn roundtrip(value: &TypedValue) -> TypedValue {
        decode(&encode(value).unwrap()).unwrap()
    }

    #[test]
    fn roundtrip_date() {
        let value = TypedValue::from(datetime!(2014-09-27 17:40:00.5 UTC));
        assert_eq!(roundtrip(&value), value);
    }

    #[test]
    fn roundtrip_collaborators() {
        let values = [
            TypedValue::from(
                Asset::new("report.pdf")
                    .unwrap()
                    .with_url("https://files.example.com/report.pdf"),
            ),
            TypedValue::from(Reference::new("note", "n1").unwrap()),
            TypedValue::from(Geolocation::new(-33.86, 151.21).unwrap()),
            TypedValue::from(UnknownValue::new(Some("money".into()))),
        ];
        for value in values {
            assert_eq!(roundtrip(&value), value);
        }
    }

    #[test]
    fn roundtrip_record() {
        let record = Record::with_id("note", "n1")
            .unwrap()
            .with_attribute("title", "groceries")
            .with_attribute("tags", json!(["home"]));
        let value = TypedValue::from(record);
        assert_eq!(roundtrip(&value), value);
    }

    #[test]
    fn roundtrip_array_like_object() {
        let json = json!({"0": "a", "1": "b"});
        let decoded = decode(&json).unwrap();
        assert_eq!(decoded.as_map().map(|m| m.len()), Some(2));
        assert_eq!(encode(&decoded).unwrap(), json);
    }

    #[test]
    fn null_roundtrip() {
        assert_eq!(encode(&TypedValue::Null).unwrap(), serde_json::Value::Null);
        assert_eq!(decode(&serde_json::Value::Null).unwrap(), TypedValue::Null);
    }
}
