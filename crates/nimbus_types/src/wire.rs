//! Wire-format constants shared with the backend.
//!
//! The `$type` discriminator strings are an external contract: any backend
//! or SDK exchanging data with this layer must use exactly these values.

use crate::error::{TypesError, TypesResult};
use serde_json::{Map, Value};

/// Key carrying the envelope discriminator.
pub const TYPE_KEY: &str = "$type";

/// Discriminator for geolocations.
pub const GEO: &str = "geo";
/// Discriminator for assets.
pub const ASSET: &str = "asset";
/// Discriminator for dates.
pub const DATE: &str = "date";
/// Discriminator for references.
pub const REF: &str = "ref";
/// Discriminator for unknown/placeholder values.
pub const UNKNOWN: &str = "unknown";
/// Discriminator for embedded records.
pub const RECORD: &str = "record";
/// Discriminator emitted by sequences. Not a decode target.
pub const SEQUENCE: &str = "seq";

/// Payload key holding a date's ISO-8601 string.
pub const DATE_KEY: &str = "$date";
/// Payload key holding an embedded record's own encoding.
pub const RECORD_KEY: &str = "$record";

/// Returns the `$type` discriminator of an envelope, if `value` is an object
/// carrying a string one.
pub fn envelope_type(value: &Value) -> Option<&str> {
    value.as_object()?.get(TYPE_KEY)?.as_str()
}

/// Starts an envelope object tagged with `kind`.
pub(crate) fn envelope(kind: &str) -> Map<String, Value> {
    let mut map = Map::new();
    map.insert(TYPE_KEY.to_string(), Value::String(kind.to_string()));
    map
}

/// Borrows `json` as an object, rejecting anything else as malformed `kind`.
pub(crate) fn expect_object<'a>(
    json: &'a Value,
    kind: &'static str,
) -> TypesResult<&'a Map<String, Value>> {
    json.as_object()
        .ok_or_else(|| TypesError::malformed(kind, format!("expected an object, got {json}")))
}

/// Reads a required string field.
pub(crate) fn required_str<'a>(
    object: &'a Map<String, Value>,
    key: &str,
    kind: &'static str,
) -> TypesResult<&'a str> {
    match object.get(key) {
        Some(Value::String(s)) => Ok(s),
        Some(other) => Err(TypesError::malformed(
            kind,
            format!("{key} must be a string, got {other}"),
        )),
        None => Err(TypesError::malformed(kind, format!("missing {key}"))),
    }
}

/// Reads an optional string field. `null` counts as absent.
pub(crate) fn optional_str(
    object: &Map<String, Value>,
    key: &str,
    kind: &'static str,
) -> TypesResult<Option<String>> {
    match object.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.clone())),
        Some(other) => Err(TypesError::malformed(
            kind,
            format!("{key} must be a string, got {other}"),
        )),
    }
}
