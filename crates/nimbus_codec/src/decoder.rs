//! Wire JSON to typed value.

use crate::error::{CodecError, CodecResult};
use nimbus_types::{
    wire, Asset, Decodable, Geolocation, Record, Reference, TypedValue, UnknownValue,
};
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;

/// Decode wire-format JSON into a typed value.
///
/// Objects whose `$type` names a known kind are handed to that kind's
/// decoder. Anything else, including objects with an unrecognised or
/// non-string `$type`, decodes as a plain mapping with every key kept.
///
/// # Errors
///
/// Returns [`CodecError::Types`] if a known envelope carries a malformed
/// payload, and [`CodecError::InvalidDate`] if a `date` envelope's `$date`
/// is not an ISO-8601 timestamp.
pub fn decode(json: &Value) -> CodecResult<TypedValue> {
    let value = match json {
        Value::Null => TypedValue::Null,
        Value::Bool(b) => TypedValue::Bool(*b),
        Value::Number(n) => TypedValue::Number(n.clone()),
        Value::String(s) => TypedValue::String(s.clone()),
        Value::Array(items) => TypedValue::Array(
            items
                .iter()
                .map(decode)
                .collect::<CodecResult<Vec<_>>>()?,
        ),
        Value::Object(object) => decode_object(json, object)?,
    };
    Ok(value)
}

/// Decode JSON that may be missing altogether.
///
/// `None` yields [`TypedValue::Absent`] rather than an error.
pub fn decode_optional(json: Option<&Value>) -> CodecResult<TypedValue> {
    json.map_or(Ok(TypedValue::Absent), decode)
}

/// Parse JSON text and decode it.
///
/// # Errors
///
/// Returns [`CodecError::Json`] if `text` is not valid JSON, otherwise the
/// errors of [`decode`].
pub fn from_json_str(text: &str) -> CodecResult<TypedValue> {
    let json: Value = serde_json::from_str(text)?;
    decode(&json)
}

fn decode_object(json: &Value, object: &Map<String, Value>) -> CodecResult<TypedValue> {
    let value = match wire::envelope_type(json) {
        Some(wire::GEO) => TypedValue::Geolocation(Geolocation::from_json(json)?),
        Some(wire::ASSET) => TypedValue::Asset(Asset::from_json(json)?),
        Some(wire::DATE) => TypedValue::Date(decode_date(object)?),
        Some(wire::REF) => TypedValue::Reference(Reference::from_json(json)?),
        Some(wire::UNKNOWN) => TypedValue::Unknown(UnknownValue::from_json(json)?),
        // Only the `$record` payload belongs to the record's own format.
        Some(wire::RECORD) => TypedValue::Record(Record::from_json(
            object.get(wire::RECORD_KEY).unwrap_or(&Value::Null),
        )?),
        _ => decode_map(object)?,
    };
    Ok(value)
}

fn decode_map(object: &Map<String, Value>) -> CodecResult<TypedValue> {
    let map: BTreeMap<String, TypedValue> = object
        .iter()
        .map(|(key, value)| decode(value).map(|v| (key.clone(), v)))
        .collect::<CodecResult<_>>()?;
    Ok(TypedValue::Map(map))
}

fn decode_date(object: &Map<String, Value>) -> CodecResult<OffsetDateTime> {
    let raw = match object.get(wire::DATE_KEY) {
        Some(Value::String(s)) => s,
        Some(other) => return Err(CodecError::invalid_date(other.to_string(), "not a string")),
        None => return Err(CodecError::invalid_date("", "missing $date")),
    };
    OffsetDateTime::parse(raw, &Rfc3339)
        .map_err(|e| CodecError::invalid_date(raw.as_str(), e.to_string()))
}
