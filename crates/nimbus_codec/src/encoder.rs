//! Typed value to wire JSON.

use crate::error::{CodecError, CodecResult};
use nimbus_types::{wire, Encodable, Record, TypedValue};
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use time::format_description::well_known::Rfc3339;
use time::{OffsetDateTime, UtcOffset};

/// Encode a typed value to wire-format JSON.
///
/// Dates and records are wrapped in `$type` envelopes, the other domain
/// kinds write their own envelopes, and plain arrays and mappings are
/// encoded element by element.
///
/// An [`Absent`](TypedValue::Absent) nested in a mapping drops its key; one
/// nested in an array becomes `null`.
///
/// # Errors
///
/// Returns [`CodecError::AbsentValue`] if `value` itself is absent, and
/// [`CodecError::UnrepresentableDate`] if a date has no ISO-8601 form.
pub fn encode(value: &TypedValue) -> CodecResult<Value> {
    if value.is_absent() {
        return Err(CodecError::AbsentValue);
    }
    encode_value(value)
}

/// Encode a typed value straight to JSON text.
///
/// # Errors
///
/// Same as [`encode`].
pub fn to_json_string(value: &TypedValue) -> CodecResult<String> {
    Ok(serde_json::to_string(&encode(value)?)?)
}

fn encode_value(value: &TypedValue) -> CodecResult<Value> {
    let json = match value {
        TypedValue::Absent | TypedValue::Null => Value::Null,
        TypedValue::Bool(b) => Value::Bool(*b),
        TypedValue::Number(n) => Value::Number(n.clone()),
        TypedValue::String(s) => Value::String(s.clone()),
        TypedValue::Array(items) => Value::Array(
            items
                .iter()
                .map(encode_value)
                .collect::<CodecResult<Vec<_>>>()?,
        ),
        TypedValue::Map(map) => encode_map(map)?,
        TypedValue::Date(date) => encode_date(date)?,
        TypedValue::Record(record) => encode_record(record),
        TypedValue::Asset(asset) => asset.to_json(),
        TypedValue::Reference(reference) => reference.to_json(),
        TypedValue::Geolocation(geo) => geo.to_json(),
        TypedValue::Unknown(unknown) => unknown.to_json(),
        TypedValue::Sequence(seq) => seq.to_json(),
        TypedValue::Role(role) => role.to_json(),
    };
    Ok(json)
}

fn encode_map(map: &BTreeMap<String, TypedValue>) -> CodecResult<Value> {
    let mut object = Map::with_capacity(map.len());
    for (key, value) in map {
        if value.is_absent() {
            continue;
        }
        object.insert(key.clone(), encode_value(value)?);
    }
    Ok(Value::Object(object))
}

fn encode_date(date: &OffsetDateTime) -> CodecResult<Value> {
    let iso = date
        .to_offset(UtcOffset::UTC)
        .format(&Rfc3339)
        .map_err(|e| CodecError::UnrepresentableDate {
            message: e.to_string(),
        })?;
    let mut object = envelope(wire::DATE);
    object.insert(wire::DATE_KEY.to_string(), Value::String(iso));
    Ok(Value::Object(object))
}

// The record's own encoding goes under `$record` as-is.
fn encode_record(record: &Record) -> Value {
    let mut object = envelope(wire::RECORD);
    object.insert(wire::RECORD_KEY.to_string(), record.to_json());
    Value::Object(object)
}

fn envelope(kind: &str) -> Map<String, Value> {
    let mut object = Map::new();
    object.insert(wire::TYPE_KEY.to_string(), Value::String(kind.to_string()));
    object
}
