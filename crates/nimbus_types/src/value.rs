//! Dynamic typed value.

use crate::asset::Asset;
use crate::geolocation::Geolocation;
use crate::marker::{Sequence, UnknownValue};
use crate::record::{Record, Reference};
use crate::role::Role;
use serde_json::Number;
use std::collections::BTreeMap;
use time::OffsetDateTime;

/// An in-memory value exchanged with the backend.
///
/// Plain JSON shapes (`Null`, scalars, `Array`, `Map`) sit next to the
/// domain kinds the wire format wraps in `$type` envelopes.
#[derive(Debug, Clone, PartialEq)]
pub enum TypedValue {
    /// No value at all, distinct from `Null`. Never a valid encode target.
    Absent,
    /// Null value.
    Null,
    /// Boolean value.
    Bool(bool),
    /// JSON number.
    Number(Number),
    /// Text string.
    String(String),
    /// Ordered list of values.
    Array(Vec<TypedValue>),
    /// Plain mapping with string keys.
    Map(BTreeMap<String, TypedValue>),
    /// Point in time.
    Date(OffsetDateTime),
    /// Uploaded file.
    Asset(Asset),
    /// Pointer to a record.
    Reference(Reference),
    /// Geographic point.
    Geolocation(Geolocation),
    /// Embedded record.
    Record(Record),
    /// Value of a type this SDK does not understand.
    Unknown(UnknownValue),
    /// Server-assigned sequence placeholder.
    Sequence(Sequence),
    /// Access-control role.
    Role(Role),
}

impl TypedValue {
    /// Create a map value from key/value pairs.
    pub fn map<K, I>(pairs: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, TypedValue)>,
    {
        TypedValue::Map(pairs.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }

    /// Name of the runtime kind, used in error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            TypedValue::Absent => "undefined",
            TypedValue::Null => "null",
            TypedValue::Bool(_) => "boolean",
            TypedValue::Number(_) => "number",
            TypedValue::String(_) => "string",
            TypedValue::Array(_) => "array",
            TypedValue::Map(_) => "object",
            TypedValue::Date(_) => "date",
            TypedValue::Asset(_) => "asset",
            TypedValue::Reference(_) => "reference",
            TypedValue::Geolocation(_) => "geolocation",
            TypedValue::Record(_) => "record",
            TypedValue::Unknown(_) => "unknown",
            TypedValue::Sequence(_) => "sequence",
            TypedValue::Role(_) => "role",
        }
    }

    /// Check if this value is the absent sentinel.
    pub fn is_absent(&self) -> bool {
        matches!(self, TypedValue::Absent)
    }

    /// Check if this value is null.
    pub fn is_null(&self) -> bool {
        matches!(self, TypedValue::Null)
    }

    /// Get this value as a boolean, if it is one.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            TypedValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Get this value as a string, if it is one.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            TypedValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// Get this value as an array, if it is one.
    pub fn as_array(&self) -> Option<&[TypedValue]> {
        match self {
            TypedValue::Array(a) => Some(a),
            _ => None,
        }
    }

    /// Get this value as a map, if it is one.
    pub fn as_map(&self) -> Option<&BTreeMap<String, TypedValue>> {
        match self {
            TypedValue::Map(m) => Some(m),
            _ => None,
        }
    }

    /// Get this value as a record, if it is one.
    pub fn as_record(&self) -> Option<&Record> {
        match self {
            TypedValue::Record(r) => Some(r),
            _ => None,
        }
    }

    /// Look up a key in this map value.
    pub fn get(&self, key: &str) -> Option<&TypedValue> {
        self.as_map()?.get(key)
    }
}

impl From<bool> for TypedValue {
    fn from(b: bool) -> Self {
        TypedValue::Bool(b)
    }
}

impl From<i64> for TypedValue {
    fn from(n: i64) -> Self {
        TypedValue::Number(n.into())
    }
}

impl From<i32> for TypedValue {
    fn from(n: i32) -> Self {
        TypedValue::Number(n.into())
    }
}

impl From<u32> for TypedValue {
    fn from(n: u32) -> Self {
        TypedValue::Number(n.into())
    }
}

impl From<f64> for TypedValue {
    /// Non-finite floats have no JSON form and become `Null`.
    fn from(n: f64) -> Self {
        Number::from_f64(n).map_or(TypedValue::Null, TypedValue::Number)
    }
}

impl From<String> for TypedValue {
    fn from(s: String) -> Self {
        TypedValue::String(s)
    }
}

impl From<&str> for TypedValue {
    fn from(s: &str) -> Self {
        TypedValue::String(s.to_string())
    }
}

impl From<OffsetDateTime> for TypedValue {
    fn from(date: OffsetDateTime) -> Self {
        TypedValue::Date(date)
    }
}

impl From<Asset> for TypedValue {
    fn from(asset: Asset) -> Self {
        TypedValue::Asset(asset)
    }
}

impl From<Reference> for TypedValue {
    fn from(reference: Reference) -> Self {
        TypedValue::Reference(reference)
    }
}

impl From<Geolocation> for TypedValue {
    fn from(geo: Geolocation) -> Self {
        TypedValue::Geolocation(geo)
    }
}

impl From<Record> for TypedValue {
    fn from(record: Record) -> Self {
        TypedValue::Record(record)
    }
}

impl From<UnknownValue> for TypedValue {
    fn from(value: UnknownValue) -> Self {
        TypedValue::Unknown(value)
    }
}

impl From<Sequence> for TypedValue {
    fn from(seq: Sequence) -> Self {
        TypedValue::Sequence(seq)
    }
}

impl From<Role> for TypedValue {
    fn from(role: Role) -> Self {
        TypedValue::Role(role)
    }
}

impl<T: Into<TypedValue>> From<Vec<T>> for TypedValue {
    fn from(v: Vec<T>) -> Self {
        TypedValue::Array(v.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<TypedValue>> From<Option<T>> for TypedValue {
    /// `None` becomes `Null`, not `Absent`.
    fn from(v: Option<T>) -> Self {
        v.map_or(TypedValue::Null, Into::into)
    }
}

impl From<()> for TypedValue {
    fn from((): ()) -> Self {
        TypedValue::Null
    }
}
