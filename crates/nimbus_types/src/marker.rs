//! Placeholder values that carry no data of their own.

use crate::error::TypesResult;
use crate::wire::{self, expect_object, optional_str};
use crate::{Decodable, Encodable};
use serde_json::Value;

/// A value the backend stores in a column type this SDK cannot represent.
///
/// It round-trips untouched so that saving a record does not clobber data
/// the client never understood.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UnknownValue {
    underlying_type: Option<String>,
}

impl UnknownValue {
    /// Creates an unknown value, optionally naming the backend column type.
    pub fn new(underlying_type: Option<String>) -> Self {
        Self { underlying_type }
    }

    /// The backend's name for the column type, if it sent one.
    pub fn underlying_type(&self) -> Option<&str> {
        self.underlying_type.as_deref()
    }
}

impl Encodable for UnknownValue {
    fn to_json(&self) -> Value {
        let mut map = wire::envelope(wire::UNKNOWN);
        if let Some(underlying_type) = &self.underlying_type {
            map.insert(
                "$underlying_type".to_string(),
                Value::String(underlying_type.clone()),
            );
        }
        Value::Object(map)
    }
}

impl Decodable for UnknownValue {
    fn from_json(json: &Value) -> TypesResult<Self> {
        let object = expect_object(json, wire::UNKNOWN)?;
        Ok(Self {
            underlying_type: optional_str(object, "$underlying_type", wire::UNKNOWN)?,
        })
    }
}

/// Asks the server to assign the next value of an auto-incrementing field.
///
/// Write-only: the server answers with the assigned number, so there is no
/// decoder.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Sequence;

impl Encodable for Sequence {
    fn to_json(&self) -> Value {
        Value::Object(wire::envelope(wire::SEQUENCE))
    }
}
