//! Records and references to them.
//!
//! A record is identified by its type and an identifier, written on the
//! wire as `"<record_type>/<record_id>"`. A record's own JSON form is not an
//! envelope: it is an object with an `_id` key followed by its attributes.

use crate::error::{TypesError, TypesResult};
use crate::wire::{self, expect_object, required_str};
use crate::{Decodable, Encodable};
use serde_json::{Map, Value};
use uuid::Uuid;

/// Key holding the `"<type>/<id>"` identifier in a record's own encoding.
const ID_KEY: &str = "_id";

fn validate_record_type(record_type: &str) -> TypesResult<()> {
    if record_type.is_empty() {
        return Err(TypesError::invalid_argument("record type must not be empty"));
    }
    if record_type.contains('/') {
        return Err(TypesError::invalid_argument(format!(
            "record type must not contain '/', got {record_type:?}"
        )));
    }
    Ok(())
}

/// Splits `"<type>/<id>"` at the first `/`.
fn split_record_key(key: &str, kind: &'static str) -> TypesResult<(String, String)> {
    match key.split_once('/') {
        Some((record_type, record_id)) if !record_type.is_empty() && !record_id.is_empty() => {
            Ok((record_type.to_string(), record_id.to_string()))
        }
        _ => Err(TypesError::malformed(
            kind,
            format!("expected \"<type>/<id>\", got {key:?}"),
        )),
    }
}

/// A record stored by the backend.
///
/// Attributes are kept as opaque JSON: the record's wire format is owned by
/// the record itself, not by the envelope codec.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    record_type: String,
    record_id: String,
    attributes: Map<String, Value>,
}

impl Record {
    /// Creates an empty record with a freshly generated identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TypesError::InvalidArgument`] if the record type is empty or
    /// contains `/`.
    pub fn new(record_type: impl Into<String>) -> TypesResult<Self> {
        Self::with_id(record_type, Uuid::new_v4().to_string())
    }

    /// Creates an empty record with a known identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TypesError::InvalidArgument`] if the record type is empty or
    /// contains `/`, or if the identifier is empty.
    pub fn with_id(record_type: impl Into<String>, record_id: impl Into<String>) -> TypesResult<Self> {
        let record_type = record_type.into();
        let record_id = record_id.into();
        validate_record_type(&record_type)?;
        if record_id.is_empty() {
            return Err(TypesError::invalid_argument("record id must not be empty"));
        }
        Ok(Self {
            record_type,
            record_id,
            attributes: Map::new(),
        })
    }

    /// Sets an attribute, returning the record.
    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.set(key, value);
        self
    }

    /// The record type, e.g. `"user"`.
    pub fn record_type(&self) -> &str {
        &self.record_type
    }

    /// The identifier, unique within the record type.
    pub fn record_id(&self) -> &str {
        &self.record_id
    }

    /// The `"<type>/<id>"` key used on the wire.
    pub fn key(&self) -> String {
        format!("{}/{}", self.record_type, self.record_id)
    }

    /// Looks up an attribute.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.attributes.get(key)
    }

    /// Sets an attribute, returning the previous value.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.attributes.insert(key.into(), value.into())
    }

    /// All attributes.
    pub fn attributes(&self) -> &Map<String, Value> {
        &self.attributes
    }
}

impl Encodable for Record {
    fn to_json(&self) -> Value {
        let mut map = self.attributes.clone();
        // An attribute named `_id` never shadows the identifier.
        map.insert(ID_KEY.to_string(), Value::String(self.key()));
        Value::Object(map)
    }
}

impl Decodable for Record {
    fn from_json(json: &Value) -> TypesResult<Self> {
        let object = expect_object(json, wire::RECORD)?;
        let key = required_str(object, ID_KEY, wire::RECORD)?;
        let (record_type, record_id) = split_record_key(key, wire::RECORD)?;
        let attributes = object
            .iter()
            .filter(|(k, _)| k.as_str() != ID_KEY)
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect();
        Ok(Self {
            record_type,
            record_id,
            attributes,
        })
    }
}

/// A pointer to a record by type and identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Reference {
    record_type: String,
    record_id: String,
}

impl Reference {
    /// Creates a reference.
    ///
    /// # Errors
    ///
    /// Returns [`TypesError::InvalidArgument`] if the record type is empty or
    /// contains `/`, or if the identifier is empty.
    pub fn new(record_type: impl Into<String>, record_id: impl Into<String>) -> TypesResult<Self> {
        let record_type = record_type.into();
        let record_id = record_id.into();
        validate_record_type(&record_type)?;
        if record_id.is_empty() {
            return Err(TypesError::invalid_argument("record id must not be empty"));
        }
        Ok(Self {
            record_type,
            record_id,
        })
    }

    /// The referenced record's type.
    pub fn record_type(&self) -> &str {
        &self.record_type
    }

    /// The referenced record's identifier.
    pub fn record_id(&self) -> &str {
        &self.record_id
    }
}

impl From<&Record> for Reference {
    fn from(record: &Record) -> Self {
        Self {
            record_type: record.record_type.clone(),
            record_id: record.record_id.clone(),
        }
    }
}

impl Encodable for Reference {
    fn to_json(&self) -> Value {
        let mut map = wire::envelope(wire::REF);
        map.insert(
            "$id".to_string(),
            Value::String(format!("{}/{}", self.record_type, self.record_id)),
        );
        Value::Object(map)
    }
}

impl Decodable for Reference {
    fn from_json(json: &Value) -> TypesResult<Self> {
        let object = expect_object(json, wire::REF)?;
        let key = required_str(object, "$id", wire::REF)?;
        let (record_type, record_id) = split_record_key(key, wire::REF)?;
        Ok(Self {
            record_type,
            record_id,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn new_record_gets_uuid_id() {
        let record = Record::new("note").unwrap();
        assert_eq!(record.record_type(), "note");
        assert!(Uuid::parse_str(record.record_id()).is_ok());
    }

    #[test]
    fn record_type_validation() {
        assert!(Record::new("").is_err());
        assert!(Record::with_id("a/b", "1").is_err());
        assert!(Record::with_id("note", "").is_err());
        assert!(Reference::new("", "1").is_err());
    }

    #[test]
    fn record_encodes_id_and_attributes() {
        let record = Record::with_id("note", "n1")
            .unwrap()
            .with_attribute("title", "groceries")
            .with_attribute("done", false);
        assert_eq!(
            record.to_json(),
            json!({"_id": "note/n1", "title": "groceries", "done": false})
        );
    }

    #[test]
    fn identifier_wins_over_id_attribute() {
        let record = Record::with_id("note", "n1")
            .unwrap()
            .with_attribute("_id", "other/x");
        assert_eq!(record.to_json()["_id"], json!("note/n1"));
    }

    #[test]
    fn record_decodes_id_with_slash_in_identifier() {
        let record = Record::from_json(&json!({"_id": "note/2024/05", "n": 1})).unwrap();
        assert_eq!(record.record_type(), "note");
        assert_eq!(record.record_id(), "2024/05");
        assert_eq!(record.get("n"), Some(&json!(1)));
        assert_eq!(record.get("_id"), None);
    }

    #[test]
    fn record_rejects_bad_id() {
        assert!(Record::from_json(&json!({"title": "x"})).is_err());
        assert!(Record::from_json(&json!({"_id": "no-slash"})).is_err());
        assert!(Record::from_json(&json!({"_id": "/x"})).is_err());
        assert!(Record::from_json(&json!(null)).is_err());
    }

    #[test]
    fn reference_wire_format() {
        let reference = Reference::new("user", "u1").unwrap();
        assert_eq!(reference.to_json(), json!({"$type": "ref", "$id": "user/u1"}));
        assert_eq!(Reference::from_json(&reference.to_json()).unwrap(), reference);
    }

    #[test]
    fn reference_from_record() {
        let record = Record::with_id("user", "u1").unwrap();
        let reference = Reference::from(&record);
        assert_eq!(reference.record_type(), "user");
        assert_eq!(reference.record_id(), "u1");
    }
}
