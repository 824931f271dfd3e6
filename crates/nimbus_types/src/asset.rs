//! Uploaded file assets.

use crate::error::{TypesError, TypesResult};
use crate::wire::{self, expect_object, optional_str, required_str};
use crate::{Decodable, Encodable};
use serde_json::Value;

/// A file stored by the backend, referenced by name.
///
/// The `url` is filled in by the server when the asset is served; the
/// `content_type` is only known for assets created locally before upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Asset {
    name: String,
    url: Option<String>,
    content_type: Option<String>,
}

impl Asset {
    /// Creates an asset with the given name.
    ///
    /// # Errors
    ///
    /// Returns [`TypesError::InvalidArgument`] if the name is empty.
    pub fn new(name: impl Into<String>) -> TypesResult<Self> {
        let name = name.into();
        if name.is_empty() {
            return Err(TypesError::invalid_argument("asset name must not be empty"));
        }
        Ok(Self {
            name,
            url: None,
            content_type: None,
        })
    }

    /// Sets the download URL.
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    /// Sets the MIME content type.
    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }

    /// The asset name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The download URL, if known.
    pub fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }

    /// The MIME content type, if known.
    pub fn content_type(&self) -> Option<&str> {
        self.content_type.as_deref()
    }
}

impl Encodable for Asset {
    fn to_json(&self) -> Value {
        let mut map = wire::envelope(wire::ASSET);
        map.insert("$name".to_string(), Value::String(self.name.clone()));
        if let Some(url) = &self.url {
            map.insert("$url".to_string(), Value::String(url.clone()));
        }
        if let Some(content_type) = &self.content_type {
            map.insert(
                "$content_type".to_string(),
                Value::String(content_type.clone()),
            );
        }
        Value::Object(map)
    }
}

impl Decodable for Asset {
    fn from_json(json: &Value) -> TypesResult<Self> {
        let object = expect_object(json, wire::ASSET)?;
        let name = required_str(object, "$name", wire::ASSET)?;
        if name.is_empty() {
            return Err(TypesError::malformed(wire::ASSET, "$name must not be empty"));
        }
        Ok(Self {
            name: name.to_string(),
            url: optional_str(object, "$url", wire::ASSET)?,
            content_type: optional_str(object, "$content_type", wire::ASSET)?,
        })
    }
}
