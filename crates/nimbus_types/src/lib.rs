//! # Nimbus Types
//!
//! The typed-value model of the Nimbus client SDK: the domain values
//! exchanged with the backend and their individual wire formats.
//!
//! Each domain kind owns its JSON form through [`Encodable`] and
//! [`Decodable`]. The recursive envelope codec in `nimbus_codec` dispatches
//! to these implementations; it never looks inside their payloads.
//!
//! ## Usage
//!
//! ```
//! use nimbus_types::{Encodable, Decodable, Reference};
//!
//! let reference = Reference::new("user", "u1").unwrap();
//! let json = reference.to_json();
//! assert_eq!(json["$type"], "ref");
//! assert_eq!(Reference::from_json(&json).unwrap(), reference);
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

mod asset;
mod error;
mod geolocation;
mod marker;
pub mod params;
mod record;
mod role;
mod value;
pub mod wire;

pub use asset::Asset;
pub use error::{TypesError, TypesResult};
pub use geolocation::Geolocation;
pub use marker::{Sequence, UnknownValue};
pub use params::{resolve_role_name, resolve_user_id};
pub use record::{Record, Reference};
pub use role::Role;
pub use value::TypedValue;

/// Trait for types that have their own wire-format JSON.
pub trait Encodable {
    /// Encode this value to its wire-format JSON.
    fn to_json(&self) -> serde_json::Value;
}

/// Trait for types that can be rebuilt from their wire-format JSON.
pub trait Decodable: Sized {
    /// Decode this value from its wire-format JSON.
    ///
    /// # Errors
    ///
    /// Returns [`TypesError::MalformedPayload`] if `json` does not have the
    /// shape this type encodes to.
    fn from_json(json: &serde_json::Value) -> TypesResult<Self>;
}
