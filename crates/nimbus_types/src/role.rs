//! Access-control roles.

use crate::error::{TypesError, TypesResult};
use crate::{Decodable, Encodable};
use serde_json::Value;

/// A named role that users can be assigned to.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Role {
    name: String,
}

impl Role {
    /// Creates a role.
    ///
    /// # Errors
    ///
    /// Returns [`TypesError::InvalidArgument`] if the name is empty.
    pub fn new(name: impl Into<String>) -> TypesResult<Self> {
        let name = name.into();
        if name.is_empty() {
            return Err(TypesError::invalid_argument("role name must not be empty"));
        }
        Ok(Self { name })
    }

    /// The role name.
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Encodable for Role {
    fn to_json(&self) -> Value {
        Value::String(self.name.clone())
    }
}

impl Decodable for Role {
    fn from_json(json: &Value) -> TypesResult<Self> {
        match json {
            Value::String(name) if !name.is_empty() => Ok(Self { name: name.clone() }),
            other => Err(TypesError::malformed(
                "role",
                format!("expected a non-empty string, got {other}"),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn role_is_its_name_on_the_wire() {
        let role = Role::new("admin").unwrap();
        assert_eq!(role.to_json(), json!("admin"));
        assert_eq!(Role::from_json(&json!("admin")).unwrap(), role);
        assert!(Role::from_json(&json!({"name": "admin"})).is_err());
        assert!(Role::new("").is_err());
    }
}
