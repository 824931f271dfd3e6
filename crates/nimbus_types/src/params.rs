//! Normalization of "object or identifier" arguments.
//!
//! Higher-level SDK calls accept either a rich value or the bare string that
//! identifies it. These helpers reduce both forms to the string.

use crate::error::{TypesError, TypesResult};
use crate::value::TypedValue;

/// Record type that user records carry.
pub const USER_RECORD_TYPE: &str = "user";

/// Resolves a user record or user ID string to the user ID.
///
/// # Errors
///
/// Returns [`TypesError::InvalidArgument`] if given a record whose type is
/// not `"user"`, or a value that is neither a record nor a string.
pub fn resolve_user_id(user_or_id: &TypedValue) -> TypesResult<String> {
    match user_or_id {
        TypedValue::Record(record) => {
            if record.record_type() != USER_RECORD_TYPE {
                return Err(TypesError::invalid_argument(format!(
                    "expected a record of type \"{USER_RECORD_TYPE}\", got \"{}\"",
                    record.record_type()
                )));
            }
            Ok(record.record_id().to_string())
        }
        TypedValue::String(id) => Ok(id.clone()),
        other => Err(TypesError::invalid_argument(format!(
            "expected a user record or user ID string, got {}",
            other.type_name()
        ))),
    }
}

/// Resolves a role or role name string to the role name.
///
/// # Errors
///
/// Returns [`TypesError::InvalidArgument`] if given neither a role nor a
/// string.
pub fn resolve_role_name(role_or_name: &TypedValue) -> TypesResult<String> {
    match role_or_name {
        TypedValue::Role(role) => Ok(role.name().to_string()),
        TypedValue::String(name) => Ok(name.clone()),
        other => Err(TypesError::invalid_argument(format!(
            "expected a role or role name string, got {}",
            other.type_name()
        ))),
    }
}

/// Resolves every element with [`resolve_user_id`], stopping at the first
/// failure.
pub fn resolve_user_ids(users_or_ids: &[TypedValue]) -> TypesResult<Vec<String>> {
    users_or_ids.iter().map(resolve_user_id).collect()
}

/// Resolves every element with [`resolve_role_name`], stopping at the first
/// failure.
pub fn resolve_role_names(roles_or_names: &[TypedValue]) -> TypesResult<Vec<String>> {
    roles_or_names.iter().map(resolve_role_name).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::Record;
    use crate::role::Role;

    #[test]
    fn user_record_resolves_to_id() {
        let user = TypedValue::from(Record::with_id("user", "u1").unwrap());
        assert_eq!(resolve_user_id(&user).unwrap(), "u1");
    }

    #[test]
    fn non_user_record_is_rejected() {
        let note = TypedValue::from(Record::with_id("note", "n1").unwrap());
        let err = resolve_user_id(&note).unwrap_err();
        assert!(matches!(err, TypesError::InvalidArgument { .. }));
        assert!(err.to_string().contains("note"));
    }

    #[test]
    fn user_id_string_passes_through() {
        assert_eq!(resolve_user_id(&TypedValue::from("u1")).unwrap(), "u1");
    }

    #[test]
    fn other_user_arguments_are_rejected() {
        let err = resolve_user_id(&TypedValue::from(42)).unwrap_err();
        assert!(matches!(err, TypesError::InvalidArgument { .. }));
        assert!(err.to_string().contains("number"));

        assert!(resolve_user_id(&TypedValue::Null).is_err());
        assert!(resolve_user_id(&TypedValue::from(Role::new("admin").unwrap())).is_err());
    }

    #[test]
    fn role_resolution() {
        let role = TypedValue::from(Role::new("admin").unwrap());
        assert_eq!(resolve_role_name(&role).unwrap(), "admin");
        assert_eq!(resolve_role_name(&TypedValue::from("editor")).unwrap(), "editor");

        let err = resolve_role_name(&TypedValue::Bool(true)).unwrap_err();
        assert!(err.to_string().contains("boolean"));
    }

    #[test]
    fn batch_resolution_stops_at_first_failure() {
        let ids = resolve_user_ids(&[
            TypedValue::from("u1"),
            TypedValue::from(Record::with_id("user", "u2").unwrap()),
        ])
        .unwrap();
        assert_eq!(ids, vec!["u1", "u2"]);

        let err = resolve_role_names(&[TypedValue::from("admin"), TypedValue::from(7)]).unwrap_err();
        assert!(err.to_string().contains("number"));
    }
}
