//! Value-kind classification.

use nimbus_types::TypedValue;

/// The domain kinds that need wire wrapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    /// [`nimbus_types::Asset`].
    Asset,
    /// [`nimbus_types::Reference`].
    Reference,
    /// [`nimbus_types::Geolocation`].
    Geolocation,
    /// [`nimbus_types::Record`].
    Record,
    /// [`nimbus_types::UnknownValue`].
    Unknown,
    /// [`nimbus_types::Sequence`].
    Sequence,
}

/// Returns the domain kind of `value`, or `None` for plain data, dates and
/// roles.
pub fn value_kind(value: &TypedValue) -> Option<ValueKind> {
    match value {
        TypedValue::Asset(_) => Some(ValueKind::Asset),
        TypedValue::Reference(_) => Some(ValueKind::Reference),
        TypedValue::Geolocation(_) => Some(ValueKind::Geolocation),
        TypedValue::Record(_) => Some(ValueKind::Record),
        TypedValue::Unknown(_) => Some(ValueKind::Unknown),
        TypedValue::Sequence(_) => Some(ValueKind::Sequence),
        TypedValue::Absent
        | TypedValue::Null
        | TypedValue::Bool(_)
        | TypedValue::Number(_)
        | TypedValue::String(_)
        | TypedValue::Array(_)
        | TypedValue::Map(_)
        | TypedValue::Date(_)
        | TypedValue::Role(_) => None,
    }
}

/// Check whether `value` is one of the typed-value model's composite kinds.
pub fn is_value_type(value: &TypedValue) -> bool {
    value_kind(value).is_some()
}
