//! Error types for the codec crate.

use nimbus_types::TypesError;
use thiserror::Error;

/// Result type for codec operations.
pub type CodecResult<T> = Result<T, CodecError>;

/// Errors that can occur during encoding or decoding.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CodecError {
    /// The absent-value sentinel was passed to `encode` at the top level.
    #[error("invalid argument: cannot encode an absent value")]
    AbsentValue,

    /// A `date` envelope carried a `$date` that is not an ISO-8601 timestamp.
    #[error("invalid date {value:?}: {message}")]
    InvalidDate {
        /// The offending `$date` payload.
        value: String,
        /// Description of the parse failure.
        message: String,
    },

    /// A date cannot be written as an ISO-8601 string (e.g. year > 9999).
    #[error("date cannot be encoded: {message}")]
    UnrepresentableDate {
        /// Description of the formatting failure.
        message: String,
    },

    /// A typed-value collaborator rejected its payload.
    #[error(transparent)]
    Types(#[from] TypesError),

    /// Text was not valid JSON, or a value could not be written as JSON text.
    #[error("json error: {message}")]
    Json {
        /// Description of the JSON error.
        message: String,
    },
}

impl CodecError {
    /// Create an invalid date error.
    pub fn invalid_date(value: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidDate {
            value: value.into(),
            message: message.into(),
        }
    }

    /// Create a JSON error.
    pub fn json(message: impl Into<String>) -> Self {
        Self::Json {
            message: message.into(),
        }
    }
}

impl From<serde_json::Error> for CodecError {
    fn from(err: serde_json::Error) -> Self {
        Self::json(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn types_errors_pass_through_unchanged() {
        let inner = TypesError::malformed("geo", "missing $lat");
        let err = CodecError::from(inner.clone());
        assert_eq!(err.to_string(), inner.to_string());
    }

    #[test]
    fn absent_value_reads_as_invalid_argument() {
        assert!(CodecError::AbsentValue
            .to_string()
            .starts_with("invalid argument"));
    }
}
