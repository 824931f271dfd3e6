//! Error types for the typed-value model.

use thiserror::Error;

/// Result type for typed-value operations.
pub type TypesResult<T> = Result<T, TypesError>;

/// Errors raised while building or decoding typed values.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TypesError {
    /// An argument had the wrong runtime type or an unacceptable value.
    #[error("invalid argument: {message}")]
    InvalidArgument {
        /// Description of the offending argument.
        message: String,
    },

    /// A wire payload did not match the format of the kind it claimed to be.
    #[error("malformed {kind} payload: {message}")]
    MalformedPayload {
        /// Kind of value being decoded (e.g. `"geo"`).
        kind: &'static str,
        /// Description of what was wrong.
        message: String,
    },
}

impl TypesError {
    /// Create an invalid argument error.
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    /// Create a malformed payload error.
    pub fn malformed(kind: &'static str, message: impl Into<String>) -> Self {
        Self::MalformedPayload {
            kind,
            message: message.into(),
        }
    }
}
