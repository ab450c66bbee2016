//! Error types for the seeker crate.

use thiserror::Error;

/// Errors that abort a filter or sort request.
///
/// Clauses that cannot be tokenized or name an unknown field are not errors:
/// the compiler drops them (see [`Skip`](crate::Skip)).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SeekerError {
    /// A numeric field was compared against text that does not parse as
    /// that field's number type.
    #[error("invalid value '{value}' for {field}: expected {expected}")]
    InvalidValue {
        field: &'static str,
        value: String,
        expected: &'static str,
    },

    /// The requested attribute cannot be used as a sort key.
    #[error("sorting by '{0}' is not supported")]
    UnsupportedSortAttribute(String),
}

impl SeekerError {
    /// Create an invalid value error.
    pub fn invalid_value(
        field: &'static str,
        value: impl Into<String>,
        expected: &'static str,
    ) -> Self {
        Self::InvalidValue {
            field,
            value: value.into(),
            expected,
        }
    }
}

/// Result type for seeker operations.
pub type Result<T> = std::result::Result<T, SeekerError>;
