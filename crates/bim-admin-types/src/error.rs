//! Error type for parsing and validating console types

use thiserror::Error;

/// Result alias for type-level operations
pub type TypesResult<T> = Result<T, TypesError>;

/// Errors raised while parsing or validating records and forms
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TypesError {
    /// A string did not name any variant of the expected enum
    #[error("unknown {kind} '{value}'")]
    UnknownVariant {
        /// The enum being parsed
        kind: &'static str,
        /// The rejected input
        value: String,
    },

    /// A field required for the requested operation was empty
    #[error("{field} is required")]
    MissingField {
        /// Field name as sent to the backend
        field: &'static str,
    },

    /// The two password fields of a form differ
    #[error("Passwords do not match")]
    PasswordMismatch,
}

impl TypesError {
    /// Create an unknown variant error
    pub fn unknown(kind: &'static str, value: impl Into<String>) -> Self {
        Self::UnknownVariant {
            kind,
            value: value.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_unknown_variant_display() {
        let err = TypesError::unknown("news status", "hidden");
        assert_eq!(err.to_string(), "unknown news status 'hidden'");
    }

    #[test]
    fn test_missing_field_display() {
        let err = TypesError::MissingField {
            field: "action_taken",
        };
        assert_eq!(err.to_string(), "action_taken is required");
    }
}
