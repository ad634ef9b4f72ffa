//! Error types for schema construction

use thiserror::Error;

/// Result type for schema operations
pub type Result<T> = std::result::Result<T, SchemaError>;

/// Errors that can occur while building a schema registry.
///
/// Lookup misses are not errors — an unknown form type is an `Option::None`
/// from the registry, handled by the session as "no schema loaded".
#[derive(Debug, Error)]
pub enum SchemaError {
    /// Two fields in one schema share a name
    #[error("duplicate field name '{field}' in schema '{schema}'")]
    DuplicateField { schema: String, field: String },

    /// A dropdown field with no options
    #[error("dropdown field '{field}' in schema '{schema}' has no options")]
    EmptyOptions { schema: String, field: String },

    /// Two schemas registered under the same form-type id
    #[error("duplicate form type: {id}")]
    DuplicateFormType { id: String },

    /// Validation pattern failed to compile
    #[error("invalid validation pattern '{pattern}': {source}")]
    BadPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = SchemaError::DuplicateField {
            schema: "userInfo".into(),
            field: "firstName".into(),
        };
        assert_eq!(
            err.to_string(),
            "duplicate field name 'firstName' in schema 'userInfo'"
        );
    }

    #[test]
    fn test_empty_options_display() {
        let err = SchemaError::EmptyOptions {
            schema: "addressInfo".into(),
            field: "state".into(),
        };
        assert!(err.to_string().contains("state"));
        assert!(err.to_string().contains("no options"));
    }
}
