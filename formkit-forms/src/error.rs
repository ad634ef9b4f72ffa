//! Error types for the form engine

use indexmap::IndexMap;
use thiserror::Error;

/// Result type for form operations
pub type Result<T> = std::result::Result<T, FormsError>;

/// Errors that can occur in session and record-store operations
#[derive(Debug, Error)]
pub enum FormsError {
    /// Operation requires an active form but the session is idle
    #[error("no active form")]
    NoActiveForm,

    /// Field name outside the active schema
    #[error("unknown field: {name}")]
    UnknownField { name: String },

    /// Record carries a form type the registry does not know
    #[error("unknown form type: {id}")]
    UnknownFormType { id: String },

    /// One or more fields failed validation at commit time.
    /// Maps field name to message, in schema order. Commit was a no-op.
    #[error("validation failed for {} field(s)", .errors.len())]
    ValidationFailed { errors: IndexMap<String, String> },

    /// Record index that does not exist; no partial mutation occurred
    #[error("record index {index} out of range (store has {len})")]
    IndexOutOfRange { index: usize, len: usize },
}

impl FormsError {
    /// Create an unknown-field error
    pub fn unknown_field(name: impl Into<String>) -> Self {
        Self::UnknownField { name: name.into() }
    }

    /// Create an index-out-of-range error
    pub fn out_of_range(index: usize, len: usize) -> Self {
        Self::IndexOutOfRange { index, len }
    }

    /// The per-field messages, when this is a validation failure
    pub fn field_errors(&self) -> Option<&IndexMap<String, String>> {
        match self {
            Self::ValidationFailed { errors } => Some(errors),
            _ => None,
        }
    }
}
