//! Per-field validation.
//!
//! Pure and stateless: one field definition, one candidate value, one
//! verdict. Cross-field validation is deliberately unsupported — the commit
//! path in `formkit-forms` runs this over each field independently.

use crate::types::FieldDef;

/// The outcome of validating a single field value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    Valid,
    Invalid { message: String },
}

impl Verdict {
    pub fn is_valid(&self) -> bool {
        matches!(self, Verdict::Valid)
    }

    /// The failure message, if any.
    pub fn message(&self) -> Option<&str> {
        match self {
            Verdict::Valid => None,
            Verdict::Invalid { message } => Some(message),
        }
    }
}

/// Validate a raw value against a field definition.
///
/// Rules apply in order, first match wins:
/// 1. required + empty → invalid, `"<label> is required."`
/// 2. optional + empty → valid (empty values are exempt from pattern checks)
/// 3. pattern present and not matched → invalid with the rule's message
/// 4. otherwise valid
pub fn validate(field: &FieldDef, raw: &str) -> Verdict {
    if raw.is_empty() {
        if field.required {
            return Verdict::Invalid {
                message: format!("{} is required.", field.label),
            };
        }
        return Verdict::Valid;
    }

    if let Some(rule) = &field.rule {
        if !rule.pattern.is_match(raw) {
            return Verdict::Invalid {
                message: rule.message.clone(),
            };
        }
    }

    Verdict::Valid
}
