//! Core schema types for the form engine.
//!
//! Field definitions describe named, typed inputs. A form schema is an
//! ordered list of field definitions registered under a form-type id.
//! Definitions are fixed configuration data: built once at startup, never
//! mutated, looked up by the session on selection.

use regex::Regex;

use crate::error::{Result, SchemaError};

/// The kind of a field — determines what input shape the value takes.
///
/// A closed set. The engine dispatches on kind; there is no plugin surface.
#[derive(Debug, Clone)]
pub enum FieldKind {
    Text,
    Number,
    Password,
    Date,
    /// A fixed choice among `options`. A dropdown without options is
    /// rejected by the registry builder.
    Dropdown { options: Vec<String> },
}

impl FieldKind {
    /// Kind name as a lowercase string, for logging and display dispatch.
    pub fn name(&self) -> &'static str {
        match self {
            FieldKind::Text => "text",
            FieldKind::Number => "number",
            FieldKind::Password => "password",
            FieldKind::Date => "date",
            FieldKind::Dropdown { .. } => "dropdown",
        }
    }
}

/// A (pattern, message) pair applied to non-empty values.
///
/// The pattern is compiled when the rule is declared, so a bad pattern is a
/// schema-construction error and can never reach validation.
#[derive(Debug, Clone)]
pub struct ValidationRule {
    pub pattern: Regex,
    pub message: String,
}

impl ValidationRule {
    /// Compile `pattern` and pair it with the failure message.
    pub fn new(pattern: &str, message: impl Into<String>) -> Result<Self> {
        let compiled = Regex::new(pattern).map_err(|source| SchemaError::BadPattern {
            pattern: pattern.to_string(),
            source,
        })?;
        Ok(Self {
            pattern: compiled,
            message: message.into(),
        })
    }
}

/// A field definition — the complete schema for a single named input.
#[derive(Debug, Clone)]
pub struct FieldDef {
    /// Unique within its form schema.
    pub name: String,
    pub kind: FieldKind,
    /// Display text. Passed through to the presentation layer unchanged and
    /// interpolated into the required-field message.
    pub label: String,
    /// If true, an empty value fails validation.
    pub required: bool,
    /// Optional pattern check for non-empty values.
    pub rule: Option<ValidationRule>,
}

impl FieldDef {
    /// Create an optional field with no validation rule.
    pub fn new(name: impl Into<String>, kind: FieldKind, label: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind,
            label: label.into(),
            required: false,
            rule: None,
        }
    }

    /// Mark the field as required.
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Attach a validation rule.
    pub fn with_rule(mut self, rule: ValidationRule) -> Self {
        self.rule = Some(rule);
        self
    }
}

/// A form schema — a form-type id, a display title, and its ordered fields.
#[derive(Debug, Clone)]
pub struct FormSchema {
    /// The form-type identifier the registry keys on (e.g. `userInfo`).
    pub id: String,
    /// Human-readable title for the form-type selector (e.g. "User Information").
    pub title: String,
    /// Field definitions in render order. Names are unique within a schema.
    pub fields: Vec<FieldDef>,
}

impl FormSchema {
    pub fn new(id: impl Into<String>, title: impl Into<String>, fields: Vec<FieldDef>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            fields,
        }
    }

    /// Look up a field definition by name.
    pub fn field(&self, name: &str) -> Option<&FieldDef> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Number of fields in this schema.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether this schema has no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}
