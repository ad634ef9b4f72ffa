//! Field schema registry and per-field validation
//!
//! `formkit-fields` is a standalone, schema-only crate: it owns field
//! definitions, form schemas, and the pure per-field validator. It knows
//! nothing about sessions or submitted records — `formkit-forms` layers the
//! editing state machine on top.
//!
//! # Architecture
//!
//! - **Schema-only**: field definitions and form schemas, not field values
//! - **Fixed configuration**: registries are built once and shared immutably
//! - **Pure validation**: `validate()` sees one field and one value, nothing else
//! - **Built-ins**: `builtin_registry()` ships the three reference form types

pub mod defaults;
pub mod error;
pub mod registry;
pub mod types;
pub mod validate;

pub use defaults::builtin_registry;
pub use error::{Result, SchemaError};
pub use registry::{SchemaRegistry, SchemaRegistryBuilder};
pub use types::{FieldDef, FieldKind, FormSchema, ValidationRule};
pub use validate::{validate, Verdict};
