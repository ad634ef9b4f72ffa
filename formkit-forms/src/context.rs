//! FormsContext — the surface a front end talks to.
//!
//! Owns one registry handle, one session, and one record store, and exposes
//! the inbound event surface (select, edit, commit, begin-edit, delete) plus
//! the read-only outbound surface (schema, values, progress, errors,
//! records). A renderer draws whatever the outbound surface reports and
//! forwards user events back in, one at a time.

use std::sync::Arc;

use indexmap::IndexMap;

use formkit_fields::{builtin_registry, FormSchema, SchemaRegistry};

use crate::error::Result;
use crate::session::FormSession;
use crate::store::RecordStore;
use crate::types::Record;

/// A complete single-user form engine: registry + session + store.
pub struct FormsContext {
    registry: Arc<SchemaRegistry>,
    session: FormSession,
    store: RecordStore,
}

impl FormsContext {
    /// Create a context over a custom registry.
    pub fn new(registry: SchemaRegistry) -> Self {
        let registry = Arc::new(registry);
        Self {
            session: FormSession::new(Arc::clone(&registry)),
            registry,
            store: RecordStore::new(),
        }
    }

    /// Create a context over the built-in form types.
    pub fn with_builtin_schemas() -> Self {
        Self::new(builtin_registry())
    }

    // --- Inbound events ---

    /// Select a form type; unknown ids fold the session to idle.
    pub fn select_form_type(&mut self, form_type: &str) -> Option<&FormSchema> {
        self.session.select_form_type(form_type)
    }

    /// Forward one field edit into the session.
    pub fn set_field_value(&mut self, name: &str, value: impl Into<String>) -> Result<()> {
        self.session.set_field_value(name, value)
    }

    /// Validate and finalize the current values. Returns the committed
    /// record's store index.
    pub fn commit(&mut self) -> Result<usize> {
        self.session.commit(&mut self.store)
    }

    /// Start editing the record at `index`.
    pub fn begin_edit(&mut self, index: usize) -> Result<()> {
        self.session.begin_edit(&self.store, index)
    }

    /// Delete the record at `index`. A session edit target at or beyond the
    /// deleted index no longer addresses the same record and is cleared.
    pub fn delete_record(&mut self, index: usize) -> Result<Record> {
        let record = self.store.delete_at(index)?;
        self.session.invalidate_edit_target_from(index);
        Ok(record)
    }

    /// Discard the in-progress edit.
    pub fn cancel_edit(&mut self) {
        self.session.cancel_edit()
    }

    // --- Outbound (read-only) surface ---

    /// The registry, for rendering the form-type selector.
    pub fn registry(&self) -> &SchemaRegistry {
        &self.registry
    }

    /// The active schema, or `None` when no form type is selected.
    pub fn schema(&self) -> Option<&FormSchema> {
        self.session.schema()
    }

    /// Current in-progress values, in schema order.
    pub fn values(&self) -> &IndexMap<String, String> {
        self.session.values()
    }

    /// Completion percentage, 0–100.
    pub fn progress(&self) -> f64 {
        self.session.progress()
    }

    /// Per-field messages from the last failed commit, for rendering next
    /// to the offending inputs.
    pub fn errors(&self) -> &IndexMap<String, String> {
        self.session.errors()
    }

    /// The store index being edited, if any.
    pub fn edit_target(&self) -> Option<usize> {
        self.session.edit_target()
    }

    /// All committed records in insertion order, for table rendering.
    pub fn records(&self) -> &[Record] {
        self.store.all()
    }
}
