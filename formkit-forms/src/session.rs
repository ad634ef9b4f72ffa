//! FormSession — the editing state machine.
//!
//! A session is either idle (no form type selected) or editing (a schema is
//! loaded and values are being entered). Commit validates every field and
//! folds the session back to idle; a failed commit leaves everything in
//! place so the user can correct inline.
//!
//! Sessions are plain values: create as many as you need, each owning its
//! own state, all sharing one registry handle. Progress is recomputed
//! directly inside every value or schema mutation, so a read immediately
//! after a mutation never observes a stale number.

use std::sync::Arc;

use indexmap::IndexMap;
use tracing::debug;

use formkit_fields::{validate, FormSchema, SchemaRegistry};

use crate::error::{FormsError, Result};
use crate::store::RecordStore;
use crate::types::Record;

/// One editing context: active schema, in-progress values, edit target.
pub struct FormSession {
    registry: Arc<SchemaRegistry>,
    schema: Option<FormSchema>,
    /// Field name → raw entered value. Keys always mirror the active
    /// schema's field names while a schema is loaded.
    values: IndexMap<String, String>,
    /// Store index being edited; `None` means commit will create a new record.
    edit_target: Option<usize>,
    /// Per-field messages from the last failed commit.
    errors: IndexMap<String, String>,
    progress: f64,
}

impl FormSession {
    /// Create an idle session over a shared registry.
    pub fn new(registry: Arc<SchemaRegistry>) -> Self {
        Self {
            registry,
            schema: None,
            values: IndexMap::new(),
            edit_target: None,
            errors: IndexMap::new(),
            progress: 0.0,
        }
    }

    // --- Outbound (read-only) surface ---

    /// The active schema, or `None` when idle.
    pub fn schema(&self) -> Option<&FormSchema> {
        self.schema.as_ref()
    }

    /// Whether a schema is loaded and values are being entered.
    pub fn is_editing(&self) -> bool {
        self.schema.is_some()
    }

    /// Current in-progress values, in schema order. Empty when idle.
    pub fn values(&self) -> &IndexMap<String, String> {
        &self.values
    }

    /// The current value of one field.
    pub fn value(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    /// The store index being edited, if this session is editing an
    /// existing record rather than creating a new one.
    pub fn edit_target(&self) -> Option<usize> {
        self.edit_target
    }

    /// Completion percentage, 0–100. A field counts as filled when its
    /// value is a non-empty string; `"0"` is filled. 0 when idle.
    pub fn progress(&self) -> f64 {
        self.progress
    }

    /// Per-field messages from the last failed commit, in schema order.
    /// Cleared on schema selection, successful commit, and cancel; editing
    /// a field drops that field's stale message.
    pub fn errors(&self) -> &IndexMap<String, String> {
        &self.errors
    }

    // --- Transitions ---

    /// Select a form type.
    ///
    /// A registered id loads its schema and resets all values to empty; an
    /// unknown id (including the placeholder `""`) folds the session back to
    /// idle. Never an error. Returns the schema now active, if any.
    pub fn select_form_type(&mut self, form_type: &str) -> Option<&FormSchema> {
        match self.registry.lookup(form_type) {
            Some(schema) => {
                let schema = schema.clone();
                self.values = schema
                    .fields
                    .iter()
                    .map(|f| (f.name.clone(), String::new()))
                    .collect();
                self.edit_target = None;
                self.errors.clear();
                debug!(form_type, fields = schema.len(), "form type selected");
                self.schema = Some(schema);
                self.recompute_progress();
            }
            None => {
                debug!(form_type, "form type not registered, session idle");
                self.reset_to_idle();
            }
        }
        self.schema.as_ref()
    }

    /// Overwrite one field's value. Requires an active schema and a field
    /// name it defines.
    pub fn set_field_value(&mut self, name: &str, value: impl Into<String>) -> Result<()> {
        if self.schema.is_none() {
            return Err(FormsError::NoActiveForm);
        }
        let Some(slot) = self.values.get_mut(name) else {
            return Err(FormsError::unknown_field(name));
        };
        *slot = value.into();
        self.errors.shift_remove(name);
        self.recompute_progress();
        Ok(())
    }

    /// Load a record from the store for in-place editing.
    ///
    /// Selects the record's form type, pre-fills the values from the record,
    /// and targets its index so commit updates rather than appends.
    pub fn begin_edit(&mut self, store: &RecordStore, index: usize) -> Result<()> {
        let record = store.get(index)?;
        let schema = self
            .registry
            .lookup(&record.form_type)
            .ok_or_else(|| FormsError::UnknownFormType {
                id: record.form_type.clone(),
            })?
            .clone();

        self.values = schema
            .fields
            .iter()
            .map(|f| {
                let value = record.get(&f.name).unwrap_or("").to_string();
                (f.name.clone(), value)
            })
            .collect();
        self.edit_target = Some(index);
        self.errors.clear();
        debug!(index, form_type = %schema.id, "editing existing record");
        self.schema = Some(schema);
        self.recompute_progress();
        Ok(())
    }

    /// Validate every field and finalize the values into a record.
    ///
    /// On success the record is appended (no edit target) or updates its
    /// target in place, the session folds back to idle, and the record's
    /// store index is returned. On failure nothing is stored and the session
    /// keeps its schema, values, and edit target; the per-field messages are
    /// returned and retained on the session.
    pub fn commit(&mut self, store: &mut RecordStore) -> Result<usize> {
        let schema = self.schema.as_ref().ok_or(FormsError::NoActiveForm)?;

        let mut errors = IndexMap::new();
        for field in &schema.fields {
            let raw = self.values.get(&field.name).map(String::as_str).unwrap_or("");
            if let Some(message) = validate(field, raw).message() {
                errors.insert(field.name.clone(), message.to_string());
            }
        }
        if !errors.is_empty() {
            debug!(form_type = %schema.id, failed = errors.len(), "commit rejected");
            self.errors = errors.clone();
            return Err(FormsError::ValidationFailed { errors });
        }

        let record = Record::new(schema.id.clone(), self.values.clone());
        let index = match self.edit_target {
            Some(index) => {
                store.update_at(index, record)?;
                index
            }
            None => store.append(record),
        };

        debug!(form_type = %schema.id, index, "commit succeeded");
        self.reset_to_idle();
        Ok(index)
    }

    /// Discard in-progress values and return to idle without committing.
    pub fn cancel_edit(&mut self) {
        debug!("edit cancelled");
        self.reset_to_idle();
    }

    /// Drop the edit target if it points at or beyond a just-deleted store
    /// index. Targets below the deleted index still address the same record
    /// and are kept.
    pub fn invalidate_edit_target_from(&mut self, deleted: usize) {
        if let Some(target) = self.edit_target {
            if target >= deleted {
                debug!(target, deleted, "edit target invalidated by delete");
                self.edit_target = None;
            }
        }
    }

    fn reset_to_idle(&mut self) {
        self.schema = None;
        self.values.clear();
        self.edit_target = None;
        self.errors.clear();
        self.progress = 0.0;
    }

    /// Filled fields over total fields, as a percentage. Runs inside every
    /// mutation so reads never see a stale value.
    fn recompute_progress(&mut self) {
        let total = self.schema.as_ref().map(FormSchema::len).unwrap_or(0);
        if total == 0 {
            self.progress = 0.0;
            return;
        }
        let filled = self.values.values().filter(|v| !v.is_empty()).count();
        self.progress = filled as f64 / total as f64 * 100.0;
    }
}
