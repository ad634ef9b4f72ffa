//! SchemaRegistry — form-type to schema lookup.
//!
//! The registry is fixed configuration data: built once at startup via
//! `SchemaRegistryBuilder`, then shared immutably. Lookups keep an id index
//! over the registration-order `Vec` so the form-type selector can iterate
//! schemas in a stable order.

use std::collections::{HashMap, HashSet};

use tracing::debug;

use crate::error::{Result, SchemaError};
use crate::types::{FieldKind, FormSchema};

/// Builder for `SchemaRegistry`. Created by `SchemaRegistry::builder()`.
///
/// `build()` enforces the schema invariants: form-type ids are unique, field
/// names are unique within a schema, and dropdowns carry at least one option.
#[derive(Default)]
pub struct SchemaRegistryBuilder {
    schemas: Vec<FormSchema>,
}

impl SchemaRegistryBuilder {
    /// Register a schema. Order of registration is the selector order.
    pub fn schema(mut self, schema: FormSchema) -> Self {
        self.schemas.push(schema);
        self
    }

    /// Validate all registered schemas and build the registry.
    pub fn build(self) -> Result<SchemaRegistry> {
        let mut id_index = HashMap::new();

        for (idx, schema) in self.schemas.iter().enumerate() {
            if id_index.insert(schema.id.clone(), idx).is_some() {
                return Err(SchemaError::DuplicateFormType {
                    id: schema.id.clone(),
                });
            }

            let mut seen = HashSet::new();
            for field in &schema.fields {
                if !seen.insert(field.name.as_str()) {
                    return Err(SchemaError::DuplicateField {
                        schema: schema.id.clone(),
                        field: field.name.clone(),
                    });
                }
                if let FieldKind::Dropdown { options } = &field.kind {
                    if options.is_empty() {
                        return Err(SchemaError::EmptyOptions {
                            schema: schema.id.clone(),
                            field: field.name.clone(),
                        });
                    }
                }
            }
        }

        debug!(schemas = self.schemas.len(), "schema registry built");

        Ok(SchemaRegistry {
            schemas: self.schemas,
            id_index,
        })
    }
}

/// Immutable mapping from form-type id to form schema.
pub struct SchemaRegistry {
    schemas: Vec<FormSchema>,
    id_index: HashMap<String, usize>,
}

impl SchemaRegistry {
    /// Start building a registry.
    pub fn builder() -> SchemaRegistryBuilder {
        SchemaRegistryBuilder::default()
    }

    /// Look up a schema by form-type id.
    ///
    /// Returns `None` for any id outside the registered set — including the
    /// empty "unselected" placeholder. Never an error: the session treats a
    /// miss as "no schema loaded".
    pub fn lookup(&self, form_type: &str) -> Option<&FormSchema> {
        self.id_index.get(form_type).map(|&i| &self.schemas[i])
    }

    /// All schemas in registration order, for the form-type selector.
    pub fn schemas(&self) -> &[FormSchema] {
        &self.schemas
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::FieldDef;

    fn text_field(name: &str) -> FieldDef {
        FieldDef::new(name, FieldKind::Text, name.to_uppercase())
    }

    fn sample_registry() -> SchemaRegistry {
        SchemaRegistry::builder()
            .schema(FormSchema::new(
                "userInfo",
                "User Information",
                vec![text_field("firstName"), text_field("lastName")],
            ))
            .schema(FormSchema::new(
                "addressInfo",
                "Address Information",
                vec![text_field("street")],
            ))
            .build()
            .unwrap()
    }

    #[test]
    fn lookup_known_form_type() {
        let registry = sample_registry();
        let schema = registry.lookup("userInfo").unwrap();
        assert_eq!(schema.title, "User Information");
        assert_eq!(schema.len(), 2);
    }

    #[test]
    fn lookup_unknown_form_type_is_none() {
        let registry = sample_registry();
        assert!(registry.lookup("bogus").is_none());
        // The "unselected" placeholder is just another miss.
        assert!(registry.lookup("").is_none());
    }

    #[test]
    fn schemas_preserve_registration_order() {
        let registry = sample_registry();
        let ids: Vec<_> = registry.schemas().iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, ["userInfo", "addressInfo"]);
    }

    #[test]
    fn duplicate_form_type_rejected() {
        let result = SchemaRegistry::builder()
            .schema(FormSchema::new("userInfo", "User Information", vec![]))
            .schema(FormSchema::new("userInfo", "Again", vec![]))
            .build();
        assert!(matches!(
            result,
            Err(SchemaError::DuplicateFormType { .. })
        ));
    }

    #[test]
    fn duplicate_field_name_rejected() {
        let result = SchemaRegistry::builder()
            .schema(FormSchema::new(
                "userInfo",
                "User Information",
                vec![text_field("firstName"), text_field("firstName")],
            ))
            .build();
        assert!(matches!(result, Err(SchemaError::DuplicateField { .. })));
    }

    #[test]
    fn empty_dropdown_rejected() {
        let result = SchemaRegistry::builder()
            .schema(FormSchema::new(
                "addressInfo",
                "Address Information",
                vec![FieldDef::new(
                    "state",
                    FieldKind::Dropdown { options: vec![] },
                    "State",
                )],
            ))
            .build();
        assert!(matches!(result, Err(SchemaError::EmptyOptions { .. })));
    }
}
