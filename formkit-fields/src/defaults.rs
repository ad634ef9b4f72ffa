//! Built-in form schemas.
//!
//! `builtin_registry()` provides the three compiled-in form types the engine
//! ships with: user information, address information, and payment
//! information. The data is fixed configuration — consumers wanting other
//! forms build their own registry via `SchemaRegistry::builder()`.

use crate::registry::SchemaRegistry;
use crate::types::{FieldDef, FieldKind, FormSchema, ValidationRule};

/// Compile a built-in validation rule.
fn rule(pattern: &str, message: &str) -> ValidationRule {
    ValidationRule::new(pattern, message).expect("invalid built-in pattern")
}

/// The built-in form-type registry.
pub fn builtin_registry() -> SchemaRegistry {
    SchemaRegistry::builder()
        .schema(FormSchema::new(
            "userInfo",
            "User Information",
            vec![
                FieldDef::new("firstName", FieldKind::Text, "First Name").required(),
                FieldDef::new("lastName", FieldKind::Text, "Last Name").required(),
                FieldDef::new("age", FieldKind::Number, "Age"),
            ],
        ))
        .schema(FormSchema::new(
            "addressInfo",
            "Address Information",
            vec![
                FieldDef::new("street", FieldKind::Text, "Street").required(),
                FieldDef::new("city", FieldKind::Text, "City").required(),
                FieldDef::new(
                    "state",
                    FieldKind::Dropdown {
                        options: vec![
                            "California".to_string(),
                            "Texas".to_string(),
                            "New York".to_string(),
                        ],
                    },
                    "State",
                )
                .required(),
                FieldDef::new("zipCode", FieldKind::Text, "Zip Code"),
            ],
        ))
        .schema(FormSchema::new(
            "paymentInfo",
            "Payment Information",
            vec![
                FieldDef::new("cardNumber", FieldKind::Text, "Card Number").required(),
                FieldDef::new("expiryDate", FieldKind::Date, "Expiry Date").required(),
                FieldDef::new("cvv", FieldKind::Password, "CVV")
                    .required()
                    .with_rule(rule(
                        r"^[0-9]{3,4}$",
                        "CVV must be a 3- or 4-digit number.",
                    )),
                FieldDef::new("cardholderName", FieldKind::Text, "Cardholder Name").required(),
            ],
        ))
        .build()
        .expect("built-in schemas are valid")
}
