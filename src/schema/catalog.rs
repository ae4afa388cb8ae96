//! Built-in schema registry.
//!
//! Entities described here drive generation. Every record is expected to
//! carry an `Id` field of semantic type `i64`; the layer templates assume
//! it. Flag meanings:
//!
//! - `parameter` — the field is accepted as a request parameter
//! - `required` — the parameter must be present on create
//! - `time` — the column is a timestamp, surfaced as unix seconds

use std::collections::HashMap;

use super::types::{FieldDeclaration, FieldKind, Schema};

/// Registered schemas, keyed by registry name. The key is bookkeeping
/// only; everything downstream uses the schema's own declared title.
pub fn registry() -> HashMap<&'static str, Schema> {
    HashMap::from([("User", user()), ("Device", device())])
}

fn user() -> Schema {
    Schema::record("User")
        .field(FieldDeclaration::new("Id", FieldKind::Scalar("i64"), "id"))
        .field(
            FieldDeclaration::new("Name", FieldKind::Scalar("String"), "name")
                .parameter()
                .required(),
        )
        .field(FieldDeclaration::new("Face", FieldKind::Scalar("i32"), "face").parameter())
        .field(
            FieldDeclaration::new("Fingerprint", FieldKind::Scalar("i32"), "fingerprint")
                .parameter(),
        )
        .field(FieldDeclaration::new("Vibration", FieldKind::Scalar("i32"), "vibration").parameter())
        .field(FieldDeclaration::new("CreatedAt", FieldKind::Scalar("i64"), "created_at").time())
        .field(
            FieldDeclaration::new("UpdatedAt", FieldKind::Scalar("i64"), "updated_at").parameter(),
        )
}

fn device() -> Schema {
    Schema::record("Device")
        .field(FieldDeclaration::new("Id", FieldKind::Scalar("i64"), "id"))
        .field(
            FieldDeclaration::new("Serial", FieldKind::Scalar("String"), "serial")
                .parameter()
                .required(),
        )
        .field(FieldDeclaration::new("Tags", FieldKind::Sequence("String"), "tags").parameter())
        .field(
            FieldDeclaration::new("SensorIds", FieldKind::Sequence("i64"), "sensor_ids")
                .parameter(),
        )
        .field(FieldDeclaration::new("CreatedAt", FieldKind::Scalar("i64"), "created_at").time())
        .field(
            FieldDeclaration::new("UpdatedAt", FieldKind::Scalar("i64"), "updated_at").parameter(),
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::SchemaKind;

    #[test]
    fn test_registry_entries_are_records() {
        let registry = registry();
        assert!(registry.len() >= 2);
        for schema in registry.values() {
            assert!(matches!(schema.kind, SchemaKind::Record(_)));
        }
    }

    #[test]
    fn test_every_record_declares_an_id_field() {
        for schema in registry().values() {
            let SchemaKind::Record(fields) = &schema.kind else {
                continue;
            };
            assert!(
                fields.iter().any(|f| f.name == "Id"),
                "{} is missing its Id field",
                schema.title
            );
        }
    }
}
