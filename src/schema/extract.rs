use serde::Serialize;
use tracing::warn;

use super::types::{FieldKind, Schema, SchemaKind};
use crate::generator::to_snake_case;

/// Per-field metadata derived from a declaration. Immutable once built.
#[derive(Debug, Clone, Serialize)]
pub struct FieldDescriptor {
    /// Declared name, e.g. `"CreatedAt"`.
    pub name: String,
    /// Lowered field identifier, e.g. `"created_at"`.
    pub ident: String,
    /// Resolved semantic type name: the bare scalar name, or the fully
    /// parametrized sequence form (`"Vec<String>"`, never `"String"`).
    /// Layer templates branch on exact equality of this string.
    pub ty: String,
    /// Serialization key carried through from the declaration.
    pub key: String,
    pub parameter: bool,
    pub required: bool,
    pub time: bool,
}

/// Introspect a schema into its ordered descriptor sequence.
///
/// Performs no validation beyond the record-shape check: duplicate keys, a
/// missing identifier field and unknown type names all pass through
/// silently. A non-record schema is reported and yields an empty list so
/// the caller can move on to the next schema.
pub fn extract_fields(schema: &Schema) -> Vec<FieldDescriptor> {
    let SchemaKind::Record(decls) = &schema.kind else {
        warn!(
            schema = schema.title,
            "not a record schema, nothing to generate"
        );
        return Vec::new();
    };
    decls
        .iter()
        .map(|decl| FieldDescriptor {
            name: decl.name.to_string(),
            ident: to_snake_case(decl.name),
            ty: match decl.kind {
                FieldKind::Scalar(name) => name.to_string(),
                FieldKind::Sequence(elem) => format!("Vec<{elem}>"),
            },
            key: decl.key.to_string(),
            parameter: decl.parameter,
            required: decl.required,
            time: decl.time,
        })
        .collect()
}
