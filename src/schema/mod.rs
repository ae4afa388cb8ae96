//! # Schema Module
//!
//! Declarative entity schemas and their introspection.
//!
//! A [`Schema`] is an ordered set of named, typed, annotated field
//! declarations. The registry in [`catalog`] maps names to schema values;
//! [`extract_fields`] turns one schema into the ordered
//! [`FieldDescriptor`] sequence the layer templates consume. There is no
//! runtime reflection anywhere: a schema carries its own description.

mod catalog;
mod extract;
mod types;

pub use catalog::registry;
pub use extract::{extract_fields, FieldDescriptor};
pub use types::{FieldDeclaration, FieldKind, Schema, SchemaKind};
