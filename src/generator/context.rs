use serde::Serialize;

use crate::schema::FieldDescriptor;

use super::naming::{lower_first, to_snake_case};

/// Everything a layer template sees for one schema.
///
/// Built once per schema per run and handed read-only to all six layer
/// renders for that schema.
#[derive(Debug, Serialize)]
pub struct GeneratorContext {
    /// Static project name from configuration.
    pub project: String,
    /// The schema's declared title, unmodified, e.g. `"User"`.
    pub title: String,
    /// Lead-lowered title; templates use it for route paths and value names.
    pub ident: String,
    /// Word-separated lowercase title; output files are named after it.
    pub file_name: String,
    /// Ordered field descriptors, declaration order preserved.
    pub fields: Vec<FieldDescriptor>,
}

/// Combine extractor output, naming transforms and the configured project
/// name into one template context.
pub fn build_context(project: &str, title: &str, fields: Vec<FieldDescriptor>) -> GeneratorContext {
    GeneratorContext {
        project: project.to_string(),
        title: title.to_string(),
        ident: lower_first(title),
        file_name: to_snake_case(title),
        fields,
    }
}
