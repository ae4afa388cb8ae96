use std::fs;
use std::sync::Arc;

use tracing::{info, warn};

use crate::config::GeneratorConfig;
use crate::error::GenerateError;
use crate::schema::{extract_fields, Schema};

use super::context::build_context;
use super::format::sanitize;
use super::imports::ImportTracker;
use super::layer::Layer;
use super::render::Renderer;
use super::write::write_if_absent;

/// Outcome counters for one generation run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct GenerationSummary {
    /// Files created this run.
    pub written: usize,
    /// Files left alone because something already existed at their path.
    pub skipped: usize,
    /// (schema, layer) renders lost to template or formatting errors.
    pub failed: usize,
}

/// Run the whole pipeline: one file per (schema, layer).
///
/// The import tracker is created here and lives for exactly this run.
/// Render and sanitize failures are logged and cost only that file; any
/// filesystem failure aborts the run immediately, with no cleanup of files
/// already written.
pub fn generate_all<'a, I>(
    config: &GeneratorConfig,
    schemas: I,
) -> Result<GenerationSummary, GenerateError>
where
    I: IntoIterator<Item = &'a Schema>,
{
    let tracker = Arc::new(ImportTracker::default());
    let renderer = Renderer::new(tracker, config.templates.as_deref());
    let mut summary = GenerationSummary::default();

    for layer in Layer::ALL {
        fs::create_dir_all(config.layer_dir(layer))?;
    }

    for schema in schemas {
        let fields = extract_fields(schema);
        if fields.is_empty() {
            continue;
        }
        let ctx = build_context(&config.project, schema.title, fields);

        for layer in Layer::ALL {
            let raw = match renderer.render(layer, &ctx) {
                Ok(raw) => raw,
                Err(err) => {
                    warn!(
                        schema = ctx.title.as_str(),
                        layer = layer.name(),
                        %err,
                        "render failed"
                    );
                    summary.failed += 1;
                    continue;
                }
            };
            let src = match sanitize(&raw) {
                Ok(src) => src,
                Err(err) => {
                    warn!(
                        schema = ctx.title.as_str(),
                        layer = layer.name(),
                        %err,
                        "rendered text rejected"
                    );
                    summary.failed += 1;
                    continue;
                }
            };
            let path = config
                .layer_dir(layer)
                .join(format!("{}.rs", ctx.file_name));
            if write_if_absent(&path, src.as_bytes())? {
                println!("✅ Generated {}", path.display());
                summary.written += 1;
            } else {
                println!("⚠️  Skipping existing file: {}", path.display());
                summary.skipped += 1;
            }
        }
    }

    info!(
        written = summary.written,
        skipped = summary.skipped,
        failed = summary.failed,
        "generation finished"
    );
    Ok(summary)
}
