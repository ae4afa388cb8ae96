use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use minijinja::value::Rest;
use minijinja::{AutoEscape, Environment, UndefinedBehavior};
use tracing::warn;

use super::context::GeneratorContext;
use super::imports::ImportTracker;
use super::layer::Layer;
use crate::error::GenerateError;

/// Template rendering engine.
///
/// Exactly two functions are injected into the template language:
///
/// - `import_once(key)` — the run's [`ImportTracker`], true exactly once
///   per key
/// - `dedup_key(parts...)` — joins its arguments with a `/` prefix per
///   argument; the leading separator is fine because the result is only
///   ever an opaque dedup key
///
/// Templates are parsed at render time, so a broken template (or one that
/// references an undefined field — undefined behavior is strict) fails that
/// one (schema, layer) render and nothing else.
pub struct Renderer {
    env: Environment<'static>,
    sources: HashMap<Layer, String>,
}

impl Renderer {
    /// Build an engine around an explicit tracker. `overrides`, when given,
    /// substitutes same-named template files for the built-in ones.
    pub fn new(tracker: Arc<ImportTracker>, overrides: Option<&Path>) -> Self {
        let mut env = Environment::new();
        env.set_undefined_behavior(UndefinedBehavior::Strict);
        // The output is Rust source, never markup.
        env.set_auto_escape_callback(|_| AutoEscape::None);
        env.add_function("import_once", move |key: String| {
            tracker.check_and_mark(&key)
        });
        env.add_function("dedup_key", |parts: Rest<String>| {
            let mut key = String::new();
            for part in &parts.0 {
                key.push('/');
                key.push_str(part);
            }
            key
        });

        let mut sources = HashMap::new();
        for layer in Layer::ALL {
            sources.insert(layer, load_template(layer, overrides));
        }
        Self { env, sources }
    }

    /// Expand one layer template against a context. The output is raw
    /// text, not yet guaranteed to be valid Rust.
    pub fn render(&self, layer: Layer, ctx: &GeneratorContext) -> Result<Vec<u8>, GenerateError> {
        let source = self.sources.get(&layer).map_or("", String::as_str);
        Ok(self.render_source(source, ctx)?.into_bytes())
    }

    /// Expand arbitrary template text; [`Renderer::render`] goes through
    /// this.
    pub fn render_source(
        &self,
        source: &str,
        ctx: &GeneratorContext,
    ) -> Result<String, GenerateError> {
        Ok(self.env.render_str(source, ctx)?)
    }
}

fn load_template(layer: Layer, overrides: Option<&Path>) -> String {
    if let Some(dir) = overrides {
        let path = dir.join(layer.template_file());
        if path.exists() {
            match std::fs::read_to_string(&path) {
                Ok(source) => return source,
                Err(err) => warn!(
                    path = %path.display(),
                    %err,
                    "template override unreadable, using built-in"
                ),
            }
        }
    }
    layer.builtin_template().to_string()
}
