//! Generator configuration.
//!
//! An optional `crudgen.toml` can override the project name, the output
//! root, per-layer directories and the templates directory; a missing file
//! is not an error and every field has a default.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::Deserialize;

use crate::generator::Layer;

/// File name probed next to the invocation when no path is given.
pub const DEFAULT_CONFIG_FILE: &str = "crudgen.toml";

#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeneratorConfig {
    /// Project name exposed to every template.
    pub project: String,
    /// Root below which the per-layer directories live.
    pub output_root: PathBuf,
    /// Per-layer directory overrides, keyed by layer name.
    pub dirs: HashMap<String, PathBuf>,
    /// Directory of replacement template files, tried before the built-ins.
    pub templates: Option<PathBuf>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            project: "manager".to_string(),
            output_root: PathBuf::from("generated"),
            dirs: HashMap::new(),
            templates: None,
        }
    }
}

impl GeneratorConfig {
    /// Output directory for one layer: the configured override or the
    /// built-in default, joined under the output root.
    pub fn layer_dir(&self, layer: Layer) -> PathBuf {
        match self.dirs.get(layer.name()) {
            Some(dir) => self.output_root.join(dir),
            None => self.output_root.join(layer.default_dir()),
        }
    }
}

/// Load configuration from `path` if the file exists.
///
/// Returns `Ok(None)` when the file is absent (the caller falls back to
/// defaults); a file that exists but does not parse is an error.
pub fn load_config(path: &Path) -> anyhow::Result<Option<GeneratorConfig>> {
    if !path.exists() {
        return Ok(None);
    }
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config: {}", path.display()))?;
    let config = toml::from_str(&contents)
        .with_context(|| format!("failed to parse config: {}", path.display()))?;
    Ok(Some(config))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = GeneratorConfig::default();
        assert_eq!(config.project, "manager");
        assert_eq!(config.output_root, PathBuf::from("generated"));
        assert_eq!(
            config.layer_dir(Layer::Postgres),
            PathBuf::from("generated/src/store/postgres")
        );
        assert!(config.templates.is_none());
    }

    #[test]
    fn test_layer_dir_override() {
        let mut config = GeneratorConfig::default();
        config
            .dirs
            .insert("api".to_string(), PathBuf::from("web/v1"));
        assert_eq!(config.layer_dir(Layer::Api), PathBuf::from("generated/web/v1"));
        // Unlisted layers keep their defaults.
        assert_eq!(
            config.layer_dir(Layer::Bll),
            PathBuf::from("generated/src/bll")
        );
    }

    #[test]
    fn test_parse_overrides() {
        let parsed: GeneratorConfig = toml::from_str(
            r#"
            project = "fleet"
            output_root = "out"

            [dirs]
            entity = "src/records"
            "#,
        )
        .unwrap();
        assert_eq!(parsed.project, "fleet");
        assert_eq!(parsed.layer_dir(Layer::Entity), PathBuf::from("out/src/records"));
    }

    #[test]
    fn test_load_config_missing_file_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let loaded = load_config(&dir.path().join("crudgen.toml")).unwrap();
        assert!(loaded.is_none());
    }

    #[test]
    fn test_load_config_malformed_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("crudgen.toml");
        std::fs::write(&path, "project = [not toml").unwrap();
        assert!(load_config(&path).is_err());
    }
}
