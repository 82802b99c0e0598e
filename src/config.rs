//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/asmtree/asmtree.toml`
//! 3. Environment variables: `ASMTREE_*` prefix

use std::fs;
use std::path::PathBuf;

use config::{Config, ConfigError, Environment};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::errors::{SceneError, SceneResult};
use crate::walk::{OutlineWriter, INDENT_WIDTH, NAME_PLACEHOLDER};

/// Unified configuration for asmtree.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Text shown for nodes without a usable name
    pub placeholder: String,
    /// Spaces per indentation level in the outline
    pub indent_width: usize,
    /// Depth cap for outline printing, unlimited when absent
    pub max_depth: Option<usize>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            placeholder: NAME_PLACEHOLDER.to_string(),
            indent_width: INDENT_WIDTH,
            max_depth: None,
        }
    }
}

/// Raw settings for intermediate parsing (fields are Option to detect "not specified").
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
struct RawSettings {
    placeholder: Option<String>,
    indent_width: Option<usize>,
    max_depth: Option<usize>,
}

/// Get the XDG config directory for asmtree.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "asmtree").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("asmtree.toml"))
}

impl Settings {
    /// Load settings with layered precedence.
    pub fn load() -> SceneResult<Self> {
        let mut current = Self::default();

        if let Some(global_path) = global_config_path() {
            if global_path.exists() {
                let content =
                    fs::read_to_string(&global_path).map_err(|e| SceneError::Config {
                        message: format!("read {}: {}", global_path.display(), e),
                    })?;
                let raw: RawSettings =
                    toml::from_str(&content).map_err(|e| SceneError::Config {
                        message: format!("parse {}: {}", global_path.display(), e),
                    })?;
                current = current.merge_with(&raw);
            }
        }

        Self::apply_env_overrides(current)
    }

    fn merge_with(&self, overlay: &RawSettings) -> Self {
        Self {
            placeholder: overlay
                .placeholder
                .clone()
                .unwrap_or_else(|| self.placeholder.clone()),
            indent_width: overlay.indent_width.unwrap_or(self.indent_width),
            max_depth: overlay.max_depth.or(self.max_depth),
        }
    }

    /// Apply ASMTREE_* environment variables as explicit overrides.
    fn apply_env_overrides(mut settings: Self) -> SceneResult<Self> {
        let builder = Config::builder().add_source(Environment::with_prefix("ASMTREE"));
        let config = builder.build().map_err(config_err)?;

        if let Ok(val) = config.get_string("placeholder") {
            settings.placeholder = val;
        }
        if let Ok(val) = config.get_int("indent_width") {
            settings.indent_width = val as usize;
        }
        if let Ok(val) = config.get_int("max_depth") {
            settings.max_depth = Some(val as usize);
        }

        Ok(settings)
    }

    /// Outline writer configured from these settings.
    pub fn outline_writer(&self) -> OutlineWriter {
        OutlineWriter::new()
            .with_indent_width(self.indent_width)
            .with_placeholder(self.placeholder.clone())
            .with_max_depth(self.max_depth)
    }

    /// Show the effective configuration as TOML.
    pub fn to_toml(&self) -> SceneResult<String> {
        toml::to_string_pretty(self).map_err(|e| SceneError::Config {
            message: format!("serialize config: {e}"),
        })
    }
}

fn config_err(e: ConfigError) -> SceneError {
    SceneError::Config {
        message: e.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_no_config_when_loading_then_uses_defaults() {
        let settings = Settings::load().expect("load defaults");
        assert_eq!(settings.placeholder, "N/A");
        assert_eq!(settings.indent_width, 2);
    }

    #[test]
    fn given_overlay_when_merging_then_overlay_wins_per_field() {
        let base = Settings::default();
        let overlay = RawSettings {
            placeholder: Some("<unnamed>".into()),
            indent_width: None,
            max_depth: Some(3),
        };

        let merged = base.merge_with(&overlay);

        assert_eq!(merged.placeholder, "<unnamed>");
        assert_eq!(merged.indent_width, 2, "unspecified fields keep defaults");
        assert_eq!(merged.max_depth, Some(3));
    }

    #[test]
    fn given_settings_when_serializing_then_roundtrips() {
        let settings = Settings {
            placeholder: "?".into(),
            indent_width: 4,
            max_depth: Some(2),
        };
        let toml_str = settings.to_toml().expect("serialize");
        let parsed: Settings = toml::from_str(&toml_str).expect("parse");
        assert_eq!(parsed, settings);
    }
}
