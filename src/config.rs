//! Configuration types for batch mapping generation
//!
//! This module contains the structure of the field configuration file
//! (JSON or YAML) and the loader that reads it from disk.

use crate::error::{Error, Result};
use crate::mapping::{TemplateOptions, TemplateSettings};
use crate::schema::FieldTree;
use crate::types::JsonObject;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

// ============================================================================
// Config File
// ============================================================================

/// Complete mapping configuration loaded from JSON or YAML
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConfigFile {
    /// Explicit field declarations: a leaf is a type-name string, an
    /// object is a nested subtree
    #[serde(default)]
    pub input: JsonObject,

    /// Index-name patterns for template output
    #[serde(default)]
    pub patterns: Vec<String>,

    /// Allowed-type override, replacing the built-in list when non-empty
    #[serde(default)]
    pub supported_fields: Vec<String>,

    /// Index settings carried into template output
    #[serde(default)]
    pub template_settings: Option<TemplateSettings>,

    /// Template priority
    #[serde(default)]
    pub priority: Option<u32>,
}

impl ConfigFile {
    /// Build the nested field tree declared under `input`
    pub fn field_tree(&self) -> Result<FieldTree> {
        FieldTree::from_config(&self.input)
    }

    /// Collect the template envelope options declared in this config
    #[must_use]
    pub fn template_options(&self) -> TemplateOptions {
        TemplateOptions {
            patterns: self.patterns.clone(),
            settings: self.template_settings,
            priority: self.priority,
        }
    }
}

// ============================================================================
// Loading
// ============================================================================

/// Load a mapping configuration from a file path
///
/// The format is chosen by extension: `.yaml` and `.yml` parse as YAML,
/// everything else parses as JSON.
pub fn load_config(path: impl AsRef<Path>) -> Result<ConfigFile> {
    let path = path.as_ref();

    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            Error::FileNotFound {
                path: path.display().to_string(),
            }
        } else {
            Error::config(format!(
                "Failed to read config file '{}': {}",
                path.display(),
                e
            ))
        }
    })?;

    let is_yaml = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml"));

    if is_yaml {
        load_config_from_yaml(&content)
    } else {
        load_config_from_json(&content)
    }
}

/// Parse a mapping configuration from a YAML string
pub fn load_config_from_yaml(content: &str) -> Result<ConfigFile> {
    serde_yaml::from_str(content)
        .map_err(|e| Error::config(format!("Failed to parse config YAML: {e}")))
}

/// Parse a mapping configuration from a JSON string
pub fn load_config_from_json(content: &str) -> Result<ConfigFile> {
    serde_json::from_str(content)
        .map_err(|e| Error::config(format!("Failed to parse config JSON: {e}")))
}
