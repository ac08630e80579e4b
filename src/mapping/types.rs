//! Mapping document types

use crate::schema::FieldType;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A single rendered field descriptor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldMapper {
    /// Field type name
    #[serde(rename = "type")]
    pub field_type: FieldType,

    /// Child descriptors for nested fields
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub properties: Option<BTreeMap<String, FieldMapper>>,

    /// Static sub-fields (keyword companion for text)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fields: Option<TextFields>,
}

impl FieldMapper {
    /// Descriptor for a plain typed leaf
    pub fn leaf(field_type: FieldType) -> Self {
        Self {
            field_type,
            properties: None,
            fields: None,
        }
    }

    /// Descriptor for a nested object
    pub fn nested(properties: BTreeMap<String, FieldMapper>) -> Self {
        Self {
            field_type: FieldType::Nested,
            properties: Some(properties),
            fields: None,
        }
    }

    /// Attach the static keyword sub-field
    #[must_use]
    pub fn with_keyword_subfield(mut self) -> Self {
        self.fields = Some(TextFields::default());
        self
    }
}

/// Sub-field block attached to text fields
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TextFields {
    /// The keyword companion
    pub keyword: KeywordSubfield,
}

/// Exact-match companion for a text field, truncated past a fixed bound
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeywordSubfield {
    /// Always `keyword`
    #[serde(rename = "type")]
    pub field_type: FieldType,

    /// Longest value indexed verbatim
    pub ignore_above: u32,
}

impl Default for KeywordSubfield {
    fn default() -> Self {
        Self {
            field_type: FieldType::Keyword,
            ignore_above: 256,
        }
    }
}

/// Field descriptors keyed by field name
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Mappings {
    /// Top-level field descriptors
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub properties: BTreeMap<String, FieldMapper>,
}

/// Bare mapping document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndexMapping {
    /// The field mappings
    pub mappings: Mappings,
}

/// Per-index settings carried inside a template
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateSettings {
    /// Primary shard count
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub number_of_shards: Option<u32>,

    /// Replica count per shard
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub number_of_replicas: Option<u32>,
}

/// Inner body of an index template
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemplateBody {
    /// The field mappings
    pub mappings: Mappings,

    /// Optional per-index settings
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub settings: Option<TemplateSettings>,
}

/// Index template document bound to index-name patterns
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndexTemplate {
    /// Patterns of index names the template applies to
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub index_patterns: Vec<String>,

    /// Mappings and settings applied to matching indices
    pub template: TemplateBody,

    /// Precedence among overlapping templates
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<u32>,
}

/// Rendered output document, bare mapping or template
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum MappingDocument {
    /// `{mappings: ...}`
    Index(IndexMapping),
    /// `{index_patterns: ..., template: ...}`
    Template(IndexTemplate),
}

impl MappingDocument {
    /// The field descriptors regardless of envelope
    pub fn mappings(&self) -> &Mappings {
        match self {
            MappingDocument::Index(document) => &document.mappings,
            MappingDocument::Template(document) => &document.template.mappings,
        }
    }
}

/// Envelope options for template rendering
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TemplateOptions {
    /// Index-name patterns the template applies to
    pub patterns: Vec<String>,

    /// Optional shard/replica settings
    pub settings: Option<TemplateSettings>,

    /// Optional template priority
    pub priority: Option<u32>,
}
