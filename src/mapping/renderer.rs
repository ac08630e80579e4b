//! Mapping document rendering

use super::types::{
    FieldMapper, IndexMapping, IndexTemplate, MappingDocument, Mappings, TemplateBody,
    TemplateOptions,
};
use crate::error::ErrorTally;
use crate::schema::{FieldNode, FieldTree, FieldType};
use std::collections::{BTreeMap, BTreeSet};

/// Default allow-list of renderable field types
pub const DEFAULT_ALLOWED_TYPES: [&str; 8] = [
    "text",
    "integer",
    "ip",
    "geo_point",
    "float",
    "date",
    "nested",
    "keyword",
];

/// Renders field trees into mapping or template documents.
///
/// Every leaf type is checked against the allow-list. A leaf outside it
/// is still rendered, but the miss is logged and counted in the injected
/// tally, so the run finishes with a non-zero exit code instead of
/// aborting mid-document.
#[derive(Debug, Clone)]
pub struct MappingRenderer {
    /// Type names accepted without a diagnostic
    allowed_types: BTreeSet<String>,

    /// Attach the static keyword sub-field to text leaves
    text_keyword_subfield: bool,
}

impl Default for MappingRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl MappingRenderer {
    /// Create a renderer with the default allow-list
    pub fn new() -> Self {
        Self {
            allowed_types: DEFAULT_ALLOWED_TYPES
                .iter()
                .map(ToString::to_string)
                .collect(),
            text_keyword_subfield: false,
        }
    }

    /// Replace the allow-list wholesale
    #[must_use]
    pub fn with_allowed_types<I, S>(mut self, types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.allowed_types = types.into_iter().map(Into::into).collect();
        self
    }

    /// Attach the static keyword sub-field to every text leaf
    #[must_use]
    pub fn with_text_keyword_subfield(mut self, enabled: bool) -> Self {
        self.text_keyword_subfield = enabled;
        self
    }

    /// Render a bare mapping document
    pub fn render(&self, tree: &FieldTree, tally: &ErrorTally) -> MappingDocument {
        MappingDocument::Index(IndexMapping {
            mappings: self.render_mappings(tree, tally),
        })
    }

    /// Render an index template bound to name patterns
    pub fn render_template(
        &self,
        tree: &FieldTree,
        options: &TemplateOptions,
        tally: &ErrorTally,
    ) -> MappingDocument {
        MappingDocument::Template(IndexTemplate {
            index_patterns: options.patterns.clone(),
            template: TemplateBody {
                mappings: self.render_mappings(tree, tally),
                settings: options.settings,
            },
            priority: options.priority,
        })
    }

    fn render_mappings(&self, tree: &FieldTree, tally: &ErrorTally) -> Mappings {
        Mappings {
            properties: self.render_children(&tree.fields, tally),
        }
    }

    fn render_children(
        &self,
        nodes: &BTreeMap<String, FieldNode>,
        tally: &ErrorTally,
    ) -> BTreeMap<String, FieldMapper> {
        nodes
            .iter()
            .map(|(name, node)| (name.clone(), self.render_node(name, node, tally)))
            .collect()
    }

    fn render_node(&self, name: &str, node: &FieldNode, tally: &ErrorTally) -> FieldMapper {
        match node {
            FieldNode::Leaf(field_type) => {
                if !self.allowed_types.contains(field_type.as_str()) {
                    tracing::warn!("Field '{}' has unsupported type '{}'", name, field_type);
                    tally.record();
                }
                let mapper = FieldMapper::leaf(field_type.clone());
                if self.text_keyword_subfield && *field_type == FieldType::Text {
                    mapper.with_keyword_subfield()
                } else {
                    mapper
                }
            }
            FieldNode::Interior(children) => {
                FieldMapper::nested(self.render_children(children, tally))
            }
        }
    }
}
