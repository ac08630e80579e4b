//! Schema types

use crate::error::{Error, Result};
use crate::types::{JsonObject, JsonValue};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Coarse field type tag used in index mappings
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldType {
    Text,
    Integer,
    Float,
    Boolean,
    Date,
    Ip,
    GeoPoint,
    Keyword,
    Nested,
    /// Anything the guesser cannot classify, or a config-declared type
    /// name outside the fixed set. Carries the raw name so overridden
    /// allow-lists can admit arbitrary engine types.
    Unsupported(String),
}

/// Widening priority, highest first. A field ever observed as free text
/// stays text; floats absorb integers; integers absorb booleans.
pub const TYPE_PRIORITY: [FieldType; 4] = [
    FieldType::Text,
    FieldType::Float,
    FieldType::Integer,
    FieldType::Boolean,
];

impl FieldType {
    /// Parse a type name. Total: unknown names land in
    /// [`FieldType::Unsupported`] verbatim.
    pub fn parse(name: &str) -> FieldType {
        match name {
            "text" => FieldType::Text,
            "integer" => FieldType::Integer,
            "float" => FieldType::Float,
            "boolean" => FieldType::Boolean,
            "date" => FieldType::Date,
            "ip" => FieldType::Ip,
            "geo_point" => FieldType::GeoPoint,
            "keyword" => FieldType::Keyword,
            "nested" => FieldType::Nested,
            other => FieldType::Unsupported(other.to_string()),
        }
    }

    /// The wire name of this tag
    pub fn as_str(&self) -> &str {
        match self {
            FieldType::Text => "text",
            FieldType::Integer => "integer",
            FieldType::Float => "float",
            FieldType::Boolean => "boolean",
            FieldType::Date => "date",
            FieldType::Ip => "ip",
            FieldType::GeoPoint => "geo_point",
            FieldType::Keyword => "keyword",
            FieldType::Nested => "nested",
            FieldType::Unsupported(name) => name,
        }
    }

    /// Merge a new observation into the current type, widening toward
    /// the higher-priority tag. Tags outside the priority list never
    /// change the current value and are never displaced by it.
    pub fn widen(&self, incoming: &FieldType) -> FieldType {
        if self == incoming {
            return self.clone();
        }
        match (self.priority(), incoming.priority()) {
            (Some(current), Some(new)) if new < current => incoming.clone(),
            _ => self.clone(),
        }
    }

    fn priority(&self) -> Option<usize> {
        TYPE_PRIORITY.iter().position(|t| t == self)
    }
}

impl std::fmt::Display for FieldType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Serialize for FieldType {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for FieldType {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let name = String::deserialize(deserializer)?;
        Ok(FieldType::parse(&name))
    }
}

/// A single (dotted path, inferred type) observation from one document
#[derive(Debug, Clone, PartialEq)]
pub struct FieldObservation {
    /// Dotted field path
    pub name: String,

    /// Inferred type tag
    pub field_type: FieldType,
}

impl FieldObservation {
    /// Create a new observation
    pub fn new(name: impl Into<String>, field_type: FieldType) -> Self {
        Self {
            name: name.into(),
            field_type,
        }
    }
}

/// One node of a field tree: a typed leaf or an interior node holding
/// children, never both
#[derive(Debug, Clone, PartialEq)]
pub enum FieldNode {
    /// A terminal field with its winning type
    Leaf(FieldType),

    /// A nested object with child fields
    Interior(BTreeMap<String, FieldNode>),
}

/// Nested field tree keyed by path segment, materialized from dotted
/// field names or declared explicitly in configuration
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldTree {
    /// Top-level fields
    pub fields: BTreeMap<String, FieldNode>,
}

impl FieldTree {
    /// Create an empty tree
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a dotted field name, creating interior nodes along the way.
    ///
    /// A leaf sitting where the path needs an interior node is replaced
    /// and its type discarded; a subtree sitting where the final segment
    /// lands is likewise replaced by the leaf. Last write wins for
    /// genuinely conflicting names such as `a` and `a.b`.
    pub fn insert_path(&mut self, name: &str, field_type: FieldType) {
        let segments: Vec<&str> = name.split('.').collect();
        let Some((last, interior)) = segments.split_last() else {
            return;
        };

        let mut current = &mut self.fields;
        for segment in interior {
            let node = current
                .entry((*segment).to_string())
                .or_insert_with(|| FieldNode::Interior(BTreeMap::new()));
            if matches!(node, FieldNode::Leaf(_)) {
                *node = FieldNode::Interior(BTreeMap::new());
            }
            let FieldNode::Interior(children) = node else {
                return;
            };
            current = children;
        }
        current.insert((*last).to_string(), FieldNode::Leaf(field_type));
    }

    /// Build a tree from the explicit `input` section of a config file.
    /// Leaves are type-name strings; objects declare nested subtrees.
    pub fn from_config(input: &JsonObject) -> Result<FieldTree> {
        let mut fields = BTreeMap::new();
        for (name, value) in input {
            fields.insert(name.clone(), node_from_config(name, value)?);
        }
        Ok(FieldTree { fields })
    }

    /// Get a top-level node
    pub fn get(&self, name: &str) -> Option<&FieldNode> {
        self.fields.get(name)
    }

    /// Number of top-level fields
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Check whether the tree has no fields
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

fn node_from_config(path: &str, value: &JsonValue) -> Result<FieldNode> {
    match value {
        JsonValue::String(type_name) => Ok(FieldNode::Leaf(FieldType::parse(type_name))),
        JsonValue::Object(children) => {
            let mut nodes = BTreeMap::new();
            for (child_name, child_value) in children {
                let child_path = format!("{path}.{child_name}");
                nodes.insert(
                    child_name.clone(),
                    node_from_config(&child_path, child_value)?,
                );
            }
            Ok(FieldNode::Interior(nodes))
        }
        other => Err(Error::invalid_value(
            path,
            format!("expected a type name or nested object, got {other}"),
        )),
    }
}
