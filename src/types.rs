//! Common types used throughout mapsmith
//!
//! Shared type aliases for the decoded-JSON shapes the inference and
//! rendering layers pass around.

/// JSON value type (re-exported from serde_json)
pub type JsonValue = serde_json::Value;

/// JSON object type
pub type JsonObject = serde_json::Map<String, JsonValue>;
