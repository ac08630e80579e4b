//! Field type inference from JSON values

use super::types::{FieldObservation, FieldType};
use crate::types::{JsonObject, JsonValue};

/// Guess the type tag for a single decoded JSON value.
///
/// Arrays are classified by their first element; an empty array carries
/// no type information and yields `None`, which callers must skip.
/// Objects reached here (inside an array) and nulls are unsupported.
pub fn guess_type(value: &JsonValue) -> Option<FieldType> {
    match value {
        JsonValue::Null => Some(FieldType::Unsupported("unknown-null".to_string())),
        JsonValue::Bool(_) => Some(FieldType::Boolean),
        JsonValue::Number(number) => Some(guess_number(number)),
        JsonValue::String(_) => Some(FieldType::Text),
        JsonValue::Array(items) => items.first().and_then(guess_type),
        JsonValue::Object(_) => Some(FieldType::Unsupported("unknown-object".to_string())),
    }
}

fn guess_number(number: &serde_json::Number) -> FieldType {
    if number.is_i64() || number.is_u64() {
        return FieldType::Integer;
    }
    // A float that renders as a whole number counts as an integer
    // (5000.0 -> integer, 5000.5 -> float). The check goes through the
    // decimal string, not magnitude rounding, so precision quirks never
    // reclassify a genuine fraction.
    match number.as_f64() {
        Some(float) if format!("{float}").parse::<i64>().is_ok() => FieldType::Integer,
        _ => FieldType::Float,
    }
}

/// Flatten a nested document into (dotted path, type) observations.
///
/// Nested objects recurse with their key appended to the prefix; every
/// other value contributes one observation, except empty arrays, which
/// are skipped.
pub fn walk_document(prefix: &str, document: &JsonObject) -> Vec<FieldObservation> {
    let mut observations = Vec::new();
    for (key, value) in document {
        match value {
            JsonValue::Object(child) => {
                let child_prefix = format!("{prefix}{key}.");
                observations.extend(walk_document(&child_prefix, child));
            }
            other => {
                if let Some(field_type) = guess_type(other) {
                    observations.push(FieldObservation::new(format!("{prefix}{key}"), field_type));
                }
            }
        }
    }
    observations
}
