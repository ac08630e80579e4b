//! Output writing for rendered mapping documents
//!
//! Serializes rendered documents as pretty-printed JSON, either to a
//! file or to stdout.

use crate::error::{Error, Result};
use serde::Serialize;
use std::fs;
use std::io::Write;
use std::path::Path;

/// Serialize a document as pretty-printed JSON with a trailing newline
pub fn to_pretty_json(document: &impl Serialize) -> Result<String> {
    let mut rendered = serde_json::to_string_pretty(document).map_err(|e| Error::Output {
        message: format!("Failed to serialize document: {e}"),
    })?;
    rendered.push('\n');
    Ok(rendered)
}

/// Write a document as pretty-printed JSON to a file, or to stdout when
/// no path is given
pub fn write_json(path: Option<&Path>, document: &impl Serialize) -> Result<()> {
    let rendered = to_pretty_json(document)?;

    match path {
        Some(path) => fs::write(path, rendered).map_err(|e| Error::Output {
            message: format!("Failed to write '{}': {}", path.display(), e),
        }),
        None => {
            let stdout = std::io::stdout();
            let mut handle = stdout.lock();
            handle
                .write_all(rendered.as_bytes())
                .map_err(|e| Error::Output {
                    message: format!("Failed to write to stdout: {e}"),
                })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_pretty_json_uses_two_space_indent() {
        let rendered = to_pretty_json(&json!({"mappings": {"properties": {}}})).unwrap();
        assert_eq!(
            rendered,
            "{\n  \"mappings\": {\n    \"properties\": {}\n  }\n}\n"
        );
    }

    #[test]
    fn test_write_json_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("mapping.json");

        write_json(Some(&path), &json!({"mappings": {}})).unwrap();

        let written = fs::read_to_string(&path).unwrap();
        assert!(written.ends_with('\n'));
        let parsed: serde_json::Value = serde_json::from_str(&written).unwrap();
        assert_eq!(parsed, json!({"mappings": {}}));
    }

    #[test]
    fn test_write_json_reports_unwritable_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing-dir").join("mapping.json");

        let err = write_json(Some(&path), &json!({})).unwrap_err();
        assert!(matches!(err, Error::Output { .. }));
    }
}
