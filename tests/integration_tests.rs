//! Integration tests for batch mapping generation
//!
//! Tests the full end-to-end flow: config file → field tree → rendered
//! mapping or template document on disk.

use clap::Parser;
use mapsmith::cli::{Cli, Runner};
use mapsmith::error::{Error, ErrorTally};
use serde_json::{json, Value};
use std::fs;
use std::path::Path;

/// Run `mapsmith` with the given arguments and return the tally alongside
/// the run result
async fn run_cli(args: &[&str]) -> (Result<(), Error>, ErrorTally) {
    let cli = Cli::parse_from(args);
    let tally = ErrorTally::new();
    let runner = Runner::new(cli, tally.clone());
    (runner.run().await, tally)
}

fn read_document(path: &Path) -> Value {
    let content = fs::read_to_string(path).unwrap();
    serde_json::from_str(&content).unwrap()
}

// ============================================================================
// Mapping Generation
// ============================================================================

#[tokio::test]
async fn test_generate_mapping_from_json_config() {
    let dir = tempfile::tempdir().unwrap();
    let config_path = dir.path().join("fields.json");
    let output_path = dir.path().join("mapping.json");

    fs::write(
        &config_path,
        serde_json::to_string(&json!({
            "input": {
                "name": "text",
                "age": "integer",
                "address": {
                    "city": "text",
                    "location": "geo_point"
                }
            }
        }))
        .unwrap(),
    )
    .unwrap();

    let (result, tally) = run_cli(&[
        "mapsmith",
        "generate",
        "--input",
        config_path.to_str().unwrap(),
        "--output",
        output_path.to_str().unwrap(),
    ])
    .await;

    result.unwrap();
    assert_eq!(tally.count(), 0);

    let document = read_document(&output_path);
    assert_eq!(
        document,
        json!({
            "mappings": {
                "properties": {
                    "address": {
                        "type": "nested",
                        "properties": {
                            "city": {"type": "text"},
                            "location": {"type": "geo_point"}
                        }
                    },
                    "age": {"type": "integer"},
                    "name": {"type": "text"}
                }
            }
        })
    );
}

#[tokio::test]
async fn test_generate_template_from_yaml_config() {
    let dir = tempfile::tempdir().unwrap();
    let config_path = dir.path().join("fields.yaml");
    let output_path = dir.path().join("template.json");

    fs::write(
        &config_path,
        r#"
input:
  city: text
  population: integer
patterns:
  - "cities-*"
template_settings:
  number_of_shards: 2
  number_of_replicas: 1
priority: 100
"#,
    )
    .unwrap();

    let (result, tally) = run_cli(&[
        "mapsmith",
        "generate",
        "--input",
        config_path.to_str().unwrap(),
        "--output",
        output_path.to_str().unwrap(),
        "--template",
    ])
    .await;

    result.unwrap();
    assert_eq!(tally.count(), 0);

    let document = read_document(&output_path);
    assert_eq!(
        document,
        json!({
            "index_patterns": ["cities-*"],
            "priority": 100,
            "template": {
                "mappings": {
                    "properties": {
                        "city": {"type": "text"},
                        "population": {"type": "integer"}
                    }
                },
                "settings": {
                    "number_of_shards": 2,
                    "number_of_replicas": 1
                }
            }
        })
    );
}

#[tokio::test]
async fn test_generate_template_without_optional_fields() {
    let dir = tempfile::tempdir().unwrap();
    let config_path = dir.path().join("fields.json");
    let output_path = dir.path().join("template.json");

    fs::write(&config_path, r#"{"input": {"city": "text"}}"#).unwrap();

    let (result, _tally) = run_cli(&[
        "mapsmith",
        "generate",
        "--input",
        config_path.to_str().unwrap(),
        "--output",
        output_path.to_str().unwrap(),
        "--template",
    ])
    .await;

    result.unwrap();

    let document = read_document(&output_path);
    assert_eq!(
        document,
        json!({
            "template": {
                "mappings": {"properties": {"city": {"type": "text"}}}
            }
        })
    );
}

// ============================================================================
// Allow-List Behavior
// ============================================================================

#[tokio::test]
async fn test_generate_keeps_unsupported_types_and_counts_them() {
    let dir = tempfile::tempdir().unwrap();
    let config_path = dir.path().join("fields.json");
    let output_path = dir.path().join("mapping.json");

    // boolean is not in the default allowed-type list
    fs::write(
        &config_path,
        r#"{"input": {"active": "boolean", "name": "text"}}"#,
    )
    .unwrap();

    let (result, tally) = run_cli(&[
        "mapsmith",
        "generate",
        "--input",
        config_path.to_str().unwrap(),
        "--output",
        output_path.to_str().unwrap(),
    ])
    .await;

    result.unwrap();
    assert_eq!(tally.count(), 1);

    let document = read_document(&output_path);
    assert_eq!(
        document["mappings"]["properties"]["active"],
        json!({"type": "boolean"})
    );
}

#[tokio::test]
async fn test_generate_with_supported_fields_override() {
    let dir = tempfile::tempdir().unwrap();
    let config_path = dir.path().join("fields.yaml");
    let output_path = dir.path().join("mapping.json");

    fs::write(
        &config_path,
        r#"
input:
  score: half_float
  name: text
supported_fields:
  - half_float
  - text
"#,
    )
    .unwrap();

    let (result, tally) = run_cli(&[
        "mapsmith",
        "generate",
        "--input",
        config_path.to_str().unwrap(),
        "--output",
        output_path.to_str().unwrap(),
    ])
    .await;

    result.unwrap();
    assert_eq!(tally.count(), 0);

    let document = read_document(&output_path);
    assert_eq!(
        document["mappings"]["properties"]["score"],
        json!({"type": "half_float"})
    );
}

// ============================================================================
// Error Paths
// ============================================================================

#[tokio::test]
async fn test_generate_reports_missing_config() {
    let (result, _tally) = run_cli(&[
        "mapsmith",
        "generate",
        "--input",
        "no-such-config.json",
    ])
    .await;

    let err = result.unwrap_err();
    assert!(matches!(err, Error::FileNotFound { .. }));
}

#[tokio::test]
async fn test_generate_rejects_non_string_leaf() {
    let dir = tempfile::tempdir().unwrap();
    let config_path = dir.path().join("fields.json");

    fs::write(
        &config_path,
        r#"{"input": {"details": {"population": 42}}}"#,
    )
    .unwrap();

    let (result, _tally) = run_cli(&[
        "mapsmith",
        "generate",
        "--input",
        config_path.to_str().unwrap(),
    ])
    .await;

    let err = result.unwrap_err();
    assert!(err.to_string().contains("details.population"));
}

#[tokio::test]
async fn test_generate_rejects_malformed_config() {
    let dir = tempfile::tempdir().unwrap();
    let config_path = dir.path().join("fields.json");

    fs::write(&config_path, "{not valid json").unwrap();

    let (result, _tally) = run_cli(&[
        "mapsmith",
        "generate",
        "--input",
        config_path.to_str().unwrap(),
    ])
    .await;

    let err = result.unwrap_err();
    assert!(matches!(err, Error::Config { .. }));
}
