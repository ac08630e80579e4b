//! Error types for mapsmith
//!
//! This module defines the error hierarchy for the whole tool.
//! All public APIs return `Result<T, Error>` where Error is defined here.
//! Non-fatal conditions (unsupported field types, rejected documents) are
//! counted in an [`ErrorTally`] instead of unwinding the pipeline.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use thiserror::Error;

/// The main error type for mapsmith
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Configuration Errors
    // ============================================================================
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Invalid config value for '{field}': {message}")]
    InvalidConfigValue { field: String, message: String },

    #[error("Failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("Failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    // ============================================================================
    // Server Errors
    // ============================================================================
    #[error("Server error: {message}")]
    Server { message: String },

    // ============================================================================
    // I/O Errors
    // ============================================================================
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("File not found: {path}")]
    FileNotFound { path: String },

    #[error("Output error: {message}")]
    Output { message: String },

    // ============================================================================
    // Generic Errors
    // ============================================================================
    #[error("{0}")]
    Other(String),

    #[error(transparent)]
    Anyhow(#[from] anyhow::Error),
}

impl Error {
    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create an invalid config value error
    pub fn invalid_value(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidConfigValue {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Create a server error
    pub fn server(message: impl Into<String>) -> Self {
        Self::Server {
            message: message.into(),
        }
    }

    /// Create an output error
    pub fn output(message: impl Into<String>) -> Self {
        Self::Output {
            message: message.into(),
        }
    }
}

/// Result type alias for mapsmith
pub type Result<T> = std::result::Result<T, Error>;

// ============================================================================
// Error Accounting
// ============================================================================

/// Process-wide error accumulator.
///
/// Non-fatal problems (a field type outside the allow-list, a rejected
/// document) are recorded here instead of aborting the run, and the final
/// count becomes the process exit code. Handles are cheap clones sharing
/// one counter, so the top-level driver owns the tally and passes handles
/// into the renderer and the collector server.
#[derive(Debug, Clone, Default)]
pub struct ErrorTally {
    count: Arc<AtomicU64>,
}

impl ErrorTally {
    /// Create a fresh tally with a zero count
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one error
    pub fn record(&self) {
        self.count.fetch_add(1, Ordering::Relaxed);
    }

    /// Current error count
    #[must_use]
    pub fn count(&self) -> u64 {
        self.count.load(Ordering::Relaxed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::config("test message");
        assert_eq!(err.to_string(), "Configuration error: test message");

        let err = Error::invalid_value("fields.name", "expected a type name");
        assert_eq!(
            err.to_string(),
            "Invalid config value for 'fields.name': expected a type name"
        );

        let err = Error::FileNotFound {
            path: "missing.json".to_string(),
        };
        assert_eq!(err.to_string(), "File not found: missing.json");
    }

    #[test]
    fn test_tally_counts_records() {
        let tally = ErrorTally::new();
        assert_eq!(tally.count(), 0);

        tally.record();
        tally.record();
        assert_eq!(tally.count(), 2);
    }

    #[test]
    fn test_tally_clones_share_the_counter() {
        let tally = ErrorTally::new();
        let handle = tally.clone();

        handle.record();
        tally.record();

        assert_eq!(tally.count(), 2);
        assert_eq!(handle.count(), 2);
    }
}
