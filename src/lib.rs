// Allow common clippy pedantic lints that aren't critical for this codebase
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_lossless)]
#![allow(clippy::too_many_lines)]
#![allow(clippy::ref_option)]
#![allow(clippy::unused_self)]
#![allow(clippy::struct_excessive_bools)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::items_after_statements)]
#![allow(clippy::unnecessary_wraps)]
#![allow(clippy::match_same_arms)]
#![allow(clippy::match_wildcard_for_single_variants)]
#![allow(clippy::needless_pass_by_value)]
#![allow(clippy::unused_async)]

//! # Mapsmith
//!
//! A minimal, Rust-native tool for inferring search-index mappings and
//! templates from JSON documents.
//!
//! ## Features
//!
//! - **Type Inference**: Recursive type detection over arbitrary JSON values
//! - **Type Widening**: Conflicting observations resolve through a fixed priority list
//! - **Concurrent Collection**: Thread-safe aggregation from parallel HTTP producers
//! - **Mapping Output**: Plain index mappings or reusable index templates
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use mapsmith::error::ErrorTally;
//! use mapsmith::mapping::MappingRenderer;
//! use mapsmith::{load_config, Result};
//!
//! fn main() -> Result<()> {
//!     // Load an explicit field configuration
//!     let config = load_config("fields.yaml")?;
//!     let tree = config.field_tree()?;
//!
//!     // Render it as an index mapping
//!     let tally = ErrorTally::new();
//!     let mapping = MappingRenderer::new().render(&tree, &tally);
//!     println!("{}", serde_json::to_string_pretty(&mapping)?);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────────┐
//! │                           Entry Modes                          │
//! │  generate → explicit ConfigFile    collect → HTTP documents    │
//! └───────────────────────────────┬────────────────────────────────┘
//!                                 │
//! ┌───────────────┬───────────────┴───────────────┬────────────────┐
//! │    Schema     │           Collector           │    Mapping     │
//! ├───────────────┼───────────────────────────────┼────────────────┤
//! │ guess_type    │ one mutex per add batch       │ allow-list     │
//! │ walk_document │ lock-free counters            │ nested wrap    │
//! │ FieldTree     │ snapshot + materialize        │ templates      │
//! └───────────────┴───────────────────────────────┴────────────────┘
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]
#![allow(missing_docs)] // TODO: Add docs before 1.0 release

// ============================================================================
// Module declarations
// ============================================================================

/// Error types and the error tally
pub mod error;

/// Common types and type aliases
pub mod types;

/// Type inference over JSON values and the field tree
pub mod schema;

/// Concurrent schema aggregation
pub mod collector;

/// Mapping and template rendering
pub mod mapping;

/// Field configuration files
pub mod config;

/// Output writing
pub mod output;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use error::{Error, ErrorTally, Result};
pub use types::*;

// Re-export commonly used types
pub use config::{load_config, ConfigFile};
pub use schema::{guess_type, walk_document, FieldTree, FieldType};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
