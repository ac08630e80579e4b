//! Schema inference module
//!
//! Infers field types from JSON documents and reconstructs nested field
//! trees from dotted path names.
//!
//! # Features
//!
//! - **Type Guessing**: Classifies single JSON values into index field types
//! - **Document Walking**: Flattens nested documents into dotted-path observations
//! - **Type Widening**: Resolves conflicting observations through a fixed priority lattice
//! - **Path Trees**: Rebuilds nesting from dotted names with deterministic conflict handling

mod inference;
mod types;

pub use inference::{guess_type, walk_document};
pub use types::{FieldNode, FieldObservation, FieldTree, FieldType, TYPE_PRIORITY};
