//! Mapping rendering module
//!
//! Turns nested field trees into index mapping or template documents.
//!
//! # Features
//!
//! - **Typed Descriptors**: One `{type: ...}` descriptor per leaf field
//! - **Nested Wrapping**: Interior nodes become `nested` blocks with child properties
//! - **Allow-list Validation**: Unknown types render best-effort and feed the error tally
//! - **Template Envelopes**: Optional index-pattern, priority, and settings wrapper

mod renderer;
mod types;

pub use renderer::{MappingRenderer, DEFAULT_ALLOWED_TYPES};
pub use types::{
    FieldMapper, IndexMapping, IndexTemplate, KeywordSubfield, MappingDocument, Mappings,
    TemplateBody, TemplateOptions, TemplateSettings, TextFields,
};
