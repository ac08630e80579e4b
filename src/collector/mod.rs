//! Schema collection module
//!
//! Thread-safe accumulation of field observations across many documents.
//!
//! # Features
//!
//! - **Batched Merging**: One lock acquisition per document, not per field
//! - **Lock-free Counters**: Observation and outcome counters never block the field map
//! - **Snapshot Materialization**: Point-in-time field trees built outside the lock

mod aggregator;

pub use aggregator::{CollectorStats, FieldStat, SchemaCollector};
