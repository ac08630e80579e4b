//! Thread-safe schema aggregation

use crate::schema::{FieldObservation, FieldTree, FieldType};
use std::collections::{BTreeMap, HashMap};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;

/// Aggregate state for one observed field
#[derive(Debug, Clone, PartialEq)]
pub struct FieldStat {
    /// Current winning type
    pub field_type: FieldType,

    /// Number of observations
    pub count: u64,
}

/// Counter snapshot of a collector
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CollectorStats {
    /// Total field observations across all documents
    pub total_observations: u64,

    /// Number of non-empty observation batches merged
    pub total_batches: u64,

    /// Accepted documents
    pub success_count: u64,

    /// Rejected documents
    pub failure_count: u64,
}

/// Thread-safe accumulator of field observations.
///
/// Holds per-field observation counts and the current winning type. One
/// instance is shared by every request handler for the process lifetime.
/// Each [`add`](SchemaCollector::add) call takes the field-map lock
/// exactly once for its whole batch, so contention grows with request
/// count rather than field count; the counters are plain atomics that
/// never touch the lock.
#[derive(Debug, Default)]
pub struct SchemaCollector {
    fields: Mutex<HashMap<String, FieldStat>>,
    total_observations: AtomicU64,
    total_batches: AtomicU64,
    success_count: AtomicU64,
    failure_count: AtomicU64,
}

impl SchemaCollector {
    /// Create an empty collector
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge one document's observations into the aggregate.
    ///
    /// An unseen field is created with the observed type and a count of
    /// one; a seen field has its count bumped and its type widened
    /// through the priority lattice. An empty batch only moves the
    /// observation counter.
    pub fn add(&self, observations: Vec<FieldObservation>) {
        self.total_observations
            .fetch_add(observations.len() as u64, Ordering::Relaxed);
        if observations.is_empty() {
            return;
        }
        self.total_batches.fetch_add(1, Ordering::Relaxed);

        let mut fields = self.fields.lock().expect("field map lock poisoned");
        for FieldObservation { name, field_type } in observations {
            let stat = fields.entry(name).or_insert_with(|| FieldStat {
                field_type: field_type.clone(),
                count: 0,
            });
            stat.count += 1;
            stat.field_type = stat.field_type.widen(&field_type);
        }
    }

    /// Record an accepted document
    pub fn record_success(&self) {
        self.success_count.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a rejected document
    pub fn record_failure(&self) {
        self.failure_count.fetch_add(1, Ordering::Relaxed);
    }

    /// Point-in-time copy of the field map, sorted by field name. The
    /// lock is held only for the copy, never for downstream work.
    pub fn snapshot(&self) -> BTreeMap<String, FieldStat> {
        let fields = self.fields.lock().expect("field map lock poisoned");
        fields
            .iter()
            .map(|(name, stat)| (name.clone(), stat.clone()))
            .collect()
    }

    /// Materialize the aggregate into a nested field tree.
    ///
    /// Works on a snapshot, so it is safe to call while other tasks keep
    /// adding; the result reflects a point in time. Sorted insertion
    /// makes conflicting names (`a` and `a.b`) resolve the same way on
    /// every run.
    pub fn materialize(&self) -> FieldTree {
        let snapshot = self.snapshot();
        let mut tree = FieldTree::new();
        for (name, stat) in &snapshot {
            tree.insert_path(name, stat.field_type.clone());
        }
        tree
    }

    /// Current counter values
    pub fn stats(&self) -> CollectorStats {
        CollectorStats {
            total_observations: self.total_observations.load(Ordering::Relaxed),
            total_batches: self.total_batches.load(Ordering::Relaxed),
            success_count: self.success_count.load(Ordering::Relaxed),
            failure_count: self.failure_count.load(Ordering::Relaxed),
        }
    }

    /// Number of distinct fields observed so far
    pub fn field_count(&self) -> usize {
        self.fields.lock().expect("field map lock poisoned").len()
    }
}
