//! Run metrics
//!
//! - Counters only
//! - Monotonic increase
//! - Reset only on process start

use std::sync::atomic::{AtomicU64, Ordering};

/// Counters for a single roster invocation
///
/// Atomics keep the registry shareable by reference; the run itself is
/// single-threaded.
#[derive(Debug, Default)]
pub struct RunMetrics {
    records_loaded: AtomicU64,
    records_generated: AtomicU64,
    queries_executed: AtomicU64,
    queries_failed: AtomicU64,
}

impl RunMetrics {
    /// Create a registry with all counters at zero
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_records_loaded(&self, count: u64) {
        self.records_loaded.fetch_add(count, Ordering::Relaxed);
    }

    pub fn add_records_generated(&self, count: u64) {
        self.records_generated.fetch_add(count, Ordering::Relaxed);
    }

    /// Counts a query that produced a value
    pub fn increment_queries_executed(&self) {
        self.queries_executed.fetch_add(1, Ordering::Relaxed);
    }

    /// Counts a query that failed
    pub fn increment_queries_failed(&self) {
        self.queries_failed.fetch_add(1, Ordering::Relaxed);
    }

    /// Get all metrics as a snapshot
    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            records_loaded: self.records_loaded.load(Ordering::Relaxed),
            records_generated: self.records_generated.load(Ordering::Relaxed),
            queries_executed: self.queries_executed.load(Ordering::Relaxed),
            queries_failed: self.queries_failed.load(Ordering::Relaxed),
        }
    }
}

/// A point-in-time snapshot of all metrics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MetricsSnapshot {
    pub records_loaded: u64,
    pub records_generated: u64,
    pub queries_executed: u64,
    pub queries_failed: u64,
}

impl MetricsSnapshot {
    /// Log fields for the snapshot, keys in log order
    pub fn fields(&self) -> [(&'static str, String); 4] {
        [
            ("queries_executed", self.queries_executed.to_string()),
            ("queries_failed", self.queries_failed.to_string()),
            ("records_generated", self.records_generated.to_string()),
            ("records_loaded", self.records_loaded.to_string()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_registry_has_zero_values() {
        let metrics = RunMetrics::new();
        assert_eq!(metrics.snapshot(), MetricsSnapshot::default());
    }

    #[test]
    fn test_increment_counters() {
        let metrics = RunMetrics::new();

        metrics.add_records_loaded(1000);
        metrics.add_records_generated(20);
        metrics.increment_queries_executed();
        metrics.increment_queries_executed();
        metrics.increment_queries_failed();

        let snapshot = metrics.snapshot();
        assert_eq!(snapshot.records_loaded, 1000);
        assert_eq!(snapshot.records_generated, 20);
        assert_eq!(snapshot.queries_executed, 2);
        assert_eq!(snapshot.queries_failed, 1);
    }

    #[test]
    fn test_monotonic_increase() {
        let metrics = RunMetrics::new();

        let mut prev = metrics.snapshot().queries_executed;
        for _ in 0..10 {
            metrics.increment_queries_executed();
            let current = metrics.snapshot().queries_executed;
            assert!(current > prev);
            prev = current;
        }
    }

    #[test]
    fn test_snapshot_fields() {
        let metrics = RunMetrics::new();
        metrics.add_records_loaded(3);
        let fields = metrics.snapshot().fields();
        assert!(fields.contains(&("records_loaded", "3".to_string())));
        assert!(fields.windows(2).all(|w| w[0].0 < w[1].0));
    }
}
