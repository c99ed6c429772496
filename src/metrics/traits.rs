//! # Metrics Traits
//!
//! ```text
//!   ┌─────────────────────────┐      ┌─────────────────────────┐
//!   │  CoreMetricsRecorder    │      │  MruMetricsReadRecorder │
//!   │  get / insert / evict   │      │  peek (&self)           │
//!   └───────────┬─────────────┘      └─────────────────────────┘
//!               ▼
//!   ┌─────────────────────────┐
//!   │  MruMetricsRecorder     │
//!   │  promotions             │
//!   └─────────────────────────┘
//!
//!   Consumption: MetricsSnapshotProvider<S>, MetricsReset
//! ```

/// Common counters for any cache.
pub trait CoreMetricsRecorder {
    fn record_get_hit(&mut self);
    fn record_get_miss(&mut self);
    fn record_insert_call(&mut self);
    fn record_insert_new(&mut self);
    fn record_insert_update(&mut self);
    fn record_evicted_entry(&mut self);
    fn record_clear(&mut self);
}

/// Promotion signals specific to single-step MRU lists.
pub trait MruMetricsRecorder: CoreMetricsRecorder {
    /// A hit moved its node one step toward the root.
    fn record_promotion(&mut self);
    /// A hit landed on the root, so nothing moved.
    fn record_promotion_at_root(&mut self);
}

/// Read-only MRU metrics for `&self` methods.
pub trait MruMetricsReadRecorder {
    fn record_peek_call(&self);
    fn record_peek_found(&self);
}

/// Snapshot provider for bench/testing.
pub trait MetricsSnapshotProvider<S> {
    fn snapshot(&self) -> S;
}

/// Reset metrics between tests or benchmark iterations.
pub trait MetricsReset {
    fn reset_metrics(&mut self);
}
