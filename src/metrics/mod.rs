//! Operation counters for the MRU cache (feature `metrics`).
//!
//! Recording, snapshotting and reading are split into small traits so the
//! cache only ever writes counters:
//!
//! ```text
//!   MruCache ──record_*──► MruMetrics ──snapshot──► MruMetricsSnapshot
//!                          (u64 + MetricsCell)       (plain Copy struct)
//! ```
//!
//! `&self` operations such as `peek` count through [`cell::MetricsCell`],
//! which is atomic so shared readers behind a read lock can record safely.

pub mod cell;
pub mod metrics_impl;
pub mod snapshot;
pub mod traits;
