//! mrulist: a capacity-bounded doubly-linked list with single-step promotion,
//! and a key-indexed cache built on it.
//!
//! - [`ds::MruList`]: arena-backed list; inserts append at the tail, a full
//!   list evicts its tail, an access swaps a node with its predecessor.
//! - [`policy::mru_cache::MruCache`]: `FxHashMap` index from key to list node.
//! - [`builder::MruCacheBuilder`]: fallible configuration.
//!
//! Feature `concurrency` adds `parking_lot`-guarded wrappers; feature
//! `metrics` adds operation counters to the cache.

pub mod builder;
pub mod ds;
pub mod error;
pub mod policy;

#[cfg(feature = "metrics")]
pub mod metrics;

pub mod prelude;
pub mod traits;
