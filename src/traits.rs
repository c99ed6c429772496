//! # Cache Traits
//!
//! Uniform interface over the key-indexed caches in this crate.
//!
//! ```text
//!   ┌──────────────────────────────┐
//!   │    ReadOnlyCache<K, V>       │   contains / len / is_empty / capacity
//!   └──────────────┬───────────────┘
//!                  │
//!                  ▼
//!   ┌──────────────────────────────┐
//!   │      CoreCache<K, V>         │   insert / get / clear
//!   └──────────────────────────────┘
//!
//!   ConcurrentCache: marker, Send + Sync
//! ```
//!
//! There is no arbitrary-removal trait. Entries leave a cache only through
//! tail eviction or `clear`, so the key index and the list never disagree.
//!
//! ## Example Usage
//!
//! ```
//! use mrulist::policy::mru_cache::MruCache;
//! use mrulist::traits::{CoreCache, ReadOnlyCache};
//!
//! fn warm<C: CoreCache<u64, String>>(cache: &mut C, data: &[(u64, &str)]) {
//!     for (key, value) in data {
//!         cache.insert(*key, value.to_string());
//!     }
//! }
//!
//! let mut cache = MruCache::new(2);
//! warm(&mut cache, &[(1, "one"), (2, "two"), (3, "three")]);
//! assert_eq!(cache.len(), 2);
//! assert!(cache.contains(&1));
//! ```
//!
//! ## Thread Safety
//!
//! Implementations are single-threaded unless they also implement
//! [`ConcurrentCache`].

/// Read-only cache queries that never change eviction order.
pub trait ReadOnlyCache<K, V> {
    /// Checks if a key exists without promoting it.
    fn contains(&self, key: &K) -> bool;

    /// Returns the current number of entries.
    fn len(&self) -> usize;

    /// Returns `true` if the cache contains no entries.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the maximum number of entries.
    fn capacity(&self) -> usize;
}

/// Core cache operations.
///
/// # Example
///
/// ```
/// use mrulist::policy::mru_cache::MruCache;
/// use mrulist::traits::CoreCache;
///
/// let mut cache = MruCache::new(10);
///
/// // New key returns None
/// assert_eq!(CoreCache::insert(&mut cache, 1, "first"), None);
///
/// // Existing key returns previous value
/// assert_eq!(CoreCache::insert(&mut cache, 1, "second"), Some("first"));
/// assert_eq!(CoreCache::get(&mut cache, &1), Some(&"second"));
/// ```
pub trait CoreCache<K, V>: ReadOnlyCache<K, V> {
    /// Inserts a key-value pair, returning the previous value if it existed.
    ///
    /// If the cache is full and the key is new, an entry is evicted first
    /// according to the cache's policy.
    fn insert(&mut self, key: K, value: V) -> Option<V>;

    /// Gets a value by key, updating eviction order on a hit.
    fn get(&mut self, key: &K) -> Option<&V>;

    /// Removes all entries.
    fn clear(&mut self);
}

/// Marker for cache types that are safe to share across threads.
///
/// ```
/// # #[cfg(feature = "concurrency")]
/// # {
/// use mrulist::policy::mru_cache::ConcurrentMruCache;
/// use mrulist::traits::ConcurrentCache;
///
/// fn assert_shared<C: ConcurrentCache>(_: &C) {}
/// let cache: ConcurrentMruCache<u32, u32> = ConcurrentMruCache::new(8);
/// assert_shared(&cache);
/// # }
/// ```
pub trait ConcurrentCache: Send + Sync {}
