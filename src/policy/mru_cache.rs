//! Bounded key/value cache on top of [`MruList`].
//!
//! The list orders keys from root (kept) to last (evicted next); a separate
//! `FxHashMap` maps each key to its value and list node, so a hit promotes in
//! O(1) instead of scanning with [`MruList::find`].
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                         MruCache<K, V> Layout                       │
//! │                                                                     │
//! │   index: FxHashMap<K, Entry<V>>          list: MruList<K>           │
//! │                                                                     │
//! │   ┌──────────┬───────────────────┐                                  │
//! │   │   Key    │ Entry             │       root                last   │
//! │   ├──────────┼───────────────────┤        │                   │     │
//! │   │  "a"     │ { value, node #0 }│──────► [#0 a] ◄─► [#1 b] ◄─► [#2 c]
//! │   │  "b"     │ { value, node #1 }│──────────────────►  ▲          ▲  │
//! │   │  "c"     │ { value, node #2 }│─────────────────────┼──────────┘  │
//! │   └──────────┴───────────────────┘                     │             │
//! │                                                                     │
//! │   • New keys are appended at last                                   │
//! │   • A hit swaps the key with its predecessor (one step)             │
//! │   • A full cache evicts last before appending                       │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Insert Flow (new key)
//! ──────────────────────
//!
//! ```text
//!   insert("k", v):
//!     1. index miss
//!     2. list.insert("k") → (node, evicted)
//!     3. evicted key? remove it from the index
//!     4. index["k"] = Entry { v, node }
//! ```
//!
//! Access Flow
//! ───────────
//!
//! ```text
//!   get("k"):
//!     1. index lookup → node
//!     2. list.promote(node)   (one step toward root)
//!     3. return &value
//! ```
//!
//! ## Operations
//!
//! | Operation     | Time | Notes                                     |
//! |---------------|------|-------------------------------------------|
//! | `insert`      | O(1) | May evict the tail                        |
//! | `get`         | O(1) | Promotes one step                         |
//! | `peek`        | O(1) | No promotion                              |
//! | `contains`    | O(1) | No promotion                              |
//! | `pop_last`    | O(1) | Explicit tail eviction                    |
//! | `keys`/`iter` | O(n) | Root to last                              |
//!
//! ## Example Usage
//!
//! ```
//! use mrulist::policy::mru_cache::MruCache;
//!
//! let mut cache = MruCache::new(3);
//! cache.insert("a", 1);
//! cache.insert("b", 2);
//! cache.insert("c", 3);
//!
//! // "c" steps past "b"; "b" is now the eviction candidate.
//! assert_eq!(cache.get(&"c"), Some(&3));
//! cache.insert("d", 4);
//!
//! assert!(!cache.contains(&"b"));
//! assert_eq!(cache.keys().copied().collect::<Vec<_>>(), vec!["a", "c", "d"]);
//! ```
//!
//! ## Thread Safety
//!
//! - [`MruCache`]: single-threaded.
//! - [`ConcurrentMruCache`] (feature `concurrency`): one `parking_lot::RwLock`
//!   around the whole cache.

#[cfg(feature = "concurrency")]
use std::sync::Arc;

use std::hash::Hash;

#[cfg(feature = "concurrency")]
use parking_lot::RwLock;
use rustc_hash::FxHashMap;

use crate::ds::{MruList, SlotId};
use crate::error::{ConfigError, InvariantError};
#[cfg(feature = "metrics")]
use crate::metrics::metrics_impl::MruMetrics;
#[cfg(feature = "metrics")]
use crate::metrics::snapshot::MruMetricsSnapshot;
#[cfg(feature = "metrics")]
use crate::metrics::traits::{
    CoreMetricsRecorder, MetricsReset, MetricsSnapshotProvider, MruMetricsReadRecorder,
    MruMetricsRecorder,
};
#[cfg(feature = "concurrency")]
use crate::traits::ConcurrentCache;
use crate::traits::{CoreCache, ReadOnlyCache};

#[derive(Debug)]
struct Entry<V> {
    value: V,
    node: SlotId,
}

/// Key-indexed cache with single-step promotion and tail eviction.
///
/// # Type Parameters
///
/// - `K`: key type, `Clone + Eq + Hash` (one copy lives in the list, one in
///   the index)
/// - `V`: value type
///
/// # Example
///
/// ```
/// use mrulist::policy::mru_cache::MruCache;
///
/// let mut cache = MruCache::new(2);
/// assert_eq!(cache.insert("key", "v1"), None);
/// assert_eq!(cache.insert("key", "v2"), Some("v1"));
/// assert_eq!(cache.len(), 1);
/// ```
pub struct MruCache<K, V>
where
    K: Clone + Eq + Hash,
{
    index: FxHashMap<K, Entry<V>>,
    list: MruList<K>,

    #[cfg(feature = "metrics")]
    metrics: MruMetrics,
}

impl<K, V> MruCache<K, V>
where
    K: Clone + Eq + Hash,
{
    /// Creates a cache holding at most `capacity` entries.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is zero. See [`try_new`](Self::try_new).
    ///
    /// # Example
    ///
    /// ```
    /// use mrulist::policy::mru_cache::MruCache;
    ///
    /// let cache: MruCache<String, i32> = MruCache::new(100);
    /// assert_eq!(cache.capacity(), 100);
    /// assert!(cache.is_empty());
    /// ```
    pub fn new(capacity: usize) -> Self {
        match Self::try_new(capacity) {
            Ok(cache) => cache,
            Err(e) => panic!("{}", e),
        }
    }

    /// Creates a cache, returning an error on a zero capacity.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if `capacity` is zero.
    pub fn try_new(capacity: usize) -> Result<Self, ConfigError> {
        Self::try_with_prealloc(capacity, true)
    }

    pub(crate) fn try_with_prealloc(capacity: usize, prealloc: bool) -> Result<Self, ConfigError> {
        if capacity == 0 {
            return Err(ConfigError::new("cache capacity must be greater than zero"));
        }
        let index = if prealloc {
            FxHashMap::with_capacity_and_hasher(capacity, Default::default())
        } else {
            FxHashMap::default()
        };
        Ok(Self {
            index,
            list: MruList::try_with_prealloc(capacity, prealloc)?,
            #[cfg(feature = "metrics")]
            metrics: MruMetrics::default(),
        })
    }

    /// Retrieves a value and promotes its entry one step toward the root.
    ///
    /// # Example
    ///
    /// ```
    /// use mrulist::policy::mru_cache::MruCache;
    ///
    /// let mut cache = MruCache::new(4);
    /// cache.insert(1, "one");
    /// cache.insert(2, "two");
    ///
    /// assert_eq!(cache.get(&2), Some(&"two"));
    /// assert_eq!(cache.peek_root(), Some((&2, &"two")));
    /// assert_eq!(cache.get(&9), None);
    /// ```
    pub fn get(&mut self, key: &K) -> Option<&V> {
        let Some(entry) = self.index.get(key) else {
            #[cfg(feature = "metrics")]
            self.metrics.record_get_miss();
            return None;
        };

        #[cfg(feature = "metrics")]
        self.metrics.record_get_hit();

        let _moved = self.list.promote(entry.node);

        #[cfg(feature = "metrics")]
        {
            if _moved {
                self.metrics.record_promotion();
            } else {
                self.metrics.record_promotion_at_root();
            }
        }

        Some(&entry.value)
    }

    /// Returns a value without promoting it.
    pub fn peek(&self, key: &K) -> Option<&V> {
        #[cfg(feature = "metrics")]
        self.metrics.record_peek_call();

        let value = self.index.get(key).map(|entry| &entry.value);

        #[cfg(feature = "metrics")]
        {
            if value.is_some() {
                self.metrics.record_peek_found();
            }
        }

        value
    }

    /// Inserts or updates a key-value pair.
    ///
    /// - Existing key: the value is replaced in place and the old value is
    ///   returned; the entry keeps its position.
    /// - New key: appended at the tail; if the cache is full the current tail
    ///   is evicted first and its key leaves the index.
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        #[cfg(feature = "metrics")]
        self.metrics.record_insert_call();

        if let Some(entry) = self.index.get_mut(&key) {
            #[cfg(feature = "metrics")]
            self.metrics.record_insert_update();
            return Some(std::mem::replace(&mut entry.value, value));
        }

        #[cfg(feature = "metrics")]
        self.metrics.record_insert_new();

        let (node, evicted) = self.list.insert(key.clone());
        if let Some(evicted_key) = evicted {
            self.index.remove(&evicted_key);
            #[cfg(feature = "metrics")]
            self.metrics.record_evicted_entry();
            log::trace!("mru cache evicted tail entry, len={}", self.list.len());
        }
        self.index.insert(key, Entry { value, node });

        debug_assert_eq!(self.index.len(), self.list.len());
        None
    }

    /// Evicts the tail entry explicitly.
    ///
    /// ```
    /// use mrulist::policy::mru_cache::MruCache;
    ///
    /// let mut cache = MruCache::new(3);
    /// cache.insert("a", 1);
    /// cache.insert("b", 2);
    /// assert_eq!(cache.pop_last(), Some(("b", 2)));
    /// assert_eq!(cache.len(), 1);
    /// ```
    pub fn pop_last(&mut self) -> Option<(K, V)> {
        let key = self.list.evict_last()?;
        let entry = self.index.remove(&key)?;

        #[cfg(feature = "metrics")]
        self.metrics.record_evicted_entry();

        Some((key, entry.value))
    }

    /// Returns the root entry (furthest from eviction) without promoting.
    pub fn peek_root(&self) -> Option<(&K, &V)> {
        let key = self.list.root()?;
        self.index.get(key).map(|entry| (key, &entry.value))
    }

    /// Returns the tail entry (next to be evicted) without promoting.
    pub fn peek_last(&self) -> Option<(&K, &V)> {
        let key = self.list.last()?;
        self.index.get(key).map(|entry| (key, &entry.value))
    }

    /// Keys from root to last.
    pub fn keys(&self) -> impl DoubleEndedIterator<Item = &K> + '_ {
        self.list.iter()
    }

    /// Entries from root to last.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = (&K, &V)> + '_ {
        self.list
            .iter()
            .filter_map(|key| self.index.get(key).map(|entry| (key, &entry.value)))
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.index.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.list.capacity()
    }

    /// Returns `true` if the key exists; does not promote.
    #[inline]
    pub fn contains(&self, key: &K) -> bool {
        self.index.contains_key(key)
    }

    pub fn clear(&mut self) {
        #[cfg(feature = "metrics")]
        self.metrics.record_clear();

        self.index.clear();
        self.list.clear();
    }

    /// Validates the list structure and its agreement with the index.
    ///
    /// Checks that:
    /// - the list passes [`MruList::check_invariants`]
    /// - the index and the list hold the same number of entries
    /// - every key in the list maps back to the node holding it
    pub fn check_invariants(&self) -> Result<(), InvariantError> {
        self.list.check_invariants()?;

        if self.index.len() != self.list.len() {
            return Err(InvariantError::new(format!(
                "index holds {} keys, list holds {}",
                self.index.len(),
                self.list.len()
            )));
        }

        for (node, key) in self.list.iter_entries() {
            match self.index.get(key) {
                Some(entry) if entry.node == node => {},
                Some(entry) => {
                    return Err(InvariantError::new(format!(
                        "index points at {} for a key stored in {node}",
                        entry.node
                    )));
                },
                None => {
                    return Err(InvariantError::new(format!(
                        "key stored in {node} is missing from the index"
                    )));
                },
            }
        }
        Ok(())
    }
}

impl<K, V> std::fmt::Debug for MruCache<K, V>
where
    K: Clone + Eq + Hash + std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MruCache")
            .field("capacity", &self.capacity())
            .field("len", &self.len())
            .field("keys", &self.list)
            .finish_non_exhaustive()
    }
}

impl<K, V> ReadOnlyCache<K, V> for MruCache<K, V>
where
    K: Clone + Eq + Hash,
{
    #[inline]
    fn contains(&self, key: &K) -> bool {
        self.index.contains_key(key)
    }

    #[inline]
    fn len(&self) -> usize {
        self.index.len()
    }

    #[inline]
    fn capacity(&self) -> usize {
        self.list.capacity()
    }
}

impl<K, V> CoreCache<K, V> for MruCache<K, V>
where
    K: Clone + Eq + Hash,
{
    #[inline]
    fn insert(&mut self, key: K, value: V) -> Option<V> {
        MruCache::insert(self, key, value)
    }

    #[inline]
    fn get(&mut self, key: &K) -> Option<&V> {
        MruCache::get(self, key)
    }

    fn clear(&mut self) {
        MruCache::clear(self);
    }
}

#[cfg(feature = "metrics")]
impl<K, V> MruCache<K, V>
where
    K: Clone + Eq + Hash,
{
    /// Returns a snapshot of cache metrics.
    pub fn metrics_snapshot(&self) -> MruMetricsSnapshot {
        MruMetricsSnapshot {
            get_calls: self.metrics.get_calls,
            get_hits: self.metrics.get_hits,
            get_misses: self.metrics.get_misses,
            insert_calls: self.metrics.insert_calls,
            insert_updates: self.metrics.insert_updates,
            insert_new: self.metrics.insert_new,
            evicted_entries: self.metrics.evicted_entries,
            clears: self.metrics.clears,
            promotions: self.metrics.promotions,
            promotions_at_root: self.metrics.promotions_at_root,
            peek_calls: self.metrics.peek_calls.get(),
            peek_found: self.metrics.peek_found.get(),
            cache_len: self.len(),
            capacity: self.capacity(),
        }
    }

    pub fn reset_metrics(&mut self) {
        self.metrics.reset_metrics();
    }
}

#[cfg(feature = "metrics")]
impl<K, V> MetricsSnapshotProvider<MruMetricsSnapshot> for MruCache<K, V>
where
    K: Clone + Eq + Hash,
{
    fn snapshot(&self) -> MruMetricsSnapshot {
        self.metrics_snapshot()
    }
}

// ---------------------------------------------------------------------------
// ConcurrentMruCache
// ---------------------------------------------------------------------------

/// Shared [`MruCache`] behind a single `parking_lot::RwLock`.
///
/// `get` promotes and therefore takes the write lock; `peek`, `contains` and
/// `len` take the read lock. Values leave the lock through closures or
/// clones.
///
/// ```
/// use std::thread;
/// use mrulist::policy::mru_cache::ConcurrentMruCache;
///
/// let cache = ConcurrentMruCache::new(64);
/// let handles: Vec<_> = (0..4u64)
///     .map(|t| {
///         let cache = cache.clone();
///         thread::spawn(move || {
///             for i in 0..16 {
///                 cache.insert(t * 100 + i, i);
///             }
///         })
///     })
///     .collect();
/// for h in handles {
///     h.join().unwrap();
/// }
/// assert_eq!(cache.len(), 64);
/// ```
#[cfg(feature = "concurrency")]
pub struct ConcurrentMruCache<K, V>
where
    K: Clone + Eq + Hash,
{
    inner: Arc<RwLock<MruCache<K, V>>>,
}

#[cfg(feature = "concurrency")]
impl<K, V> Clone for ConcurrentMruCache<K, V>
where
    K: Clone + Eq + Hash,
{
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

#[cfg(feature = "concurrency")]
impl<K, V> ConcurrentMruCache<K, V>
where
    K: Clone + Eq + Hash,
{
    /// # Panics
    ///
    /// Panics if `capacity` is zero.
    pub fn new(capacity: usize) -> Self {
        Self::from(MruCache::new(capacity))
    }

    pub fn try_new(capacity: usize) -> Result<Self, ConfigError> {
        Ok(Self::from(MruCache::try_new(capacity)?))
    }

    pub fn insert(&self, key: K, value: V) -> Option<V> {
        self.inner.write().insert(key, value)
    }

    /// Promotes `key` and runs `f` on its value.
    pub fn get_with<R>(&self, key: &K, f: impl FnOnce(&V) -> R) -> Option<R> {
        let mut cache = self.inner.write();
        cache.get(key).map(f)
    }

    /// Promotes `key` and returns a clone of its value.
    pub fn get(&self, key: &K) -> Option<V>
    where
        V: Clone,
    {
        self.get_with(key, V::clone)
    }

    /// Tries to promote `key` without blocking; `None` if the lock is busy.
    pub fn try_get_with<R>(&self, key: &K, f: impl FnOnce(&V) -> R) -> Option<Option<R>> {
        let mut cache = self.inner.try_write()?;
        Some(cache.get(key).map(f))
    }

    /// Runs `f` on the value for `key` without promoting it.
    pub fn peek_with<R>(&self, key: &K, f: impl FnOnce(&V) -> R) -> Option<R> {
        let cache = self.inner.read();
        cache.peek(key).map(f)
    }

    pub fn pop_last(&self) -> Option<(K, V)> {
        self.inner.write().pop_last()
    }

    pub fn contains(&self, key: &K) -> bool {
        self.inner.read().contains(key)
    }

    pub fn len(&self) -> usize {
        self.inner.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.read().is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.inner.read().capacity()
    }

    pub fn clear(&self) {
        self.inner.write().clear();
    }

    /// Copies the keys from root to last under one read lock.
    pub fn keys(&self) -> Vec<K> {
        self.inner.read().keys().cloned().collect()
    }

    pub fn check_invariants(&self) -> Result<(), InvariantError> {
        self.inner.read().check_invariants()
    }

    #[cfg(feature = "metrics")]
    pub fn metrics_snapshot(&self) -> MruMetricsSnapshot {
        self.inner.read().metrics_snapshot()
    }
}

#[cfg(feature = "concurrency")]
impl<K, V> From<MruCache<K, V>> for ConcurrentMruCache<K, V>
where
    K: Clone + Eq + Hash,
{
    fn from(cache: MruCache<K, V>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(cache)),
        }
    }
}

#[cfg(feature = "concurrency")]
impl<K, V> std::fmt::Debug for ConcurrentMruCache<K, V>
where
    K: Clone + Eq + Hash,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let cache = self.inner.read();
        f.debug_struct("ConcurrentMruCache")
            .field("capacity", &cache.capacity())
            .field("len", &cache.len())
            .finish_non_exhaustive()
    }
}

#[cfg(feature = "concurrency")]
impl<K, V> ConcurrentCache for ConcurrentMruCache<K, V>
where
    K: Clone + Eq + Hash + Send + Sync,
    V: Send + Sync,
{
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==============================================
    // MruCache Basic Operations
    // ==============================================

    mod basic_operations {
        use super::*;

        #[test]
        fn new_cache_is_empty() {
            let cache: MruCache<&str, i32> = MruCache::new(100);
            assert!(cache.is_empty());
            assert_eq!(cache.len(), 0);
            assert_eq!(cache.capacity(), 100);
            assert_eq!(cache.peek_root(), None);
            assert_eq!(cache.peek_last(), None);
        }

        #[test]
        fn try_new_rejects_zero_capacity() {
            let err = MruCache::<&str, i32>::try_new(0).unwrap_err();
            assert_eq!(err.message(), "cache capacity must be greater than zero");
        }

        #[test]
        #[should_panic(expected = "capacity must be greater than zero")]
        fn new_panics_on_zero_capacity() {
            let _ = MruCache::<&str, i32>::new(0);
        }

        #[test]
        fn insert_and_get() {
            let mut cache = MruCache::new(10);
            cache.insert("key1", "value1");
            assert_eq!(cache.len(), 1);
            assert_eq!(cache.get(&"key1"), Some(&"value1"));
        }

        #[test]
        fn get_missing_key_returns_none() {
            let mut cache: MruCache<&str, i32> = MruCache::new(10);
            cache.insert("exists", 42);
            assert_eq!(cache.get(&"missing"), None);
        }

        #[test]
        fn update_existing_key_keeps_position() {
            let mut cache = MruCache::new(10);
            cache.insert("a", 1);
            cache.insert("b", 2);
            assert_eq!(cache.insert("a", 10), Some(1));

            assert_eq!(cache.len(), 2);
            assert_eq!(cache.keys().copied().collect::<Vec<_>>(), vec!["a", "b"]);
            assert_eq!(cache.peek(&"a"), Some(&10));
            cache.check_invariants().unwrap();
        }

        #[test]
        fn peek_and_contains_do_not_promote() {
            let mut cache = MruCache::new(10);
            cache.insert(1, "one");
            cache.insert(2, "two");
            assert_eq!(cache.peek(&2), Some(&"two"));
            assert!(cache.contains(&2));
            assert_eq!(cache.peek_root(), Some((&1, &"one")));
            assert_eq!(cache.peek_last(), Some((&2, &"two")));
        }

        #[test]
        fn clear_removes_all_entries() {
            let mut cache = MruCache::new(10);
            cache.insert("a", 1);
            cache.insert("b", 2);
            cache.clear();
            assert!(cache.is_empty());
            assert!(!cache.contains(&"a"));
            assert_eq!(cache.keys().count(), 0);
            cache.check_invariants().unwrap();
        }

        #[test]
        fn iter_follows_list_order() {
            let mut cache = MruCache::new(3);
            cache.insert('x', 1);
            cache.insert('y', 2);
            cache.insert('z', 3);
            cache.get(&'z');
            let entries: Vec<_> = cache.iter().map(|(k, v)| (*k, *v)).collect();
            assert_eq!(entries, vec![('x', 1), ('z', 3), ('y', 2)]);
            let reversed: Vec<_> = cache.keys().rev().copied().collect();
            assert_eq!(reversed, vec!['y', 'z', 'x']);
        }
    }

    // ==============================================
    // Promotion Behavior (one step per hit)
    // ==============================================

    mod promotion_behavior {
        use super::*;

        fn keys(cache: &MruCache<u32, u32>) -> Vec<u32> {
            cache.keys().copied().collect()
        }

        #[test]
        fn hit_moves_one_step() {
            let mut cache = MruCache::new(5);
            for k in 1..=4 {
                cache.insert(k, k * 10);
            }
            cache.get(&4);
            assert_eq!(keys(&cache), vec![1, 2, 4, 3]);
            cache.get(&4);
            assert_eq!(keys(&cache), vec![1, 4, 2, 3]);
            cache.get(&4);
            assert_eq!(keys(&cache), vec![4, 1, 2, 3]);
            cache.get(&4);
            assert_eq!(keys(&cache), vec![4, 1, 2, 3]);
            cache.check_invariants().unwrap();
        }

        #[test]
        fn promoted_entry_survives_next_eviction() {
            let mut cache = MruCache::new(3);
            cache.insert(1, 1);
            cache.insert(2, 2);
            cache.insert(3, 3);
            cache.get(&3);

            cache.insert(4, 4);
            assert!(cache.contains(&3));
            assert!(!cache.contains(&2));
        }

        #[test]
        fn trait_get_promotes_too() {
            let mut cache: MruCache<u32, u32> = MruCache::new(3);
            cache.insert(1, 1);
            cache.insert(2, 2);
            assert_eq!(CoreCache::get(&mut cache, &2), Some(&2));
            assert_eq!(keys(&cache), vec![2, 1]);
        }
    }

    // ==============================================
    // Eviction Behavior
    // ==============================================

    mod eviction_behavior {
        use super::*;

        #[test]
        fn eviction_keeps_len_at_capacity() {
            let mut cache = MruCache::new(5);
            for i in 0..10 {
                cache.insert(i, i * 10);
                assert!(cache.len() <= 5);
            }
            assert_eq!(cache.len(), 5);
            cache.check_invariants().unwrap();
        }

        #[test]
        fn evicted_key_leaves_index() {
            let mut cache = MruCache::new(3);
            cache.insert("a", 1);
            cache.insert("b", 2);
            cache.insert("c", 3);
            cache.insert("d", 4);

            assert!(!cache.contains(&"c"));
            assert_eq!(cache.get(&"c"), None);
            assert!(cache.contains(&"a"));
        }

        #[test]
        fn pop_last_returns_tail_entry() {
            let mut cache = MruCache::new(3);
            cache.insert(1, "one");
            cache.insert(2, "two");
            cache.get(&2);
            assert_eq!(cache.pop_last(), Some((1, "one")));
            assert_eq!(cache.pop_last(), Some((2, "two")));
            assert_eq!(cache.pop_last(), None);
            cache.check_invariants().unwrap();
        }

        #[test]
        fn single_capacity_cache() {
            let mut cache = MruCache::new(1);
            cache.insert("a", 1);
            assert_eq!(cache.get(&"a"), Some(&1));

            cache.insert("b", 2);
            assert!(!cache.contains(&"a"));
            assert_eq!(cache.get(&"b"), Some(&2));
            cache.check_invariants().unwrap();
        }
    }

    // ==============================================
    // End-to-end scenario
    // ==============================================

    #[test]
    fn bounded_cache_scenario() {
        let mut cache = MruCache::new(4);
        cache.insert("1".to_string(), "one".to_string());
        cache.insert("2".to_string(), "two".to_string());
        cache.insert("3".to_string(), "three".to_string());
        cache.insert("4".to_string(), "four".to_string());

        // Full: the tail ("4") makes room for "5".
        cache.insert("5".to_string(), "five".to_string());
        assert!(!cache.contains(&"4".to_string()));

        assert_eq!(cache.get(&"5".to_string()).map(String::as_str), Some("five"));

        // "5" stepped past "3", so "3" is evicted next.
        cache.insert("6".to_string(), "six".to_string());

        assert_eq!(cache.len(), 4);
        assert!(!cache.contains(&"3".to_string()));
        assert!(!cache.contains(&"4".to_string()));
        assert_eq!(
            cache.keys().map(String::as_str).collect::<Vec<_>>(),
            vec!["1", "2", "5", "6"]
        );
        cache.check_invariants().unwrap();
    }

    #[test]
    fn debug_output_names_keys() {
        let mut cache = MruCache::new(2);
        cache.insert("k", 1);
        let dbg = format!("{:?}", cache);
        assert!(dbg.contains("MruCache"));
        assert!(dbg.contains("\"k\""));
    }

    #[cfg(feature = "metrics")]
    mod metrics {
        use super::*;

        #[test]
        fn counters_track_operations() {
            let mut cache = MruCache::new(2);
            cache.insert(1, 1);
            cache.insert(2, 2);
            cache.insert(2, 20);
            cache.insert(3, 3);
            cache.get(&3);
            cache.get(&3);
            cache.get(&99);
            cache.peek(&1);
            cache.peek(&2);

            let snap = cache.metrics_snapshot();
            assert_eq!(snap.insert_calls, 4);
            assert_eq!(snap.insert_new, 3);
            assert_eq!(snap.insert_updates, 1);
            assert_eq!(snap.evicted_entries, 1);
            assert_eq!(snap.get_hits, 2);
            assert_eq!(snap.get_misses, 1);
            assert_eq!(snap.promotions, 1);
            assert_eq!(snap.promotions_at_root, 1);
            assert_eq!(snap.peek_calls, 2);
            assert_eq!(snap.peek_found, 1);
            assert_eq!(snap.cache_len, 2);
            assert_eq!(snap.capacity, 2);

            cache.reset_metrics();
            assert_eq!(cache.snapshot().get_calls, 0);
        }
    }

    #[cfg(feature = "concurrency")]
    mod concurrent {
        use super::*;

        #[test]
        fn shared_handles_see_same_entries() {
            let cache = ConcurrentMruCache::new(3);
            let other = cache.clone();
            cache.insert("a", 1);
            other.insert("b", 2);

            assert_eq!(cache.get(&"b"), Some(2));
            assert_eq!(other.keys(), vec!["b", "a"]);
            assert_eq!(cache.peek_with(&"a", |v| v * 10), Some(10));
            assert_eq!(cache.try_get_with(&"a", |v| *v), Some(Some(1)));
            assert_eq!(cache.pop_last(), Some(("b", 2)));
            assert!(cache.check_invariants().is_ok());
            assert!(ConcurrentMruCache::<u8, u8>::try_new(0).is_err());
        }
    }
}
