//! Builder for [`MruCache`] instances.
//!
//! ## Example
//!
//! ```rust
//! use mrulist::builder::MruCacheBuilder;
//!
//! let mut cache = MruCacheBuilder::new(100).build::<u64, String>();
//! cache.insert(1, "hello".to_string());
//! assert_eq!(cache.get(&1), Some(&"hello".to_string()));
//! ```

use std::hash::Hash;

use crate::error::ConfigError;
#[cfg(feature = "concurrency")]
use crate::policy::mru_cache::ConcurrentMruCache;
use crate::policy::mru_cache::MruCache;

/// Builder for creating cache instances.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MruCacheBuilder {
    capacity: usize,
    prealloc: bool,
}

impl MruCacheBuilder {
    /// Create a new cache builder with the specified capacity.
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            prealloc: true,
        }
    }

    /// Pre-size the key index and node arena to the full capacity (default
    /// `true`). Large, rarely filled caches can turn this off.
    pub fn prealloc(mut self, prealloc: bool) -> Self {
        self.prealloc = prealloc;
        self
    }

    /// Build a cache, rejecting an invalid configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the capacity is zero.
    ///
    /// # Example
    ///
    /// ```rust
    /// use mrulist::builder::MruCacheBuilder;
    ///
    /// assert!(MruCacheBuilder::new(0).try_build::<u64, u64>().is_err());
    ///
    /// let cache = MruCacheBuilder::new(8)
    ///     .prealloc(false)
    ///     .try_build::<u64, u64>()
    ///     .unwrap();
    /// assert_eq!(cache.capacity(), 8);
    /// ```
    pub fn try_build<K, V>(self) -> Result<MruCache<K, V>, ConfigError>
    where
        K: Clone + Eq + Hash,
    {
        MruCache::try_with_prealloc(self.capacity, self.prealloc)
    }

    /// Build a cache.
    ///
    /// # Panics
    ///
    /// Panics if the capacity is zero. See [`try_build`](Self::try_build).
    pub fn build<K, V>(self) -> MruCache<K, V>
    where
        K: Clone + Eq + Hash,
    {
        match self.try_build() {
            Ok(cache) => cache,
            Err(e) => panic!("{}", e),
        }
    }

    /// Build a cache shared behind a `parking_lot::RwLock`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the capacity is zero.
    #[cfg(feature = "concurrency")]
    pub fn try_build_concurrent<K, V>(self) -> Result<ConcurrentMruCache<K, V>, ConfigError>
    where
        K: Clone + Eq + Hash,
    {
        Ok(ConcurrentMruCache::from(self.try_build::<K, V>()?))
    }
}
