//! Error types for mrulist.
//!
//! ## Key Components
//!
//! - [`ConfigError`]: Returned by fallible constructors when a capacity or
//!   builder setting is unusable (the only rejected input is a zero capacity).
//! - [`InvariantError`]: Returned by [`MruList::check_invariants`] when the
//!   linked structure is inconsistent.
//!
//! Every other operation in the crate is total: misses, no-op promotions and
//! evictions from an empty list are ordinary `None`/`false` results.
//!
//! ## Example Usage
//!
//! ```
//! use mrulist::ds::MruList;
//! use mrulist::error::ConfigError;
//!
//! let list: Result<MruList<u32>, ConfigError> = MruList::try_new(8);
//! assert!(list.is_ok());
//!
//! let bad = MruList::<u32>::try_new(0);
//! assert!(bad.unwrap_err().to_string().contains("capacity"));
//! ```
//!
//! [`MruList::check_invariants`]: crate::ds::MruList::check_invariants

use std::fmt;

// ---------------------------------------------------------------------------
// ConfigError
// ---------------------------------------------------------------------------

/// Error returned when construction parameters are invalid.
///
/// Produced by [`MruList::try_new`](crate::ds::MruList::try_new),
/// [`MruCache::try_new`](crate::policy::mru_cache::MruCache::try_new) and
/// [`MruCacheBuilder::try_build`](crate::builder::MruCacheBuilder::try_build).
///
/// # Example
///
/// ```
/// use mrulist::policy::mru_cache::MruCache;
///
/// let err = MruCache::<u64, u64>::try_new(0).unwrap_err();
/// assert!(err.to_string().contains("capacity"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigError(String);

impl ConfigError {
    #[inline]
    pub fn new(msg: impl Into<String>) -> Self {
        Self(msg.into())
    }

    /// Returns the error description.
    #[inline]
    pub fn message(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::error::Error for ConfigError {}

// ---------------------------------------------------------------------------
// InvariantError
// ---------------------------------------------------------------------------

/// Error describing which structural invariant of a list failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantError(String);

impl InvariantError {
    #[inline]
    pub fn new(msg: impl Into<String>) -> Self {
        Self(msg.into())
    }

    /// Returns the error description.
    #[inline]
    pub fn message(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for InvariantError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::error::Error for InvariantError {}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
