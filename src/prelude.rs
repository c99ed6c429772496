pub use crate::builder::MruCacheBuilder;
pub use crate::ds::{MruList, SlotArena, SlotId};
pub use crate::error::{ConfigError, InvariantError};
pub use crate::policy::mru_cache::MruCache;
pub use crate::traits::{CoreCache, ReadOnlyCache};

#[cfg(feature = "concurrency")]
pub use crate::ds::ConcurrentMruList;
#[cfg(feature = "metrics")]
pub use crate::metrics::snapshot::MruMetricsSnapshot;
#[cfg(feature = "concurrency")]
pub use crate::policy::mru_cache::ConcurrentMruCache;
#[cfg(feature = "concurrency")]
pub use crate::traits::ConcurrentCache;
