pub mod mru_list;
pub mod slot_arena;

#[cfg(feature = "concurrency")]
pub use mru_list::ConcurrentMruList;
pub use mru_list::{Entries, Iter, MruList};
pub use slot_arena::{SlotArena, SlotId};
