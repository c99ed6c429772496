//! Bounded doubly linked list with single-step promotion, backed by `SlotArena`.
//!
//! Nodes are stored in a [`SlotArena`] and linked by [`SlotId`], so a "node
//! reference" is a copyable index instead of a pointer. The list is bounded:
//! once `len == capacity`, every insert first evicts the current tail.
//!
//! ## Architecture
//!
//! ```text
//!   arena (SlotArena<Node<T>>)
//!   ┌────────┬──────────────────────────────────────────────┐
//!   │ SlotId │ Node { value, prev, next }                   │
//!   ├────────┼──────────────────────────────────────────────┤
//!   │ #0     │ { value: A, prev: None,     next: Some(#1) } │
//!   │ #1     │ { value: B, prev: Some(#0), next: Some(#2) } │
//!   │ #2     │ { value: C, prev: Some(#1), next: None }     │
//!   └────────┴──────────────────────────────────────────────┘
//!
//!   root ─► [#0] ◄──► [#1] ◄──► [#2] ◄── last
//!           kept                 evicted next
//! ```
//!
//! ## Operations
//!
//! | Operation        | Time   | Notes                                       |
//! |------------------|--------|---------------------------------------------|
//! | `insert`         | O(1)   | Appends after `last`; evicts `last` if full |
//! | `evict_last`     | O(1)   | Removes the tail                            |
//! | `promote`        | O(1)   | Swaps a node with its predecessor           |
//! | `find`           | O(n)   | Equality scan from root, promotes the hit   |
//! | `root` / `last`  | O(1)   | Peek without side effects                   |
//! | `iter`           | O(n)   | Double-ended: root→last, `.rev()` last→root |
//!
//! ## Promotion
//!
//! Promotion moves a node exactly one position toward the root per access:
//!
//! ```text
//!   [1, 2, 3]  promote(3)  →  [1, 3, 2]
//!   [1, 3, 2]  promote(3)  →  [3, 1, 2]
//!   [3, 1, 2]  promote(3)  →  [3, 1, 2]   (already root, no-op)
//! ```
//!
//! An entry has to be accessed repeatedly to walk all the way to the root.
//! This is not move-to-front.
//!
//! ## Example Usage
//!
//! ```
//! use mrulist::ds::MruList;
//!
//! let mut list = MruList::new(3);
//! list.insert(1);
//! list.insert(2);
//! let (three, evicted) = list.insert(3);
//! assert_eq!(evicted, None);
//!
//! assert!(list.promote(three));
//! assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![1, 3, 2]);
//!
//! // Full: the tail (2) makes room for 4.
//! let (_, evicted) = list.insert(4);
//! assert_eq!(evicted, Some(2));
//! assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![1, 3, 4]);
//! ```
//!
//! ## Thread Safety
//!
//! [`MruList`] is single-threaded; every mutation is a multi-step relink. With
//! the `concurrency` feature, [`ConcurrentMruList`] holds one lock for the
//! whole call.
use std::borrow::Borrow;
use std::fmt;
use std::io;
use std::iter::FusedIterator;

#[cfg(feature = "concurrency")]
use parking_lot::RwLock;

use crate::ds::slot_arena::{SlotArena, SlotId};
use crate::error::{ConfigError, InvariantError};

#[derive(Debug)]
struct Node<T> {
    value: T,
    prev: Option<SlotId>,
    next: Option<SlotId>,
}

/// Capacity-bounded list ordered from `root` (head) to `last` (tail).
///
/// Inserts append at `last`, evictions remove `last`, and [`promote`]
/// exchanges a node with its predecessor.
///
/// [`promote`]: MruList::promote
pub struct MruList<T> {
    arena: SlotArena<Node<T>>,
    root: Option<SlotId>,
    last: Option<SlotId>,
    capacity: usize,
}

impl<T> MruList<T> {
    /// Creates an empty list holding at most `capacity` nodes.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is zero. See [`try_new`](Self::try_new).
    pub fn new(capacity: usize) -> Self {
        match Self::try_new(capacity) {
            Ok(list) => list,
            Err(e) => panic!("{}", e),
        }
    }

    /// Creates an empty list, rejecting a zero capacity.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if `capacity` is zero.
    pub fn try_new(capacity: usize) -> Result<Self, ConfigError> {
        Self::try_with_prealloc(capacity, true)
    }

    /// Like [`try_new`](Self::try_new); `prealloc = false` leaves the arena
    /// empty until the first insert.
    pub fn try_with_prealloc(capacity: usize, prealloc: bool) -> Result<Self, ConfigError> {
        if capacity == 0 {
            return Err(ConfigError::new("list capacity must be greater than zero"));
        }
        log::debug!("mru list created: capacity={capacity}, prealloc={prealloc}");
        let arena = if prealloc {
            SlotArena::with_capacity(capacity)
        } else {
            SlotArena::new()
        };
        Ok(Self {
            arena,
            root: None,
            last: None,
            capacity,
        })
    }

    /// Returns the number of nodes in the list.
    #[inline]
    pub fn len(&self) -> usize {
        self.arena.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.arena.is_empty()
    }

    /// Returns `true` when the next insert will evict the tail.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.len() == self.capacity
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns `true` if `id` is a live node of this list.
    #[inline]
    pub fn contains(&self, id: SlotId) -> bool {
        self.arena.contains(id)
    }

    /// Returns the payload at the root (head), if any.
    pub fn root(&self) -> Option<&T> {
        self.root.and_then(|id| self.get(id))
    }

    /// Returns the root's `SlotId`.
    #[inline]
    pub fn root_id(&self) -> Option<SlotId> {
        self.root
    }

    /// Returns the payload at the tail, i.e. the next eviction candidate.
    pub fn last(&self) -> Option<&T> {
        self.last.and_then(|id| self.get(id))
    }

    /// Returns the tail's `SlotId`.
    #[inline]
    pub fn last_id(&self) -> Option<SlotId> {
        self.last
    }

    pub fn get(&self, id: SlotId) -> Option<&T> {
        self.arena.get(id).map(|node| &node.value)
    }

    pub fn get_mut(&mut self, id: SlotId) -> Option<&mut T> {
        self.arena.get_mut(id).map(|node| &mut node.value)
    }

    /// Returns the id of the node one step closer to the root.
    pub fn prev_id(&self, id: SlotId) -> Option<SlotId> {
        self.arena.get(id).and_then(|node| node.prev)
    }

    /// Returns the id of the node one step closer to the tail.
    pub fn next_id(&self, id: SlotId) -> Option<SlotId> {
        self.arena.get(id).and_then(|node| node.next)
    }

    /// Appends `value` after the tail.
    ///
    /// Returns the new node's id and, if the list was full, the payload that
    /// was evicted from the tail to make room. Callers keeping a side index
    /// keyed by payload should purge the evicted entry. The evicted node's
    /// slot is reused, so the returned id may equal the evicted node's id.
    pub fn insert(&mut self, value: T) -> (SlotId, Option<T>) {
        let evicted = if self.is_full() {
            self.evict_last()
        } else {
            None
        };

        let id = self.arena.insert(Node {
            value,
            prev: self.last,
            next: None,
        });
        match self.last {
            Some(old_last) => self.set_next(old_last, Some(id)),
            None => self.root = Some(id),
        }
        self.last = Some(id);

        (id, evicted)
    }

    /// Removes the tail and returns its payload; `None` on an empty list.
    pub fn evict_last(&mut self) -> Option<T> {
        let id = self.last?;
        let node = self.arena.remove(id)?;

        match node.prev {
            Some(prev) => {
                self.set_next(prev, None);
                self.last = Some(prev);
            },
            None => {
                self.root = None;
                self.last = None;
            },
        }

        log::trace!("mru list evicted {id}, len={}", self.len());
        Some(node.value)
    }

    /// Moves `id` one position toward the root by swapping it with its
    /// predecessor.
    ///
    /// Returns `false` without touching the list if `id` is not a live node
    /// or is already the root.
    ///
    /// ```text
    ///   before:  pp ◄──► p ◄──► node ◄──► n
    ///   after:   pp ◄──► node ◄──► p ◄──► n
    /// ```
    pub fn promote(&mut self, id: SlotId) -> bool {
        let (prev, next) = match self.arena.get(id) {
            Some(node) => (node.prev, node.next),
            None => return false,
        };
        let Some(prev) = prev else {
            return false;
        };
        let Some(prev_prev) = self.arena.get(prev).map(|node| node.prev) else {
            return false;
        };

        if let Some(node) = self.arena.get_mut(id) {
            node.prev = prev_prev;
            node.next = Some(prev);
        }
        if let Some(node) = self.arena.get_mut(prev) {
            node.prev = Some(id);
            node.next = next;
        }
        match prev_prev {
            Some(pp) => self.set_next(pp, Some(id)),
            None => self.root = Some(id),
        }
        match next {
            Some(n) => self.set_prev(n, Some(prev)),
            None => self.last = Some(prev),
        }

        log::trace!("mru list promoted {id} past {prev}");
        true
    }

    /// Scans from the root for the first payload equal to `value`, promotes
    /// it one step and returns its id.
    ///
    /// Linear in `len`. Callers that need O(1) lookups should keep their own
    /// key → `SlotId` index and call [`promote`](Self::promote) directly, as
    /// [`MruCache`](crate::policy::mru_cache::MruCache) does.
    pub fn find<Q>(&mut self, value: &Q) -> Option<SlotId>
    where
        T: Borrow<Q>,
        Q: PartialEq + ?Sized,
    {
        let id = self
            .iter_entries()
            .find(|(_, candidate)| <T as Borrow<Q>>::borrow(candidate) == value)
            .map(|(id, _)| id)?;
        self.promote(id);
        Some(id)
    }

    /// Drops every node.
    pub fn clear(&mut self) {
        log::debug!("mru list cleared: dropped {} nodes", self.len());
        self.arena.clear();
        self.root = None;
        self.last = None;
    }

    /// Returns an approximate memory footprint in bytes.
    pub fn approx_bytes(&self) -> usize {
        std::mem::size_of::<Self>() + self.arena.approx_bytes()
    }

    /// Returns a double-ended iterator over payloads from root to last.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            entries: self.iter_entries(),
        }
    }

    /// Returns node ids from root to last.
    pub fn iter_ids(&self) -> impl DoubleEndedIterator<Item = SlotId> + ExactSizeIterator + '_ {
        self.iter_entries().map(|(id, _)| id)
    }

    /// Returns `(SlotId, &T)` pairs from root to last.
    pub fn iter_entries(&self) -> Entries<'_, T> {
        Entries {
            list: self,
            front: self.root,
            back: self.last,
            remaining: self.len(),
        }
    }

    /// Checks every structural invariant of the chain.
    ///
    /// Walks from the root, so this is O(n). Used by tests and fuzzing; safe
    /// to call in release builds.
    pub fn check_invariants(&self) -> Result<(), InvariantError> {
        let len = self.len();
        if len > self.capacity {
            return Err(InvariantError::new(format!(
                "len {len} exceeds capacity {}",
                self.capacity
            )));
        }

        match (self.root, self.last) {
            (None, None) if len == 0 => return Ok(()),
            (None, None) => {
                return Err(InvariantError::new(format!(
                    "root and last are empty but len is {len}"
                )));
            },
            (Some(_), None) | (None, Some(_)) => {
                return Err(InvariantError::new("exactly one of root/last is empty"));
            },
            (Some(_), Some(_)) if len == 0 => {
                return Err(InvariantError::new("root/last set on an empty list"));
            },
            _ => {},
        }

        let mut visited = 0usize;
        let mut prev: Option<SlotId> = None;
        let mut current = self.root;
        while let Some(id) = current {
            visited += 1;
            if visited > len {
                return Err(InvariantError::new(format!(
                    "walk from root exceeded len {len}; cycle through {id}"
                )));
            }
            let node = self
                .arena
                .get(id)
                .ok_or_else(|| InvariantError::new(format!("link to freed slot {id}")))?;
            if node.prev != prev {
                return Err(InvariantError::new(format!(
                    "{id}.prev is {:?}, expected {:?}",
                    node.prev, prev
                )));
            }
            prev = Some(id);
            current = node.next;
        }

        if prev != self.last {
            return Err(InvariantError::new(format!(
                "walk from root ended at {prev:?}, last is {:?}",
                self.last
            )));
        }
        if visited != len {
            return Err(InvariantError::new(format!(
                "walk from root visited {visited} nodes, len is {len}"
            )));
        }
        Ok(())
    }

    #[cfg(any(test, debug_assertions))]
    pub fn debug_validate_invariants(&self) {
        if let Err(e) = self.check_invariants() {
            panic!("mru list invariant violated: {e}");
        }
    }

    fn set_next(&mut self, id: SlotId, next: Option<SlotId>) {
        if let Some(node) = self.arena.get_mut(id) {
            node.next = next;
        }
    }

    fn set_prev(&mut self, id: SlotId, prev: Option<SlotId>) {
        if let Some(node) = self.arena.get_mut(id) {
            node.prev = prev;
        }
    }
}

impl<T: fmt::Debug> MruList<T> {
    /// Writes one `index: payload` line per node from root to last, then a
    /// `----` separator.
    pub fn dump<W: io::Write>(&self, out: &mut W) -> io::Result<()> {
        for (id, value) in self.iter_entries() {
            writeln!(out, "{}: {:?}", id.index(), value)?;
        }
        writeln!(out, "----")
    }

    /// Same as [`dump`](Self::dump), from last to root.
    pub fn dump_rev<W: io::Write>(&self, out: &mut W) -> io::Result<()> {
        for (id, value) in self.iter_entries().rev() {
            writeln!(out, "{}: {:?}", id.index(), value)?;
        }
        writeln!(out, "----")
    }
}

impl<T: fmt::Debug> fmt::Debug for MruList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MruList")
            .field("capacity", &self.capacity)
            .field("len", &self.len())
            .field("order", &self.iter().collect::<Vec<_>>())
            .finish()
    }
}

impl<'a, T> IntoIterator for &'a MruList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over `(SlotId, &T)` pairs, root to last or (reversed) last to
/// root.
pub struct Entries<'a, T> {
    list: &'a MruList<T>,
    front: Option<SlotId>,
    back: Option<SlotId>,
    remaining: usize,
}

impl<'a, T> Iterator for Entries<'a, T> {
    type Item = (SlotId, &'a T);

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let id = self.front?;
        let node = self.list.arena.get(id)?;
        self.front = node.next;
        self.remaining -= 1;
        Some((id, &node.value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> DoubleEndedIterator for Entries<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let id = self.back?;
        let node = self.list.arena.get(id)?;
        self.back = node.prev;
        self.remaining -= 1;
        Some((id, &node.value))
    }
}

impl<T> ExactSizeIterator for Entries<'_, T> {}

impl<T> FusedIterator for Entries<'_, T> {}

/// Iterator over payloads, root to last.
pub struct Iter<'a, T> {
    entries: Entries<'a, T>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.entries.next().map(|(_, value)| value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.entries.size_hint()
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.entries.next_back().map(|(_, value)| value)
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

#[cfg(feature = "concurrency")]
/// Thread-safe wrapper around [`MruList`] using a `parking_lot::RwLock`.
///
/// Each call holds the lock for the full relink, so callers never observe a
/// half-linked chain. Payload access goes through closures because references
/// cannot outlive the guard.
#[derive(Debug)]
pub struct ConcurrentMruList<T> {
    inner: RwLock<MruList<T>>,
}

#[cfg(feature = "concurrency")]
impl<T> ConcurrentMruList<T> {
    /// # Panics
    ///
    /// Panics if `capacity` is zero.
    pub fn new(capacity: usize) -> Self {
        Self {
            inner: RwLock::new(MruList::new(capacity)),
        }
    }

    pub fn try_new(capacity: usize) -> Result<Self, ConfigError> {
        Ok(Self {
            inner: RwLock::new(MruList::try_new(capacity)?),
        })
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

    pub fn contains(&self, id: SlotId) -> bool {
        self.inner.read().contains(id)
    }

    /// See [`MruList::insert`].
    pub fn insert(&self, value: T) -> (SlotId, Option<T>) {
        let mut list = self.inner.write();
        list.insert(value)
    }

    /// Tries to insert without blocking; hands the value back if the lock is
    /// busy.
    pub fn try_insert(&self, value: T) -> Result<(SlotId, Option<T>), T> {
        match self.inner.try_write() {
            Some(mut list) => Ok(list.insert(value)),
            None => Err(value),
        }
    }

    pub fn evict_last(&self) -> Option<T> {
        let mut list = self.inner.write();
        list.evict_last()
    }

    /// Tries to evict without blocking; `None` if the lock is busy.
    pub fn try_evict_last(&self) -> Option<Option<T>> {
        let mut list = self.inner.try_write()?;
        Some(list.evict_last())
    }

    pub fn promote(&self, id: SlotId) -> bool {
        let mut list = self.inner.write();
        list.promote(id)
    }

    /// Tries to promote without blocking; `None` if the lock is busy.
    pub fn try_promote(&self, id: SlotId) -> Option<bool> {
        let mut list = self.inner.try_write()?;
        Some(list.promote(id))
    }

    pub fn find<Q>(&self, value: &Q) -> Option<SlotId>
    where
        T: Borrow<Q>,
        Q: PartialEq + ?Sized,
    {
        let mut list = self.inner.write();
        list.find(value)
    }

    /// Runs `f` on the payload at `id`, if present.
    pub fn get_with<R>(&self, id: SlotId, f: impl FnOnce(&T) -> R) -> Option<R> {
        let list = self.inner.read();
        list.get(id).map(f)
    }

    /// Runs `f` on the root payload, if any.
    pub fn root_with<R>(&self, f: impl FnOnce(&T) -> R) -> Option<R> {
        let list = self.inner.read();
        list.root().map(f)
    }

    /// Runs `f` on the tail payload, if any.
    pub fn last_with<R>(&self, f: impl FnOnce(&T) -> R) -> Option<R> {
        let list = self.inner.read();
        list.last().map(f)
    }

    /// Copies the payloads from root to last under one read lock.
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        let list = self.inner.read();
        list.iter().cloned().collect()
    }

    pub fn check_invariants(&self) -> Result<(), InvariantError> {
        self.inner.read().check_invariants()
    }

    pub fn clear(&self) {
        self.inner.write().clear();
    }

    /// Consumes the wrapper and returns the inner list.
    pub fn into_inner(self) -> MruList<T> {
        self.inner.into_inner()
    }
}

#[cfg(feature = "concurrency")]
impl<T> From<MruList<T>> for ConcurrentMruList<T> {
    fn from(list: MruList<T>) -> Self {
        Self {
            inner: RwLock::new(list),
        }
    }
}
