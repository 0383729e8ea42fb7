//! Fixed-capacity ring pools for bricks and projectiles
//!
//! A pool is a fixed backing array plus a logical window (`pointer`, `count`).
//! New entries are written just past the window; only the head (oldest) entry
//! can be reclaimed. Entries removed from the middle are tombstoned in place
//! and stay allocated until the pointer reaches them.

/// An entry that can be logically removed without leaving the ring
pub trait PoolEntry {
    /// False once the entry has been tombstoned
    fn is_live(&self) -> bool;
}

/// Ring buffer with head pointer and count
#[derive(Debug, Clone)]
pub struct RingPool<T, const N: usize> {
    slots: [T; N],
    pointer: usize,
    count: usize,
}

impl<T: Copy + Default, const N: usize> Default for RingPool<T, N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Copy + Default, const N: usize> RingPool<T, N> {
    pub const CAPACITY: usize = N;

    pub fn new() -> Self {
        Self {
            slots: [T::default(); N],
            pointer: 0,
            count: 0,
        }
    }

    /// Index of the oldest entry
    pub fn pointer(&self) -> usize {
        self.pointer
    }

    /// Number of entries in the window (tombstoned ones included)
    pub fn count(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    pub fn is_full(&self) -> bool {
        self.count == N
    }

    /// Physical slot of the entry `offset` places after the head
    #[inline]
    fn slot_index(&self, offset: usize) -> usize {
        (self.pointer + offset) % N
    }

    /// Store an entry at the tail and return its slot.
    ///
    /// When the ring is full the oldest entry is overwritten and the head
    /// advances, so `count` never exceeds `N`.
    pub fn spawn(&mut self, item: T) -> usize {
        if self.is_full() {
            let slot = self.pointer;
            log::warn!("pool of {} full, overwriting slot {}", N, slot);
            self.slots[slot] = item;
            self.pointer = (self.pointer + 1) % N;
            return slot;
        }
        let slot = self.slot_index(self.count);
        self.slots[slot] = item;
        self.count += 1;
        slot
    }

    /// Entry at a physical slot, if that slot is inside the window
    pub fn get(&self, slot: usize) -> Option<&T> {
        self.window_contains(slot).then(|| &self.slots[slot])
    }

    pub fn get_mut(&mut self, slot: usize) -> Option<&mut T> {
        if self.window_contains(slot) {
            Some(&mut self.slots[slot])
        } else {
            None
        }
    }

    fn window_contains(&self, slot: usize) -> bool {
        slot < N && (slot + N - self.pointer) % N < self.count
    }

    /// Oldest entry
    pub fn head(&self) -> Option<&T> {
        (!self.is_empty()).then(|| &self.slots[self.pointer])
    }

    /// Entries in age order, oldest first
    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        (0..self.count).map(move |i| &self.slots[self.slot_index(i)])
    }

    /// Mutable entries in age order, oldest first
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut T> + '_ {
        let tail_len = self.count.min(N - self.pointer);
        let wrapped_len = self.count - tail_len;
        let (wrapped, tail) = self.slots.split_at_mut(self.pointer);
        tail[..tail_len]
            .iter_mut()
            .chain(wrapped[..wrapped_len].iter_mut())
    }

    /// Drop the head entry from the window.
    ///
    /// Returns the reclaimed entry, or `None` if the pool was empty.
    pub fn recycle_head(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }
        let item = self.slots[self.pointer];
        self.pointer = (self.pointer + 1) % N;
        self.count -= 1;
        Some(item)
    }
}

impl<T: Copy + Default + PoolEntry, const N: usize> RingPool<T, N> {
    /// Live (non-tombstoned) entries, oldest first
    pub fn live(&self) -> impl Iterator<Item = &T> + '_ {
        self.iter().filter(|e| e.is_live())
    }

    pub fn live_mut(&mut self) -> impl Iterator<Item = &mut T> + '_ {
        self.iter_mut().filter(|e| e.is_live())
    }

    pub fn live_count(&self) -> usize {
        self.live().count()
    }

    /// Recycle heads while they are tombstoned. Returns how many were reclaimed.
    pub fn recycle_dead_heads(&mut self) -> usize {
        let mut reclaimed = 0;
        while self.head().is_some_and(|head| !head.is_live()) {
            self.recycle_head();
            reclaimed += 1;
        }
        reclaimed
    }
}
