use crate::invariants::{debug_assert_capacity_covers_len, debug_assert_live_slot};
use crate::Queue;
use std::mem::MaybeUninit;
use std::ptr;

/// Smallest capacity committed on first use.
const MIN_CAPACITY: usize = 8;

/// Circular-buffer queue, reallocated on overflow.
///
/// Fixed-size circular storage with power-of-two capacity and mask indexing.
/// Push and pop are O(1) with no head-offset waste; when the ring fills, a
/// doubled allocation is committed and the live contents are re-linearized
/// into it.
///
/// Profile: constant-time at both ends, one allocation per growth event,
/// at most 2x over-commit.
pub struct RingQueue<T> {
    /// Storage; length is zero or a power of two.
    ///
    /// Uses `Box<[MaybeUninit<T>]>` instead of `Vec`: the size is fixed
    /// between growth events and only slots in the live range are
    /// initialized.
    buf: Box<[MaybeUninit<T>]>,
    /// Index of the oldest item. Meaningful only while `len > 0`.
    head: usize,
    len: usize,
    growth_events: u64,
}

impl<T> RingQueue<T> {
    /// Creates an empty queue. Allocates nothing until the first push.
    pub fn new() -> Self {
        Self {
            buf: Vec::new().into_boxed_slice(),
            head: 0,
            len: 0,
            growth_events: 0,
        }
    }

    /// Creates an empty queue committing at least `capacity` slots up front,
    /// rounded up to a power of two.
    pub fn with_capacity(capacity: usize) -> Self {
        let mut queue = Self::new();
        if capacity > 0 {
            queue.grow(capacity);
            queue.growth_events = 0;
        }
        queue
    }

    /// Number of times the ring had to reallocate. Telemetry only.
    #[inline]
    pub fn growth_events(&self) -> u64 {
        self.growth_events
    }

    #[inline]
    fn mask(&self) -> usize {
        self.buf.len() - 1
    }

    /// Commits a ring of at least `min_total` slots and re-linearizes the
    /// live contents into it, oldest item first.
    fn grow(&mut self, min_total: usize) {
        let new_cap = min_total.max(MIN_CAPACITY).next_power_of_two();

        // Allocate fixed-size storage as a boxed slice (stable Rust:
        // via Vec, then convert).
        let mut storage = Vec::with_capacity(new_cap);
        storage.resize_with(new_cap, MaybeUninit::uninit);
        let mut storage = storage.into_boxed_slice();

        let old_cap = self.buf.len();
        if old_cap > 0 && self.len > 0 {
            // SAFETY: the live range starts at head and may wrap once; both
            // segments are initialized, disjoint from the fresh allocation,
            // and copied bitwise so ownership moves without drops.
            unsafe {
                let src = self.buf.as_ptr();
                let dst = storage.as_mut_ptr();
                let first = self.len.min(old_cap - self.head);
                ptr::copy_nonoverlapping(src.add(self.head), dst, first);
                ptr::copy_nonoverlapping(src, dst.add(first), self.len - first);
            }
        }

        // The old storage now holds only bitwise-moved slots; dropping the
        // MaybeUninit box releases the allocation without touching items.
        self.buf = storage;
        self.head = 0;
        self.growth_events += 1;
    }
}

impl<T> Queue<T> for RingQueue<T> {
    #[inline]
    fn len(&self) -> usize {
        self.len
    }

    #[inline]
    fn capacity(&self) -> usize {
        self.buf.len()
    }

    fn reserve(&mut self, total: usize) {
        if total <= self.len || total <= self.buf.len() {
            return;
        }
        self.grow(total);
        debug_assert_capacity_covers_len!(self.capacity(), self.len());
    }

    fn push_newest(&mut self, item: T) {
        if self.len == self.buf.len() {
            self.grow(self.len * 2);
        }
        let idx = (self.head + self.len) & self.mask();
        self.buf[idx] = MaybeUninit::new(item);
        self.len += 1;
        debug_assert_capacity_covers_len!(self.capacity(), self.len());
    }

    fn pop_oldest(&mut self) -> T {
        assert!(self.len > 0, "pop_oldest on empty queue");
        debug_assert_live_slot!(0, self.len);

        // SAFETY: head indexes the oldest live slot; advancing past it marks
        // the slot dead before anyone can read it again.
        let item = unsafe { self.buf[self.head].assume_init_read() };
        self.head = (self.head + 1) & self.mask();
        self.len -= 1;
        item
    }
}

impl<T> Default for RingQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for RingQueue<T> {
    fn drop(&mut self) {
        if self.buf.is_empty() {
            return;
        }
        let mask = self.mask();
        for offset in 0..self.len {
            let idx = (self.head + offset) & mask;
            // SAFETY: offsets 0..len from head are exactly the live slots.
            unsafe { self.buf[idx].assume_init_drop() };
        }
    }
}
