use crate::invariants::debug_assert_capacity_covers_len;
use crate::Queue;
use std::mem::MaybeUninit;

/// Growable-array queue with an advancing head offset.
///
/// Items live in a contiguous `Vec`; popping advances a head offset instead
/// of shifting the remainder down. The dead prefix left behind wastes space
/// until the next growth event, at which point it is reclaimed by compaction
/// rather than paying for a larger allocation.
///
/// Profile: best memory locality of the backings, one amortized allocation
/// per growth event, O(1) push and pop.
pub struct SliceQueue<T> {
    /// Storage. Slots in `buf[head..]` hold live items; slots in `buf[..head]`
    /// have been moved out and must be neither read nor dropped.
    buf: Vec<MaybeUninit<T>>,
    head: usize,
    growth_events: u64,
}

impl<T> SliceQueue<T> {
    /// Creates an empty queue. Allocates nothing until the first push.
    pub fn new() -> Self {
        Self {
            buf: Vec::new(),
            head: 0,
            growth_events: 0,
        }
    }

    /// Creates an empty queue with room for `capacity` items pre-committed.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buf: Vec::with_capacity(capacity),
            head: 0,
            growth_events: 0,
        }
    }

    /// Number of times the backing allocation had to grow. Telemetry only.
    #[inline]
    pub fn growth_events(&self) -> u64 {
        self.growth_events
    }
}

impl<T> Queue<T> for SliceQueue<T> {
    #[inline]
    fn len(&self) -> usize {
        self.buf.len() - self.head
    }

    #[inline]
    fn capacity(&self) -> usize {
        self.buf.capacity() - self.head
    }

    fn reserve(&mut self, total: usize) {
        if total <= self.len() || self.capacity() >= total {
            return;
        }
        if self.head > 0 {
            // Reclaim the dead prefix first so the request is measured against
            // live contents only. Draining MaybeUninit slots drops nothing.
            self.buf.drain(..self.head);
            self.head = 0;
        }
        self.buf.reserve(total - self.buf.len());
        debug_assert_capacity_covers_len!(self.capacity(), self.len());
    }

    fn push_newest(&mut self, item: T) {
        if self.buf.len() == self.buf.capacity() {
            if self.head > 0 {
                // Growth event doubles as the compaction trigger: reclaim the
                // dead prefix and retry in place before allocating more.
                self.buf.drain(..self.head);
                self.head = 0;
            } else {
                self.growth_events += 1;
            }
        }
        self.buf.push(MaybeUninit::new(item));
        debug_assert_capacity_covers_len!(self.capacity(), self.len());
    }

    fn pop_oldest(&mut self) -> T {
        assert!(self.head < self.buf.len(), "pop_oldest on empty queue");

        // SAFETY: slots in buf[head..] hold initialized items that have not
        // been moved out yet; advancing head marks this one as dead.
        let item = unsafe { self.buf[self.head].assume_init_read() };
        self.head += 1;

        if self.head == self.buf.len() {
            // Fully drained: rewind to the front of the allocation so the
            // dead prefix cannot creep under steady 1:1 traffic.
            self.buf.clear();
            self.head = 0;
        }
        item
    }
}

impl<T> Default for SliceQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for SliceQueue<T> {
    fn drop(&mut self) {
        // SAFETY: buf[head..] is exactly the set of initialized slots.
        unsafe {
            for slot in &mut self.buf[self.head..] {
                slot.assume_init_drop();
            }
        }
    }
}
