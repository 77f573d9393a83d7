use crate::invariants::debug_assert_chain_consistent;
use crate::Queue;
use std::ptr;

struct Node<T> {
    item: T,
    next: Option<Box<Node<T>>>,
}

/// Singly-linked queue: one boxed node per item.
///
/// Tail-append through a raw cursor, head-remove through the owning chain.
/// Nothing is pre-allocated and nothing is over-committed, so `capacity()`
/// degenerates to `len()`; the price is one allocation per item.
pub struct LinkedQueue<T> {
    head: Option<Box<Node<T>>>,
    /// Cursor to the last node of the chain rooted at `head`; null when the
    /// chain is empty. Never dereferenced outside `&mut self` methods.
    tail: *mut Node<T>,
    len: usize,
}

// Safety: the raw tail pointer aliases a node owned by `head`; the queue is
// a single-owner structure and hands out no shared references.
unsafe impl<T: Send> Send for LinkedQueue<T> {}

impl<T> LinkedQueue<T> {
    /// Creates an empty queue.
    pub fn new() -> Self {
        Self {
            head: None,
            tail: ptr::null_mut(),
            len: 0,
        }
    }
}

impl<T> Queue<T> for LinkedQueue<T> {
    #[inline]
    fn len(&self) -> usize {
        self.len
    }

    #[inline]
    fn capacity(&self) -> usize {
        // A chain commits exactly as much storage as it holds.
        self.len
    }

    fn reserve(&mut self, _total: usize) {
        // Nothing to commit ahead of time; nodes are allocated per push.
    }

    fn push_newest(&mut self, item: T) {
        let mut node = Box::new(Node { item, next: None });
        let raw: *mut Node<T> = &mut *node;
        if self.tail.is_null() {
            self.head = Some(node);
        } else {
            // SAFETY: tail points at the chain's last node, which is owned
            // by the chain rooted at head and has next == None.
            unsafe { (*self.tail).next = Some(node) };
        }
        self.tail = raw;
        self.len += 1;
    }

    fn pop_oldest(&mut self) -> T {
        let mut node = self.head.take().expect("pop_oldest on empty queue");
        self.head = node.next.take();
        if self.head.is_none() {
            self.tail = ptr::null_mut();
        }
        self.len -= 1;
        debug_assert_chain_consistent!(self.head.is_none(), self.tail.is_null());
        node.item
    }
}

impl<T> Default for LinkedQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for LinkedQueue<T> {
    fn drop(&mut self) {
        // Unlink iteratively; the default recursive drop would overflow the
        // stack on long chains.
        let mut cursor = self.head.take();
        while let Some(mut node) = cursor {
            cursor = node.next.take();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tail_resets_when_emptied() {
        let mut q = LinkedQueue::new();
        q.push_newest(1);
        q.push_newest(2);
        assert_eq!(q.pop_oldest(), 1);
        assert_eq!(q.pop_oldest(), 2);
        assert!(q.tail.is_null());

        // Appending after a full drain must rebuild the chain from scratch.
        q.push_newest(3);
        assert_eq!(q.pop_oldest(), 3);
    }

    #[test]
    fn capacity_tracks_len() {
        let mut q = LinkedQueue::new();
        for i in 0..10 {
            q.push_newest(i);
            assert_eq!(q.capacity(), q.len());
        }
        q.reserve(100);
        assert_eq!(q.capacity(), 10);
    }

    #[test]
    fn long_chain_drop_does_not_recurse() {
        let mut q = LinkedQueue::new();
        for i in 0..200_000 {
            q.push_newest(i);
        }
        drop(q);
    }
}
