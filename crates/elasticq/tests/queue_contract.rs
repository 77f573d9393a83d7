//! Contract conformance tests run against every backing.
//!
//! The backings must be observably identical behind the `Queue` trait; only
//! their allocation profile may differ.

use elasticq::{LinkedQueue, PooledQueue, Queue, RingQueue, SliceQueue};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

fn backings() -> Vec<(&'static str, Box<dyn Queue<i32>>)> {
    vec![
        ("slice", Box::new(SliceQueue::new())),
        ("ring", Box::new(RingQueue::new())),
        ("linked", Box::new(LinkedQueue::new())),
        ("pooled", Box::new(PooledQueue::new())),
    ]
}

fn push_seq(q: &mut dyn Queue<i32>, range: std::ops::Range<i32>) {
    for i in range {
        q.push_newest(i);
    }
}

fn pop_n(q: &mut dyn Queue<i32>, n: usize) {
    for _ in 0..n {
        q.pop_oldest();
    }
}

fn drain(q: &mut dyn Queue<i32>) -> Vec<i32> {
    let mut out = Vec::new();
    while !q.is_empty() {
        out.push(q.pop_oldest());
    }
    out
}

#[test]
fn fifo_scenarios() {
    type Ops = fn(&mut dyn Queue<i32>);
    let scenarios: Vec<(&str, Ops, Vec<i32>)> = vec![
        (
            "push 5",
            |q| push_seq(q, 0..5),
            vec![0, 1, 2, 3, 4],
        ),
        (
            "push 5, pop 3, push 3",
            |q| {
                push_seq(q, 0..5);
                pop_n(q, 3);
                push_seq(q, 10..13);
            },
            vec![3, 4, 10, 11, 12],
        ),
        (
            "push 5, pop all, push 3",
            |q| {
                push_seq(q, 0..5);
                pop_n(q, 5);
                push_seq(q, 10..13);
            },
            vec![10, 11, 12],
        ),
        (
            "interleaved wrap",
            |q| {
                push_seq(q, 0..5);
                pop_n(q, 3);
                push_seq(q, 10..13);
                pop_n(q, 2);
            },
            vec![10, 11, 12],
        ),
    ];

    for (impl_name, mut q) in backings() {
        for (name, ops, want) in &scenarios {
            ops(q.as_mut());
            let got = drain(q.as_mut());
            assert_eq!(&got, want, "{impl_name}/{name}");
            assert!(q.is_empty(), "{impl_name}/{name}: not drained");
        }
    }
}

#[test]
fn partial_drain_then_refill() {
    // push 0..5, pop three (removes 0,1,2), push 5..8; the remainder must
    // come out as exactly [3,4,5,6,7].
    for (impl_name, mut q) in backings() {
        push_seq(q.as_mut(), 0..5);
        pop_n(q.as_mut(), 3);
        push_seq(q.as_mut(), 5..8);
        assert_eq!(drain(q.as_mut()), vec![3, 4, 5, 6, 7], "{impl_name}");
    }
}

#[test]
fn capacity_always_covers_len() {
    for (impl_name, mut q) in backings() {
        for i in 0..500 {
            q.push_newest(i);
            assert!(q.capacity() >= q.len(), "{impl_name} at {i}");
            if i % 3 == 0 {
                q.pop_oldest();
                assert!(q.capacity() >= q.len(), "{impl_name} after pop at {i}");
            }
        }
    }
}

#[test]
fn reserve_never_discards_contents() {
    for (impl_name, mut q) in backings() {
        push_seq(q.as_mut(), 0..10);
        q.reserve(256);
        assert!(q.capacity() >= q.len(), "{impl_name}");
        // A shrinking request is a no-op.
        q.reserve(1);
        assert_eq!(q.len(), 10, "{impl_name}");
        assert_eq!(drain(q.as_mut()), (0..10).collect::<Vec<_>>(), "{impl_name}");
    }
}

#[test]
fn reserve_commits_requested_storage() {
    // Array-backed and pooled backings must commit real storage; the plain
    // chain has none to commit and reports len as capacity.
    let mut slice = SliceQueue::<i32>::new();
    slice.reserve(64);
    assert!(slice.capacity() >= 64);

    let mut ring = RingQueue::<i32>::new();
    ring.reserve(64);
    assert!(ring.capacity() >= 64);

    let mut pooled = PooledQueue::<i32>::new();
    pooled.reserve(64);
    assert!(pooled.capacity() >= 64);

    let mut linked = LinkedQueue::<i32>::new();
    linked.reserve(64);
    assert_eq!(linked.capacity(), 0);
}

struct CountsDrops(Arc<AtomicUsize>);

impl Drop for CountsDrops {
    fn drop(&mut self) {
        self.0.fetch_add(1, Ordering::Relaxed);
    }
}

fn drop_accounting<Q: Queue<CountsDrops>>(mut q: Q) {
    let drops = Arc::new(AtomicUsize::new(0));
    for _ in 0..10 {
        q.push_newest(CountsDrops(Arc::clone(&drops)));
    }
    for _ in 0..3 {
        q.pop_oldest();
    }
    assert_eq!(drops.load(Ordering::Relaxed), 3);
    // The seven still-queued items must be dropped with the queue, exactly once.
    drop(q);
    assert_eq!(drops.load(Ordering::Relaxed), 10);
}

#[test]
fn dropping_a_loaded_queue_drops_each_item_once() {
    drop_accounting(SliceQueue::new());
    drop_accounting(RingQueue::new());
    drop_accounting(LinkedQueue::new());
    drop_accounting(PooledQueue::new());
}

#[test]
#[should_panic(expected = "pop_oldest on empty queue")]
fn empty_pop_traps_slice() {
    SliceQueue::<i32>::new().pop_oldest();
}

#[test]
#[should_panic(expected = "pop_oldest on empty queue")]
fn empty_pop_traps_ring() {
    RingQueue::<i32>::new().pop_oldest();
}

#[test]
#[should_panic(expected = "pop_oldest on empty queue")]
fn empty_pop_traps_linked() {
    LinkedQueue::<i32>::new().pop_oldest();
}

#[test]
#[should_panic(expected = "pop_oldest on empty queue")]
fn empty_pop_traps_pooled() {
    PooledQueue::<i32>::new().pop_oldest();
}
