//! ElasticQ - Pluggable FIFO Backing Stores
//!
//! Interchangeable queue implementations behind a single [`Queue`] contract,
//! intended as the elastic storage of an unbounded buffering stage: a producer
//! appends at whatever pace it likes, a consumer drains at its own pace, and
//! the queue in between grows as needed.
//!
//! The four backings trade allocation count against memory locality:
//!
//! - [`SliceQueue`] - growable contiguous array with an advancing head offset;
//!   compaction is deferred to the next growth event
//! - [`RingQueue`] - circular storage with power-of-two capacity, reallocated
//!   on overflow; O(1) at both ends without head-offset waste
//! - [`LinkedQueue`] - one boxed node per item; no pre-allocation at all
//! - [`PooledQueue`] - linked nodes recycled through a per-queue free list,
//!   amortizing allocator pressure under high churn
//!
//! All backings are strictly FIFO and freely substitutable: swapping one for
//! another changes the allocation and latency profile, never observable order.
//!
//! # Example
//!
//! ```
//! use elasticq::{Queue, SliceQueue};
//!
//! let mut q = SliceQueue::new();
//! q.push_newest(1);
//! q.push_newest(2);
//! q.push_newest(3);
//!
//! assert_eq!(q.pop_oldest(), 1);
//! assert_eq!(q.pop_oldest(), 2);
//! assert_eq!(q.len(), 1);
//! ```

mod invariants;
mod linked;
mod pooled;
mod queue;
mod ring;
mod slice;

pub use linked::LinkedQueue;
pub use pooled::PooledQueue;
pub use queue::Queue;
pub use ring::RingQueue;
pub use slice::SliceQueue;
