//! Elastic Buffering Adapters for tokio Channels
//!
//! This crate decouples a producer from its consumer: values arriving on a
//! source channel are accepted immediately and parked in an in-memory queue
//! that grows without bound, so the producer never waits on the consumer's
//! pace. The sink closes only once the source has closed **and** every
//! buffered value has been delivered, in order.
//!
//! # Features
//!
//! - **Three interchangeable strategies**: a single-worker multiplexer
//!   ([`buffer`]), a two-worker split with a one-shot wake barrier
//!   ([`buffer_split`]), and a generic multiplexer over any queue backing
//!   ([`buffer_with_queue`])
//! - **Pluggable storage**: any [`Queue`] implementation from `elasticq`
//!   slots in without changing observable behavior
//! - **Stream output**: the returned [`BufReceiver`] implements
//!   [`futures_core::Stream`]
//! - **Telemetry**: accepted/delivered counters and queue depth gauges,
//!   never used for control decisions
//!
//! # Example
//!
//! ```ignore
//! use elasticq_stream::{buffer, StreamExt};
//! use tokio::sync::mpsc;
//!
//! #[tokio::main]
//! async fn main() {
//!     let (tx, source) = mpsc::channel(1);
//!     let mut rx = buffer::<u64>(source);
//!
//!     // The producer is never backpressured by the reader.
//!     for i in 0..1_000 {
//!         tx.send(i).await.unwrap();
//!     }
//!     drop(tx);
//!
//!     while let Some(item) = rx.recv().await {
//!         println!("Received: {}", item);
//!     }
//! }
//! ```

mod channel;
mod config;
mod error;
mod invariants;
mod metrics;
mod mux;
mod receiver;
mod split;

pub use channel::{
    buffer, buffer_split, buffer_split_with_config, buffer_with_config, buffer_with_queue,
    buffer_with_queue_and_config,
};
pub use config::BufConfig;
pub use error::TryRecvError;
pub use metrics::MetricsSnapshot;
pub use receiver::BufReceiver;

// Re-export the queue contract and backings for strategy selection
pub use elasticq::{LinkedQueue, PooledQueue, Queue, RingQueue, SliceQueue};

// Re-export useful stream combinators
pub use tokio_stream::StreamExt;
