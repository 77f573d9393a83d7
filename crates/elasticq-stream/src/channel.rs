//! Session construction: one entry point per strategy.

use crate::config::BufConfig;
use crate::metrics::Metrics;
use crate::receiver::BufReceiver;
use crate::{mux, split};
use elasticq::{Queue, SliceQueue};
use std::sync::Arc;
use tokio::sync::mpsc;

/// Buffers `input` elastically behind a single worker.
///
/// Every item received from `input` is delivered on the returned receiver
/// exactly once and in order; the producer is never backpressured, no matter
/// how slowly the receiver is drained. Buffered items grow an in-memory
/// queue **without bound** - memory is the only limit.
///
/// Must be called from within a tokio runtime.
///
/// # Example
///
/// ```ignore
/// use elasticq_stream::buffer;
/// use tokio::sync::mpsc;
///
/// let (tx, source) = mpsc::channel(1);
/// let mut rx = buffer::<u64>(source);
///
/// tx.send(42).await.unwrap();
/// drop(tx);
/// assert_eq!(rx.recv().await, Some(42));
/// assert_eq!(rx.recv().await, None);
/// ```
pub fn buffer<T: Send + 'static>(input: mpsc::Receiver<T>) -> BufReceiver<T> {
    buffer_with_config(input, BufConfig::default())
}

/// [`buffer`] with an explicit [`BufConfig`].
pub fn buffer_with_config<T: Send + 'static>(
    input: mpsc::Receiver<T>,
    config: BufConfig,
) -> BufReceiver<T> {
    buffer_with_queue_and_config(input, SliceQueue::new(), config)
}

/// Buffers `input` behind a caller-supplied queue backing.
///
/// Same observable behavior as [`buffer`]; only the allocation and latency
/// profile follows the supplied [`Queue`] implementation.
pub fn buffer_with_queue<T, Q>(input: mpsc::Receiver<T>, queue: Q) -> BufReceiver<T>
where
    T: Send + 'static,
    Q: Queue<T> + Send + 'static,
{
    buffer_with_queue_and_config(input, queue, BufConfig::default())
}

/// [`buffer_with_queue`] with an explicit [`BufConfig`].
pub fn buffer_with_queue_and_config<T, Q>(
    input: mpsc::Receiver<T>,
    mut queue: Q,
    config: BufConfig,
) -> BufReceiver<T>
where
    T: Send + 'static,
    Q: Queue<T> + Send + 'static,
{
    if config.initial_capacity > 0 {
        queue.reserve(config.initial_capacity);
    }
    let metrics = Arc::new(Metrics::new());
    let (handoff_tx, handoff_rx) = mpsc::channel(config.handoff());
    tokio::spawn(mux::run(input, handoff_tx, queue, Arc::clone(&metrics)));
    BufReceiver::new(handoff_rx, metrics)
}

/// Buffers `input` behind two workers: an intake task draining the source
/// and a delivery task feeding the sink, sharing a lock-guarded queue with a
/// one-shot wake barrier.
///
/// Same observable contract as [`buffer`]; the split structure keeps source
/// and sink on independently scheduled tasks, which can help when both
/// endpoints are busy at once.
pub fn buffer_split<T: Send + 'static>(input: mpsc::Receiver<T>) -> BufReceiver<T> {
    buffer_split_with_config(input, BufConfig::default())
}

/// [`buffer_split`] with an explicit [`BufConfig`].
pub fn buffer_split_with_config<T: Send + 'static>(
    input: mpsc::Receiver<T>,
    config: BufConfig,
) -> BufReceiver<T> {
    let mut queue = SliceQueue::new();
    if config.initial_capacity > 0 {
        queue.reserve(config.initial_capacity);
    }
    let metrics = Arc::new(Metrics::new());
    let (handoff_tx, handoff_rx) = mpsc::channel(config.handoff());
    split::spawn(input, handoff_tx, queue, Arc::clone(&metrics));
    BufReceiver::new(handoff_rx, metrics)
}
