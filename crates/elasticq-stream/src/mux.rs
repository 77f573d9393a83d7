//! Single-worker multiplexer (the default and pluggable-queue strategies).
//!
//! One worker owns both endpoints and a queue. It races "accept the next
//! source item" against "hand the staged item to the sink", so a stalled
//! consumer never delays acceptance and a stalled producer never delays
//! delivery.

#[cfg(debug_assertions)]
use crate::invariants::{debug_assert_conserved, debug_assert_drained};
use crate::metrics::Metrics;
use elasticq::Queue;
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::sync::mpsc::error::TrySendError;

/// Refills the staged slot from the queue front.
fn next_staged<T, Q: Queue<T>>(queue: &mut Q) -> Option<T> {
    (!queue.is_empty()).then(|| queue.pop_oldest())
}

/// Worker loop. State is `(source_open, staged, queue)`:
///
/// - `staged` holds the single item currently offered to the sink; the queue
///   holds everything behind it, oldest first.
/// - Terminates when the source has closed and both staged slot and queue
///   are drained (normal close of the sink), or as soon as the sink's reader
///   has gone away (buffered items are discarded).
pub(crate) async fn run<T, Q>(
    mut input: mpsc::Receiver<T>,
    output: mpsc::Sender<T>,
    mut queue: Q,
    metrics: Arc<Metrics>,
) where
    T: Send + 'static,
    Q: Queue<T> + Send + 'static,
{
    let mut staged: Option<T> = None;
    let mut source_open = true;

    loop {
        // Opportunistic phase: hand off without blocking while the consumer
        // keeps up, draining the queue behind the staged item.
        while staged.is_some() {
            match output.try_reserve() {
                Ok(permit) => {
                    if let Some(item) = staged.take() {
                        permit.send(item);
                        metrics.record_delivered();
                    }
                    staged = next_staged(&mut queue);
                    metrics.record_depth(queue.len(), queue.capacity());
                }
                Err(TrySendError::Full(())) => break,
                Err(TrySendError::Closed(())) => return,
            }
        }

        if !source_open && staged.is_none() {
            // Staged only empties when the queue had nothing left behind it.
            #[cfg(debug_assertions)]
            debug_assert_drained!(staged.is_none(), queue.len());
            #[cfg(debug_assertions)]
            debug_assert_conserved!(metrics.accepted(), metrics.delivered());
            // Dropping the sender closes the sink.
            return;
        }

        // Blocking phase: race the two endpoints, proceeding with whichever
        // becomes ready first. At least one branch is always enabled here.
        tokio::select! {
            received = input.recv(), if source_open => match received {
                Some(item) => {
                    metrics.record_accepted();
                    if staged.is_none() {
                        staged = Some(item);
                    } else {
                        queue.push_newest(item);
                        metrics.record_depth(queue.len(), queue.capacity());
                    }
                }
                None => source_open = false,
            },
            permit = output.reserve(), if staged.is_some() => match permit {
                Ok(permit) => {
                    if let Some(item) = staged.take() {
                        permit.send(item);
                        metrics.record_delivered();
                    }
                    staged = next_staged(&mut queue);
                    metrics.record_depth(queue.len(), queue.capacity());
                }
                // Sink reader dropped; nobody will read what remains.
                Err(_) => return,
            },
        }
    }
}
