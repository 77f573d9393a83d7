//! Two-worker strategy: intake and delivery split across tasks.
//!
//! Intake drains the source into a shared queue; delivery feeds the sink
//! from it. The two meet only inside short lock-guarded critical sections -
//! never across an await point. A delivery worker that finds the queue empty
//! arms a fresh one-shot wake barrier *while still holding the lock*, so an
//! item appended between its emptiness check and its wait cannot be missed.

use crate::invariants::debug_assert_barrier_fresh;
#[cfg(debug_assertions)]
use crate::invariants::{debug_assert_conserved, debug_assert_drained};
use crate::metrics::Metrics;
use elasticq::{Queue, SliceQueue};
use std::sync::{Arc, Mutex};
use tokio::sync::{mpsc, oneshot};

/// State shared by the two workers. All fields are guarded by one lock;
/// the lock is never held across an await.
struct Shared<T> {
    queue: SliceQueue<T>,
    /// Armed while delivery waits on an empty queue; fired (and cleared) by
    /// intake on the next append or on source end-of-stream.
    barrier: Option<oneshot::Sender<()>>,
    source_open: bool,
}

impl<T> Shared<T> {
    fn fire_barrier(&mut self) {
        if let Some(barrier) = self.barrier.take() {
            // Delivery may have already given up waiting; a dropped receiver
            // is fine.
            let _ = barrier.send(());
        }
    }
}

/// What delivery decided to do with the lock held, executed after release.
enum Step<T> {
    Deliver(T),
    Wait(oneshot::Receiver<()>),
    Finished,
}

pub(crate) fn spawn<T: Send + 'static>(
    input: mpsc::Receiver<T>,
    output: mpsc::Sender<T>,
    queue: SliceQueue<T>,
    metrics: Arc<Metrics>,
) {
    let shared = Arc::new(Mutex::new(Shared {
        queue,
        barrier: None,
        source_open: true,
    }));

    tokio::spawn(intake(input, Arc::clone(&shared), Arc::clone(&metrics)));
    tokio::spawn(delivery(output, shared, metrics));
}

/// Drains the source into the shared queue, waking delivery as needed.
async fn intake<T: Send>(
    mut input: mpsc::Receiver<T>,
    shared: Arc<Mutex<Shared<T>>>,
    metrics: Arc<Metrics>,
) {
    while let Some(item) = input.recv().await {
        metrics.record_accepted();
        let mut state = shared.lock().expect("buffer state lock poisoned");
        state.queue.push_newest(item);
        metrics.record_depth(state.queue.len(), state.queue.capacity());
        state.fire_barrier();
    }

    // Source end-of-stream. The flag and the wake-up go out under the same
    // lock that guards the queue, so delivery can never observe "empty" and
    // then miss the close.
    let mut state = shared.lock().expect("buffer state lock poisoned");
    state.source_open = false;
    state.fire_barrier();
}

/// Feeds the sink from the shared queue.
async fn delivery<T: Send>(
    output: mpsc::Sender<T>,
    shared: Arc<Mutex<Shared<T>>>,
    metrics: Arc<Metrics>,
) {
    loop {
        let step = {
            let mut state = shared.lock().expect("buffer state lock poisoned");
            if !state.queue.is_empty() {
                let item = state.queue.pop_oldest();
                metrics.record_depth(state.queue.len(), state.queue.capacity());
                Step::Deliver(item)
            } else if !state.source_open {
                #[cfg(debug_assertions)]
                debug_assert_drained!(true, state.queue.len());
                #[cfg(debug_assertions)]
                debug_assert_conserved!(metrics.accepted(), metrics.delivered());
                Step::Finished
            } else {
                debug_assert_barrier_fresh!(state.queue.len(), state.barrier.is_some());
                let (armed, fired) = oneshot::channel();
                state.barrier = Some(armed);
                Step::Wait(fired)
            }
            // Lock released here - before any await below.
        };

        match step {
            Step::Deliver(item) => {
                // The send may block on the consumer for arbitrarily long;
                // holding the lock here would starve intake.
                if output.send(item).await.is_err() {
                    // Sink reader dropped; discard what remains.
                    return;
                }
                metrics.record_delivered();
            }
            Step::Wait(fired) => {
                // Fires on the next append or on source end-of-stream; either
                // way the loop re-examines the state under the lock.
                let _ = fired.await;
            }
            Step::Finished => return,
        }
    }
}
