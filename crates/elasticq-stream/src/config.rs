//! Configuration for buffering sessions.

/// Configuration for a buffering session.
#[derive(Debug, Clone, Copy)]
pub struct BufConfig {
    /// Storage pre-committed on the internal queue before the first item.
    ///
    /// Purely an allocation hint; the queue still grows without bound.
    ///
    /// Default: 0
    pub initial_capacity: usize,

    /// Slots in the handoff channel between the worker and the reader.
    ///
    /// 1 approximates a rendezvous handoff; larger values let a burst of
    /// deliveries complete without waking the reader per item. Values below
    /// 1 are clamped up.
    ///
    /// Default: 1
    pub handoff_capacity: usize,
}

impl Default for BufConfig {
    fn default() -> Self {
        Self {
            initial_capacity: 0,
            handoff_capacity: 1,
        }
    }
}

impl BufConfig {
    /// Rendezvous-style handoff, nothing pre-committed.
    pub fn low_latency() -> Self {
        Self::default()
    }

    /// Sized for bursty producers: storage pre-committed, batched handoff.
    pub fn buffered_bursts() -> Self {
        Self {
            initial_capacity: 1024,
            handoff_capacity: 64,
        }
    }

    /// Sets the pre-committed queue storage.
    pub fn with_initial_capacity(mut self, capacity: usize) -> Self {
        self.initial_capacity = capacity;
        self
    }

    /// Sets the handoff channel size (clamped to at least 1).
    pub fn with_handoff_capacity(mut self, capacity: usize) -> Self {
        self.handoff_capacity = capacity;
        self
    }

    pub(crate) fn handoff(&self) -> usize {
        self.handoff_capacity.max(1)
    }
}
