//! Session telemetry.
//!
//! Counters and gauges shared between the worker task(s) and the output
//! handle. Everything here is advisory: updates use relaxed atomics and the
//! adapter never consults them for control decisions.

use std::sync::atomic::{AtomicU64, Ordering};

/// Live counters for one buffering session.
#[derive(Debug, Default)]
pub(crate) struct Metrics {
    /// Items accepted from the source.
    accepted: AtomicU64,
    /// Items handed to the sink.
    delivered: AtomicU64,
    /// Current internal queue depth, as last sampled by a worker.
    queued: AtomicU64,
    /// Committed queue storage, as last sampled by a worker.
    queue_capacity: AtomicU64,
    /// High-water mark of the queue depth.
    peak_queued: AtomicU64,
}

impl Metrics {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub(crate) fn record_accepted(&self) {
        self.accepted.fetch_add(1, Ordering::Relaxed);
    }

    #[inline]
    pub(crate) fn record_delivered(&self) {
        self.delivered.fetch_add(1, Ordering::Relaxed);
    }

    /// Samples queue depth and committed storage after a queue mutation.
    #[inline]
    pub(crate) fn record_depth(&self, len: usize, capacity: usize) {
        self.queued.store(len as u64, Ordering::Relaxed);
        self.queue_capacity.store(capacity as u64, Ordering::Relaxed);
        self.peak_queued.fetch_max(len as u64, Ordering::Relaxed);
    }

    #[cfg(debug_assertions)]
    pub(crate) fn accepted(&self) -> u64 {
        self.accepted.load(Ordering::Relaxed)
    }

    #[cfg(debug_assertions)]
    pub(crate) fn delivered(&self) -> u64 {
        self.delivered.load(Ordering::Relaxed)
    }

    pub(crate) fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            accepted: self.accepted.load(Ordering::Relaxed),
            delivered: self.delivered.load(Ordering::Relaxed),
            queued: self.queued.load(Ordering::Relaxed),
            queue_capacity: self.queue_capacity.load(Ordering::Relaxed),
            peak_queued: self.peak_queued.load(Ordering::Relaxed),
        }
    }
}

/// Point-in-time read-out of a session's telemetry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MetricsSnapshot {
    /// Items accepted from the source so far.
    pub accepted: u64,
    /// Items handed to the sink so far.
    pub delivered: u64,
    /// Internal queue depth at the last sample.
    pub queued: u64,
    /// Committed queue storage at the last sample.
    pub queue_capacity: u64,
    /// Highest queue depth observed.
    pub peak_queued: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn peak_tracks_high_water_mark() {
        let m = Metrics::new();
        m.record_depth(3, 8);
        m.record_depth(7, 8);
        m.record_depth(2, 8);

        let snap = m.snapshot();
        assert_eq!(snap.queued, 2);
        assert_eq!(snap.peak_queued, 7);
        assert_eq!(snap.queue_capacity, 8);
    }
}
