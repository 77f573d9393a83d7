//! Output handle implementing `futures::Stream`.

use crate::error::TryRecvError;
use crate::metrics::{Metrics, MetricsSnapshot};
use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll};
use tokio::sync::mpsc;

use futures_core::Stream;
use pin_project_lite::pin_project;

pin_project! {
    /// Reading end of a buffering session.
    ///
    /// Items arrive in source order; `recv` returns `None` exactly once the
    /// source has closed and every buffered item has been delivered.
    ///
    /// Dropping the receiver tears the session down: the worker task(s)
    /// observe the closed sink and exit, discarding anything still buffered.
    pub struct BufReceiver<T> {
        inner: mpsc::Receiver<T>,
        metrics: Arc<Metrics>,
    }
}

impl<T: Send + 'static> BufReceiver<T> {
    pub(crate) fn new(inner: mpsc::Receiver<T>, metrics: Arc<Metrics>) -> Self {
        Self { inner, metrics }
    }

    /// Receives the next item, waiting if none is buffered yet.
    ///
    /// Returns `None` once the session has terminated and fully drained.
    pub async fn recv(&mut self) -> Option<T> {
        self.inner.recv().await
    }

    /// Attempts to receive without waiting.
    pub fn try_recv(&mut self) -> Result<T, TryRecvError> {
        self.inner.try_recv().map_err(|err| match err {
            mpsc::error::TryRecvError::Empty => TryRecvError::Empty,
            mpsc::error::TryRecvError::Disconnected => TryRecvError::Disconnected,
        })
    }

    /// Stops the session early: the workers observe the closed sink the next
    /// time they try to hand an item over, and exit.
    ///
    /// Items already handed off can still be received after this call.
    pub fn close(&mut self) {
        self.inner.close();
    }

    /// Point-in-time telemetry for this session.
    pub fn metrics(&self) -> MetricsSnapshot {
        self.metrics.snapshot()
    }
}

impl<T: Send + 'static> Stream for BufReceiver<T> {
    type Item = T;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        self.project().inner.poll_recv(cx)
    }
}
