//! Error types for buffered-channel operations.

use thiserror::Error;

/// Errors from the non-blocking read path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TryRecvError {
    /// No item is buffered right now; more may still arrive.
    #[error("no buffered item is currently available")]
    Empty,

    /// The source has closed and every buffered item has been delivered.
    #[error("buffering session terminated and fully drained")]
    Disconnected,
}

impl TryRecvError {
    /// Returns `true` if retrying later may yield an item.
    #[inline]
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// Returns `true` if the session is permanently finished.
    #[inline]
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Disconnected)
    }
}
