//! Debug assertion macros for adapter invariants.
//!
//! Runtime checks for the buffering protocol, active only in debug builds
//! (`#[cfg(debug_assertions)]`) - zero overhead in release builds.
//!
//! One invariant has no macro here because it is enforced by construction:
//! the two-worker delivery path pops under the lock but always releases it
//! before awaiting the sink send, so a slow consumer can never starve intake.

// =============================================================================
// INV-BUF-01: Conservation
// =============================================================================

/// Assert item conservation at session quiescence.
///
/// **Invariant**: once staged and queued counts are zero,
/// `accepted == delivered`
///
/// Used in: worker terminal paths, after the final handoff
macro_rules! debug_assert_conserved {
    ($accepted:expr, $delivered:expr) => {
        debug_assert!(
            $accepted == $delivered,
            "INV-BUF-01 violated: accepted {} items but delivered {}",
            $accepted,
            $delivered
        )
    };
}

// =============================================================================
// INV-BUF-02: Drain Before Close
// =============================================================================

/// Assert that the sink only closes after a full drain.
///
/// **Invariant**: `sink closes ⇒ staged is empty ∧ queue is empty`
///
/// Used in: worker terminal paths, before dropping the sink sender
macro_rules! debug_assert_drained {
    ($staged_empty:expr, $queue_len:expr) => {
        debug_assert!(
            $staged_empty && $queue_len == 0,
            "INV-BUF-02 violated: closing sink with staged_empty = {} and {} queued items",
            $staged_empty,
            $queue_len
        )
    };
}

// =============================================================================
// INV-BUF-03: Fresh Barrier Per Waiting Episode
// =============================================================================

/// Assert that a wake barrier is armed only on an empty queue, and never on
/// top of a previous one.
///
/// **Invariant**: `arm(barrier) ⇒ queue is empty ∧ no barrier armed`
///
/// A one-shot channel per episode means a stale fire from an earlier episode
/// structurally cannot be misattributed to a new wait.
///
/// Used in: two-worker delivery loop, while holding the state lock
macro_rules! debug_assert_barrier_fresh {
    ($queue_len:expr, $already_armed:expr) => {
        debug_assert!(
            $queue_len == 0 && !$already_armed,
            "INV-BUF-03 violated: arming barrier with {} queued items (already armed: {})",
            $queue_len,
            $already_armed
        )
    };
}

// =============================================================================
// Re-exports for crate-internal use
// =============================================================================

pub(crate) use debug_assert_barrier_fresh;
pub(crate) use debug_assert_conserved;
pub(crate) use debug_assert_drained;
