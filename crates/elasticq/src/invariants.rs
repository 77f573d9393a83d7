//! Debug assertion macros for queue invariants.
//!
//! Runtime checks for the invariants every backing must uphold. They are only
//! active in debug builds (`#[cfg(debug_assertions)]`), so there is zero
//! overhead in release builds.
//!
//! Used by all four backings.

// =============================================================================
// INV-Q-01: Capacity Covers Length
// =============================================================================

/// Assert that committed storage covers the buffered item count.
///
/// **Invariant**: `capacity() >= len()` after every mutation
macro_rules! debug_assert_capacity_covers_len {
    ($capacity:expr, $len:expr) => {
        debug_assert!(
            $capacity >= $len,
            "INV-Q-01 violated: capacity {} below len {}",
            $capacity,
            $len
        )
    };
}

// =============================================================================
// INV-Q-02: Initialized Slot Range (ring storage)
// =============================================================================

/// Assert that a ring slot being read lies inside the live range.
///
/// **Invariant**: `buffer[i] is initialized ⟺ i ∈ [head, head + len)` (mod cap)
///
/// Used in: `RingQueue::pop_oldest()` before `assume_init_read()`
macro_rules! debug_assert_live_slot {
    ($offset:expr, $len:expr) => {
        debug_assert!(
            $offset < $len,
            "INV-Q-02 violated: reading slot at offset {} outside live range of {} items",
            $offset,
            $len
        )
    };
}

// =============================================================================
// INV-Q-03: Chain Bookkeeping (linked storage)
// =============================================================================

/// Assert that an empty chain and a null tail pointer coincide.
///
/// **Invariant**: `head.is_none() ⟺ tail.is_null()`
///
/// Used in: linked backings after unlinking the head node
macro_rules! debug_assert_chain_consistent {
    ($head_none:expr, $tail_null:expr) => {
        debug_assert!(
            $head_none == $tail_null,
            "INV-Q-03 violated: head.is_none() = {} but tail.is_null() = {}",
            $head_none,
            $tail_null
        )
    };
}

// =============================================================================
// Re-exports for crate-internal use
// =============================================================================

pub(crate) use debug_assert_capacity_covers_len;
pub(crate) use debug_assert_chain_consistent;
pub(crate) use debug_assert_live_slot;
