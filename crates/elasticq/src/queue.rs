/// Contract for FIFO backing stores.
///
/// Implementations are strictly first-in-first-out: items leave in exactly
/// the order they entered. `capacity()` is advisory - callers may surface it
/// as telemetry but must never base control decisions on it.
///
/// The contract is object-safe, so heterogeneous backings can sit behind a
/// `Box<dyn Queue<T>>` when the concrete type is chosen at runtime.
pub trait Queue<T> {
    /// Number of items currently buffered.
    fn len(&self) -> usize;

    /// Returns `true` if no items are buffered.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Committed storage size, in items. Always `>= len()`. Advisory only.
    fn capacity(&self) -> usize;

    /// Ensures storage for at least `total` items without discarding any
    /// buffered contents. A no-op when `total <= len()` or the request is
    /// already satisfied. Never shrinks.
    fn reserve(&mut self, total: usize);

    /// Appends `item` as the newest entry. Amortized O(1).
    fn push_newest(&mut self, item: T);

    /// Removes and returns the oldest entry.
    ///
    /// # Panics
    ///
    /// Panics if the queue is empty. Popping an empty queue is a programming
    /// error on the caller's side, not a recoverable condition.
    fn pop_oldest(&mut self) -> T;
}
