/// Common trait defining basic queue observations.
///
/// Serves as the base trait for [`QueueWriter`], [`QueueReader`] and [`SharedQueue`].
///
/// # Type Parameters
///
/// * `E` - Type of elements stored in the queue
pub trait QueueBase<E> {
  /// Returns the number of elements currently queued.
  fn len(&self) -> usize;

  /// Returns the number of element slots currently allocated.
  ///
  /// The queue is unbounded; this is not a limit, only the amount of storage
  /// available before the overflow buffer has to grow.
  fn capacity(&self) -> usize;

  /// Checks if the queue is empty.
  fn is_empty(&self) -> bool {
    self.len() == 0
  }
}

/// Write side of a queue used through a mutable reference.
///
/// Used in single-threaded code, or where the caller already holds the lock.
pub trait QueueWriter<E>: QueueBase<E> {
  /// Appends `element` as the new tail. Never fails.
  fn enqueue_mut(&mut self, element: E);
}

/// Read side of a queue used through a mutable reference.
pub trait QueueReader<E>: QueueBase<E> {
  /// Removes and returns the head element, or `None` if the queue is empty.
  fn dequeue_mut(&mut self) -> Option<E>;

  /// Drops every queued element.
  fn clean_up_mut(&mut self);
}

/// Read/write operations through a shared reference.
///
/// Implementations synchronize internally, so a single instance may be used
/// from many threads at once.
pub trait SharedQueue<E>: QueueBase<E> {
  /// Appends `element` as the new tail. Never fails and never waits for space.
  fn enqueue(&self, element: E);

  /// Removes and returns the head element.
  ///
  /// Returns `None` immediately when the queue is empty; it never waits for a
  /// future enqueue.
  fn dequeue(&self) -> Option<E>;

  /// Drops every queued element.
  fn clean_up(&self);
}
