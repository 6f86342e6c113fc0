use crate::collections::queue::{QueueBase, QueueReader, QueueWriter};

#[cfg(test)]
mod tests;

/// Smallest number of slots either buffer is allocated with.
pub const MIN_CAPACITY_PER_BUFFER: usize = 1;

/// Per-buffer capacity used by [`DoubleBuffer::default`].
pub const DEFAULT_CAPACITY_PER_BUFFER: usize = 2;

/// Unbounded FIFO storage built from two buffers that swap roles on wrap.
///
/// Positions are addressed in the logical concatenation `primary ++ secondary`.
/// `head` always lies inside `primary`; once it walks off the end of
/// `primary`, the buffers are exchanged and both indices shift down by the old
/// primary length. The drained primary becomes the new overflow target, so
/// wrapping never moves a live element. `secondary` only grows when `tail`
/// runs past both buffers.
///
/// There is no internal synchronization. Mutation requires `&mut self`; see
/// [`GuardedQueue`](super::GuardedQueue) for the lock-protected variant.
#[derive(Debug, Clone)]
pub struct DoubleBuffer<E> {
  primary: Vec<Option<E>>,
  secondary: Vec<Option<E>>,
  head: usize,
  tail: usize,
  capacity_per_buffer: usize,
}

impl<E> DoubleBuffer<E> {
  /// Creates an empty queue with both buffers holding `capacity_per_buffer`
  /// slots, raised to [`MIN_CAPACITY_PER_BUFFER`] if smaller.
  pub fn new(capacity_per_buffer: usize) -> Self {
    let capacity_per_buffer = capacity_per_buffer.max(MIN_CAPACITY_PER_BUFFER);
    Self {
      primary: Self::alloc_slots(capacity_per_buffer),
      secondary: Self::alloc_slots(capacity_per_buffer),
      head: 0,
      tail: 0,
      capacity_per_buffer,
    }
  }

  fn alloc_slots(capacity: usize) -> Vec<Option<E>> {
    let mut slots = Vec::with_capacity(capacity);
    slots.resize_with(capacity, || None);
    slots
  }

  /// The per-buffer capacity this queue was created with.
  pub fn capacity_per_buffer(&self) -> usize {
    self.capacity_per_buffer
  }

  pub fn len(&self) -> usize {
    self.tail - self.head
  }

  pub fn is_empty(&self) -> bool {
    self.head == self.tail
  }

  /// Total number of allocated slots across both buffers.
  pub fn capacity(&self) -> usize {
    self.primary.len() + self.secondary.len()
  }

  /// Appends `element` at the tail, growing the overflow buffer if both
  /// buffers are occupied up to `tail`.
  pub fn enqueue(&mut self, element: E) {
    let primary_len = self.primary.len();
    if self.tail < primary_len {
      self.primary[self.tail] = Some(element);
    } else {
      let offset = self.tail - primary_len;
      if offset < self.secondary.len() {
        self.secondary[offset] = Some(element);
      } else {
        tracing::trace!(
          "DoubleBuffer::enqueue: grow secondary: len = {}, primary_len = {}",
          self.secondary.len() + 1,
          primary_len
        );
        self.secondary.push(Some(element));
      }
    }
    self.tail += 1;
  }

  /// Removes the head element.
  ///
  /// The vacated slot is cleared so the queue stops owning the element as
  /// soon as it is returned. Returns `None` without touching any state when
  /// the queue is empty.
  pub fn dequeue(&mut self) -> Option<E> {
    if self.head == self.tail {
      return None;
    }
    let element = self.primary[self.head].take();
    debug_assert!(element.is_some(), "live slot at head {} was empty", self.head);
    self.head += 1;
    if self.head == self.primary.len() {
      self.swap_buffers();
    }
    element
  }

  /// Like [`dequeue`](Self::dequeue), but reports emptiness as
  /// `(E::default(), false)` instead of `None`.
  pub fn dequeue_or_default(&mut self) -> (E, bool)
  where
    E: Default, {
    match self.dequeue() {
      Some(element) => (element, true),
      None => (E::default(), false),
    }
  }

  /// Drops every queued element and rewinds both indices. Both buffers keep
  /// their current lengths.
  ///
  /// The queue is already empty and consistent when the first element is
  /// dropped, so a panicking `Drop` cannot leave counted slots behind.
  pub fn clean_up(&mut self) {
    let primary_len = self.primary.len();
    let secondary_len = self.secondary.len();
    let primary = std::mem::replace(&mut self.primary, Self::alloc_slots(primary_len));
    let secondary = std::mem::replace(&mut self.secondary, Self::alloc_slots(secondary_len));
    self.head = 0;
    self.tail = 0;
    drop(primary);
    drop(secondary);
  }

  fn swap_buffers(&mut self) {
    let shift = self.primary.len();
    self.head -= shift;
    self.tail -= shift;
    std::mem::swap(&mut self.primary, &mut self.secondary);
    tracing::trace!(
      "DoubleBuffer::swap_buffers: primary_len = {}, secondary_len = {}, len = {}",
      self.primary.len(),
      self.secondary.len(),
      self.tail - self.head
    );
  }
}

impl<E> Default for DoubleBuffer<E> {
  fn default() -> Self {
    Self::new(DEFAULT_CAPACITY_PER_BUFFER)
  }
}

impl<E> QueueBase<E> for DoubleBuffer<E> {
  fn len(&self) -> usize {
    DoubleBuffer::len(self)
  }

  fn capacity(&self) -> usize {
    DoubleBuffer::capacity(self)
  }
}

impl<E> QueueWriter<E> for DoubleBuffer<E> {
  fn enqueue_mut(&mut self, element: E) {
    self.enqueue(element);
  }
}

impl<E> QueueReader<E> for DoubleBuffer<E> {
  fn dequeue_mut(&mut self) -> Option<E> {
    self.dequeue()
  }

  fn clean_up_mut(&mut self) {
    self.clean_up();
  }
}
