use std::sync::{Arc, Mutex};

use crate::collections::queue::{DoubleBuffer, QueueBase, SharedQueue, DEFAULT_CAPACITY_PER_BUFFER};


/// A [`DoubleBuffer`] behind a single mutex.
///
/// Every operation takes the lock, runs exactly one buffer operation and
/// releases it when the guard drops, including on unwind. Nothing waits for
/// data: `dequeue` on an empty queue returns `None` straight away. Clones
/// share the same buffer.
#[derive(Debug)]
pub struct GuardedQueue<E> {
  inner: Arc<Mutex<DoubleBuffer<E>>>,
}

impl<E> GuardedQueue<E> {
  pub fn new(capacity_per_buffer: usize) -> Self {
    Self::from_buffer(DoubleBuffer::new(capacity_per_buffer))
  }

  /// Puts an existing buffer, queued elements included, behind the lock.
  pub fn from_buffer(buffer: DoubleBuffer<E>) -> Self {
    Self {
      inner: Arc::new(Mutex::new(buffer)),
    }
  }

  fn with_buffer<R>(&self, f: impl FnOnce(&mut DoubleBuffer<E>) -> R) -> R {
    let mut guard = match self.inner.lock() {
      Ok(guard) => guard,
      Err(poisoned) => {
        // A buffer operation never leaves head/tail inconsistent before it can panic.
        tracing::warn!("GuardedQueue: recovering from a poisoned lock");
        self.inner.clear_poison();
        poisoned.into_inner()
      }
    };
    f(&mut guard)
  }

  pub fn enqueue(&self, element: E) {
    self.with_buffer(|buffer| buffer.enqueue(element));
  }

  pub fn dequeue(&self) -> Option<E> {
    self.with_buffer(|buffer| buffer.dequeue())
  }

  /// See [`DoubleBuffer::dequeue_or_default`].
  pub fn dequeue_or_default(&self) -> (E, bool)
  where
    E: Default, {
    self.with_buffer(|buffer| buffer.dequeue_or_default())
  }

  pub fn clean_up(&self) {
    self.with_buffer(|buffer| buffer.clean_up());
  }

  pub fn len(&self) -> usize {
    self.with_buffer(|buffer| buffer.len())
  }

  pub fn is_empty(&self) -> bool {
    self.with_buffer(|buffer| buffer.is_empty())
  }

  pub fn capacity(&self) -> usize {
    self.with_buffer(|buffer| buffer.capacity())
  }

  pub fn capacity_per_buffer(&self) -> usize {
    self.with_buffer(|buffer| buffer.capacity_per_buffer())
  }
}

impl<E> Clone for GuardedQueue<E> {
  fn clone(&self) -> Self {
    Self {
      inner: self.inner.clone(),
    }
  }
}

impl<E> Default for GuardedQueue<E> {
  fn default() -> Self {
    Self::new(DEFAULT_CAPACITY_PER_BUFFER)
  }
}

impl<E> QueueBase<E> for GuardedQueue<E> {
  fn len(&self) -> usize {
    GuardedQueue::len(self)
  }

  fn capacity(&self) -> usize {
    GuardedQueue::capacity(self)
  }
}

impl<E> SharedQueue<E> for GuardedQueue<E> {
  fn enqueue(&self, element: E) {
    GuardedQueue::enqueue(self, element);
  }

  fn dequeue(&self) -> Option<E> {
    GuardedQueue::dequeue(self)
  }

  fn clean_up(&self) {
    GuardedQueue::clean_up(self);
  }
}

static_assertions::assert_impl_all!(GuardedQueue<u64>: Send, Sync, Clone);
