use nexus_queue_utils_rs::{DoubleBuffer, GuardedQueue, QueueBase, QueueReader, QueueWriter};

use crate::factory::QueueKind;


/// A queue built by [`make`](crate::make).
///
/// Operations take `&mut self` so the same calls work for both engines. To
/// share a guarded queue between threads, take the engine out with
/// [`into_guarded`](Self::into_guarded) (or clone it through
/// [`as_guarded`](Self::as_guarded)); its handles are `Clone + Send + Sync`.
#[derive(Debug)]
pub enum Queue<E> {
  Exclusive(DoubleBuffer<E>),
  Guarded(GuardedQueue<E>),
}

impl<E> Queue<E> {
  pub fn kind(&self) -> QueueKind {
    match self {
      Queue::Exclusive(_) => QueueKind::Exclusive,
      Queue::Guarded(_) => QueueKind::Guarded,
    }
  }

  pub fn enqueue(&mut self, element: E) {
    match self {
      Queue::Exclusive(buffer) => buffer.enqueue(element),
      Queue::Guarded(queue) => queue.enqueue(element),
    }
  }

  /// Returns the least recently enqueued element, or `None` if there is none.
  pub fn dequeue(&mut self) -> Option<E> {
    match self {
      Queue::Exclusive(buffer) => buffer.dequeue(),
      Queue::Guarded(queue) => queue.dequeue(),
    }
  }

  /// Returns `(element, true)`, or `(E::default(), false)` on an empty queue.
  pub fn dequeue_or_default(&mut self) -> (E, bool)
  where
    E: Default, {
    match self {
      Queue::Exclusive(buffer) => buffer.dequeue_or_default(),
      Queue::Guarded(queue) => queue.dequeue_or_default(),
    }
  }

  pub fn clean_up(&mut self) {
    match self {
      Queue::Exclusive(buffer) => buffer.clean_up(),
      Queue::Guarded(queue) => queue.clean_up(),
    }
  }

  pub fn len(&self) -> usize {
    match self {
      Queue::Exclusive(buffer) => buffer.len(),
      Queue::Guarded(queue) => queue.len(),
    }
  }

  pub fn is_empty(&self) -> bool {
    self.len() == 0
  }

  pub fn capacity(&self) -> usize {
    match self {
      Queue::Exclusive(buffer) => buffer.capacity(),
      Queue::Guarded(queue) => queue.capacity(),
    }
  }

  pub fn as_guarded(&self) -> Option<&GuardedQueue<E>> {
    match self {
      Queue::Guarded(queue) => Some(queue),
      Queue::Exclusive(_) => None,
    }
  }

  pub fn into_guarded(self) -> Result<GuardedQueue<E>, Self> {
    match self {
      Queue::Guarded(queue) => Ok(queue),
      other => Err(other),
    }
  }

  pub fn into_exclusive(self) -> Result<DoubleBuffer<E>, Self> {
    match self {
      Queue::Exclusive(buffer) => Ok(buffer),
      other => Err(other),
    }
  }
}

impl<E> QueueBase<E> for Queue<E> {
  fn len(&self) -> usize {
    Queue::len(self)
  }

  fn capacity(&self) -> usize {
    Queue::capacity(self)
  }
}

impl<E> QueueWriter<E> for Queue<E> {
  fn enqueue_mut(&mut self, element: E) {
    self.enqueue(element);
  }
}

impl<E> QueueReader<E> for Queue<E> {
  fn dequeue_mut(&mut self) -> Option<E> {
    self.dequeue()
  }

  fn clean_up_mut(&mut self) {
    self.clean_up();
  }
}
