use nexus_queue_utils_rs::{DoubleBuffer, GuardedQueue, MIN_CAPACITY_PER_BUFFER};

use crate::config::QueueConfig;
use crate::make_error::MakeError;
use crate::queue::Queue;


/// Engine chosen by the selection policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QueueKind {
  /// Bare [`DoubleBuffer`], for sequential access only.
  Exclusive,
  /// [`GuardedQueue`], for any mix of concurrent readers and writers.
  Guarded,
}

/// A resolved build plan: which engine, and how large each of its two
/// buffers starts out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueueFactory {
  kind: QueueKind,
  capacity_per_buffer: usize,
}

impl QueueFactory {
  /// Splits `initial_capacity` evenly between the two buffers.
  pub fn new(kind: QueueKind, initial_capacity: isize) -> Self {
    Self {
      kind,
      capacity_per_buffer: capacity_per_buffer(initial_capacity),
    }
  }

  pub fn kind(&self) -> QueueKind {
    self.kind
  }

  pub fn capacity_per_buffer(&self) -> usize {
    self.capacity_per_buffer
  }

  pub fn build<E>(&self) -> Queue<E> {
    match self.kind {
      QueueKind::Exclusive => Queue::Exclusive(DoubleBuffer::new(self.capacity_per_buffer)),
      QueueKind::Guarded => Queue::Guarded(GuardedQueue::new(self.capacity_per_buffer)),
    }
  }
}

/// Half of the total capacity, and never less than
/// [`MIN_CAPACITY_PER_BUFFER`] however small or negative the request.
pub fn capacity_per_buffer(initial_capacity: isize) -> usize {
  let half = initial_capacity / 2;
  if half < MIN_CAPACITY_PER_BUFFER as isize {
    MIN_CAPACITY_PER_BUFFER
  } else {
    half as usize
  }
}

/// Builds a queue for `config`, or for [`QueueConfig::default`] when `None`.
///
/// # Errors
///
/// * [`MakeError::InvalidConfig`] - `NON_CONCURRENT` combined with a multi flag
/// * [`MakeError::NotImplemented`] - `NOT_IMPLEMENTED` set on a valid configuration
pub fn make<E>(config: Option<&QueueConfig>) -> Result<Queue<E>, MakeError> {
  let config = config.copied().unwrap_or_default();
  let factory = config.factory().map_err(|err| {
    tracing::debug!("make: rejected configuration: {}", err);
    err
  })?;
  tracing::debug!(
    "make: kind = {:?}, capacity_per_buffer = {}",
    factory.kind(),
    factory.capacity_per_buffer()
  );
  Ok(factory.build())
}
