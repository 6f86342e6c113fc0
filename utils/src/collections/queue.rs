//! FIFO queue engines.
//!
//! [`DoubleBuffer`] is the unsynchronized engine; [`GuardedQueue`] puts one
//! behind a mutex for concurrent callers.

mod double_buffer;
mod guarded_queue;
mod traits;

pub use self::{
  double_buffer::{DoubleBuffer, DEFAULT_CAPACITY_PER_BUFFER, MIN_CAPACITY_PER_BUFFER},
  guarded_queue::GuardedQueue,
  traits::{QueueBase, QueueReader, QueueWriter, SharedQueue},
};
