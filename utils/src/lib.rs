//! Queue engines shared by the nexus-queue crates.

pub mod collections;

pub use collections::{
  DoubleBuffer, GuardedQueue, QueueBase, QueueReader, QueueWriter, SharedQueue, DEFAULT_CAPACITY_PER_BUFFER,
  MIN_CAPACITY_PER_BUFFER,
};
