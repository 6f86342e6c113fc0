//! Typed FIFO queues whose engine is picked from a configuration.
//!
//! ```
//! use nexus_queue_core_rs::{make, QueueConfig};
//!
//! let mut queue = make::<u32>(Some(&QueueConfig::default().non_concurrent())).unwrap();
//! queue.enqueue(1);
//! queue.enqueue(2);
//! assert_eq!(queue.dequeue(), Some(1));
//! assert_eq!(queue.dequeue(), Some(2));
//! assert_eq!(queue.dequeue_or_default(), (0, false));
//! ```

pub mod config;
pub mod config_option;
pub mod factory;
pub mod make_error;
pub mod queue;
pub mod version;

pub use config::{QueueConfig, QueueFlags, DEFAULT_INITIAL_CAPACITY};
pub use config_option::ConfigOption;
pub use factory::{capacity_per_buffer, make, QueueFactory, QueueKind};
pub use make_error::MakeError;
pub use queue::Queue;
pub use version::{VERSION, VERSION_MAJOR, VERSION_MICRO, VERSION_MINOR};

pub use nexus_queue_utils_rs::{
  DoubleBuffer, GuardedQueue, QueueBase, QueueReader, QueueWriter, SharedQueue, MIN_CAPACITY_PER_BUFFER,
};
