use thiserror::Error;

use crate::config::QueueFlags;

/// Reasons [`make`](crate::make) refuses to build a queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MakeError {
  /// The requested access patterns contradict each other.
  #[error("invalid queue configuration: {flags} (NON_CONCURRENT excludes MULTI_READER and MULTI_WRITER)")]
  InvalidConfig { flags: QueueFlags },
  /// The configuration is consistent but no engine exists for it.
  #[error("queue configuration has not been implemented yet: {flags}")]
  NotImplemented { flags: QueueFlags },
}
