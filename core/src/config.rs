use std::fmt::{Display, Formatter};
use std::ops::{BitOr, BitOrAssign};

use serde::{Deserialize, Serialize};

use crate::config_option::ConfigOption;
use crate::factory::{QueueFactory, QueueKind};
use crate::make_error::MakeError;


/// Initial total capacity of [`QueueConfig::default`].
pub const DEFAULT_INITIAL_CAPACITY: isize = 4;

/// Access-pattern flags of a queue configuration.
///
/// Serialized as the raw bit pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QueueFlags(u64);

impl QueueFlags {
  pub const EMPTY: Self = Self(0);
  /// The queue is only ever used from one thread at a time.
  /// Excludes [`MULTI_READER`](Self::MULTI_READER) and [`MULTI_WRITER`](Self::MULTI_WRITER).
  pub const NON_CONCURRENT: Self = Self(1 << 0);
  /// Several threads may dequeue concurrently.
  pub const MULTI_READER: Self = Self(1 << 1);
  /// Several threads may enqueue concurrently.
  pub const MULTI_WRITER: Self = Self(1 << 2);
  /// Forces the selection policy to report that no engine exists for this
  /// configuration. Only useful in tests.
  pub const NOT_IMPLEMENTED: Self = Self(1 << 63);

  const NAMED: [(Self, &'static str); 4] = [
    (Self::NON_CONCURRENT, "NON_CONCURRENT"),
    (Self::MULTI_READER, "MULTI_READER"),
    (Self::MULTI_WRITER, "MULTI_WRITER"),
    (Self::NOT_IMPLEMENTED, "NOT_IMPLEMENTED"),
  ];

  pub const fn from_bits(bits: u64) -> Self {
    Self(bits)
  }

  pub const fn bits(self) -> u64 {
    self.0
  }

  pub const fn is_empty(self) -> bool {
    self.0 == 0
  }

  /// Returns `true` if every flag in `other` is set.
  pub const fn contains(self, other: Self) -> bool {
    self.0 & other.0 == other.0
  }

  /// Returns `true` if any flag in `other` is set.
  pub const fn intersects(self, other: Self) -> bool {
    self.0 & other.0 != 0
  }

  pub fn insert(&mut self, other: Self) {
    self.0 |= other.0;
  }

  pub fn remove(&mut self, other: Self) {
    self.0 &= !other.0;
  }
}

impl BitOr for QueueFlags {
  type Output = QueueFlags;

  fn bitor(self, rhs: Self) -> Self::Output {
    Self(self.0 | rhs.0)
  }
}

impl BitOrAssign for QueueFlags {
  fn bitor_assign(&mut self, rhs: Self) {
    self.insert(rhs);
  }
}

impl Display for QueueFlags {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    if self.is_empty() {
      return write!(f, "EMPTY");
    }
    let mut rest = *self;
    let mut first = true;
    for (flag, name) in Self::NAMED {
      if self.contains(flag) {
        if !first {
          write!(f, " | ")?;
        }
        write!(f, "{}", name)?;
        rest.remove(flag);
        first = false;
      }
    }
    if !rest.is_empty() {
      if !first {
        write!(f, " | ")?;
      }
      write!(f, "{:#x}", rest.0)?;
    }
    Ok(())
  }
}

/// Characteristics of a queue requested from [`make`](crate::make).
///
/// Every fluent setter leaves a valid configuration behind; only direct
/// manipulation of [`flags`](Self::flags) can produce a contradictory one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QueueConfig {
  pub flags: QueueFlags,
  initial_capacity: isize,
}

impl Default for QueueConfig {
  fn default() -> Self {
    Self {
      flags: QueueFlags::MULTI_READER | QueueFlags::MULTI_WRITER,
      initial_capacity: DEFAULT_INITIAL_CAPACITY,
    }
  }
}

impl QueueConfig {
  /// Applies `options` in order on top of [`QueueConfig::default`].
  pub fn from(options: impl IntoIterator<Item = ConfigOption>) -> QueueConfig {
    let mut config = QueueConfig::default();
    for option in options {
      option.apply(&mut config);
    }
    config
  }

  pub fn initial_capacity(&self) -> isize {
    self.initial_capacity
  }

  /// Selects an engine that is only safe for sequential access.
  pub fn non_concurrent(mut self) -> Self {
    self.flags.remove(QueueFlags::MULTI_READER | QueueFlags::MULTI_WRITER);
    self.flags.insert(QueueFlags::NON_CONCURRENT);
    self
  }

  pub fn single_reader(mut self) -> Self {
    self.flags.remove(QueueFlags::MULTI_READER);
    self
  }

  pub fn multi_reader(mut self) -> Self {
    self.flags.remove(QueueFlags::NON_CONCURRENT);
    self.flags.insert(QueueFlags::MULTI_READER);
    self
  }

  pub fn single_writer(mut self) -> Self {
    self.flags.remove(QueueFlags::MULTI_WRITER);
    self
  }

  pub fn multi_writer(mut self) -> Self {
    self.flags.remove(QueueFlags::NON_CONCURRENT);
    self.flags.insert(QueueFlags::MULTI_WRITER);
    self
  }

  /// Sets the total initial capacity. Negative or very small values are
  /// accepted and raised to the engine minimum when the queue is built.
  pub fn with_initial_capacity(mut self, initial_capacity: isize) -> Self {
    self.initial_capacity = initial_capacity;
    self
  }

  pub fn is_valid(&self) -> bool {
    !(self.flags.contains(QueueFlags::NON_CONCURRENT)
      && self
        .flags
        .intersects(QueueFlags::MULTI_READER | QueueFlags::MULTI_WRITER))
  }

  pub fn validate(&self) -> Result<(), MakeError> {
    if self.is_valid() {
      Ok(())
    } else {
      Err(MakeError::InvalidConfig { flags: self.flags })
    }
  }

  /// Resolves this configuration to the engine the selection policy would
  /// build, without building it.
  pub fn factory(&self) -> Result<QueueFactory, MakeError> {
    self.validate()?;
    if self.flags.contains(QueueFlags::NOT_IMPLEMENTED) {
      return Err(MakeError::NotImplemented { flags: self.flags });
    }
    let kind = if self.flags.contains(QueueFlags::NON_CONCURRENT) {
      QueueKind::Exclusive
    } else {
      QueueKind::Guarded
    };
    Ok(QueueFactory::new(kind, self.initial_capacity))
  }
}
