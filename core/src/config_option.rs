use crate::config::QueueConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigOption {
  NonConcurrent,
  SingleReader,
  MultiReader,
  SingleWriter,
  MultiWriter,
  SetInitialCapacity(isize),
}

impl ConfigOption {
  pub fn apply(&self, config: &mut QueueConfig) {
    *config = match self {
      ConfigOption::NonConcurrent => config.non_concurrent(),
      ConfigOption::SingleReader => config.single_reader(),
      ConfigOption::MultiReader => config.multi_reader(),
      ConfigOption::SingleWriter => config.single_writer(),
      ConfigOption::MultiWriter => config.multi_writer(),
      ConfigOption::SetInitialCapacity(initial_capacity) => config.with_initial_capacity(*initial_capacity),
    };
  }

  pub fn with_initial_capacity(initial_capacity: isize) -> ConfigOption {
    ConfigOption::SetInitialCapacity(initial_capacity)
  }
}
