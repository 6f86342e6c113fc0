//! Version of the nexus-queue crates, taken from the package metadata.

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const VERSION_MAJOR: &str = env!("CARGO_PKG_VERSION_MAJOR");
pub const VERSION_MINOR: &str = env!("CARGO_PKG_VERSION_MINOR");
/// Bumped with every release.
pub const VERSION_MICRO: &str = env!("CARGO_PKG_VERSION_PATCH");
