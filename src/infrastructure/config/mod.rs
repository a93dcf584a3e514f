//! Configuration loading with hierarchical merging.

mod loader;

pub use loader::{CacheConfig, Config, ConfigError, ConfigLoader, DatabaseConfig, ServerConfig};
