//! SQLite-backed persistence adapters.

pub mod connection;
pub mod lookup_cache;
pub mod migrations;

pub use connection::{create_pool, create_test_pool, verify_connection, ConnectionError};
pub use lookup_cache::SqliteLookupCache;
pub use migrations::{MigrationError, Migrator};
