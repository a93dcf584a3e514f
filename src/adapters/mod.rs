//! Infrastructure adapters implementing the domain ports.

pub mod github;
pub mod sqlite;
pub mod summary;
