//! Business logic coordination.

pub mod lookup;

pub use lookup::{normalize_key, LookupService, FALLBACK_SUMMARY};
