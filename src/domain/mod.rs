//! Domain layer for the gitbrief lookup service.
//!
//! Core models, error taxonomy, and the port traits adapters implement.

pub mod errors;
pub mod models;
pub mod ports;

pub use errors::{CacheError, LookupError, SourceError, SummaryError};
pub use models::{CachedLookup, LookupOutcome, Profile, RepoSummary, MAX_REPOSITORIES};
