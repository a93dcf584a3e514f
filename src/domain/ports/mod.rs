//! Port trait definitions (hexagonal architecture).
//!
//! Async trait interfaces that adapters implement:
//! - `ProfileSource`: upstream profile and repository retrieval
//! - `Summarizer`: natural-language summary generation
//! - `LookupCache`: per-username result persistence
//!
//! The orchestrator depends on these contracts only, so tests substitute
//! in-memory fakes with explicitly controlled readiness and contents.

pub mod lookup_cache;
pub mod null_cache;
pub mod profile_source;
pub mod summarizer;

pub use lookup_cache::LookupCache;
pub use null_cache::NullLookupCache;
pub use profile_source::ProfileSource;
pub use summarizer::Summarizer;
