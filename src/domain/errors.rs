//! Error taxonomy for the lookup pipeline.
//!
//! Each boundary gets its own enum. Only profile/repository fetch failures
//! propagate to the caller; everything else is recovered locally by the
//! orchestrator.

use thiserror::Error;

/// Failures from the upstream profile source.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("GitHub user not found: {0}")]
    NotFound(String),

    #[error("upstream request failed: {0}")]
    Transport(String),
}

/// Failures from the summary generator.
///
/// Never surfaced to the caller; the orchestrator substitutes a fixed
/// fallback string and the lookup still succeeds.
#[derive(Debug, Error)]
pub enum SummaryError {
    #[error("summarizer credential is not configured")]
    MissingCredentials,

    #[error("model returned no content")]
    EmptyResponse,

    #[error("summarizer request failed: {0}")]
    Transport(String),
}

/// Failures from the cache store.
///
/// "Not found" is `Ok(None)` on reads, never an error. The orchestrator
/// treats any `CacheError` the same as a not-ready store.
#[derive(Debug, Error)]
pub enum CacheError {
    #[error("cache store unavailable: {0}")]
    Unavailable(String),

    #[error("cache record corrupt: {0}")]
    Corrupt(String),
}

/// Failures a lookup surfaces to the caller.
#[derive(Debug, Error)]
pub enum LookupError {
    #[error("GitHub user not found: {0}")]
    ProfileNotFound(String),

    #[error("upstream unavailable: {0}")]
    Upstream(String),
}

impl From<SourceError> for LookupError {
    fn from(err: SourceError) -> Self {
        match err {
            SourceError::NotFound(key) => LookupError::ProfileNotFound(key),
            SourceError::Transport(msg) => LookupError::Upstream(msg),
        }
    }
}
