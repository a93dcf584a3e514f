//! Port for the per-username lookup cache.

use async_trait::async_trait;

use crate::domain::errors::CacheError;
use crate::domain::models::CachedLookup;

/// Key-value persistence for lookup results, keyed by normalized username.
///
/// The store is optional: when it is not ready the orchestrator treats every
/// request as a forced fresh fetch and never writes. The only
/// concurrency-sensitive guarantee (at most one record per key,
/// last-writer-wins on `fetched_at`) is delegated to the implementation's
/// atomic upsert; no application-level locking happens above this trait.
#[async_trait]
pub trait LookupCache: Send + Sync {
    /// Non-blocking check of connectivity state.
    fn is_ready(&self) -> bool;

    /// Point lookup. "Not found" is `Ok(None)`; only genuine transport or
    /// storage faults are `Err`.
    async fn get(&self, key: &str) -> Result<Option<CachedLookup>, CacheError>;

    /// Insert-or-replace by key. Safe to call concurrently; a race between
    /// two upserts for the same key must never leave two records.
    async fn upsert(&self, record: &CachedLookup) -> Result<(), CacheError>;
}
