//! Null lookup cache implementation.
//!
//! Used when no database is configured but the type system requires a
//! LookupCache implementation.

use async_trait::async_trait;

use crate::domain::errors::CacheError;
use crate::domain::models::CachedLookup;

use super::LookupCache;

/// A never-ready cache that stores nothing.
///
/// Reports `is_ready() == false`, so the orchestrator runs every lookup as
/// a forced fresh fetch and never attempts a write.
#[derive(Debug, Clone, Default)]
pub struct NullLookupCache;

impl NullLookupCache {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl LookupCache for NullLookupCache {
    fn is_ready(&self) -> bool {
        false
    }

    async fn get(&self, _key: &str) -> Result<Option<CachedLookup>, CacheError> {
        Ok(None)
    }

    async fn upsert(&self, _record: &CachedLookup) -> Result<(), CacheError> {
        Ok(())
    }
}
