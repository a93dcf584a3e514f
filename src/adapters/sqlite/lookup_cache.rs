//! SQLite implementation of the LookupCache.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::SqlitePool;

use crate::domain::errors::CacheError;
use crate::domain::models::{CachedLookup, Profile, RepoSummary};
use crate::domain::ports::LookupCache;

#[derive(Clone)]
pub struct SqliteLookupCache {
    pool: SqlitePool,
}

impl SqliteLookupCache {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct LookupRow {
    key: String,
    profile: String,
    repositories: String,
    summary: String,
    fetched_at: String,
}

impl TryFrom<LookupRow> for CachedLookup {
    type Error = CacheError;

    fn try_from(row: LookupRow) -> Result<Self, Self::Error> {
        let profile: Profile = serde_json::from_str(&row.profile)
            .map_err(|e| CacheError::Corrupt(format!("profile for {}: {e}", row.key)))?;
        let repositories: Vec<RepoSummary> = serde_json::from_str(&row.repositories)
            .map_err(|e| CacheError::Corrupt(format!("repositories for {}: {e}", row.key)))?;
        let fetched_at = DateTime::parse_from_rfc3339(&row.fetched_at)
            .map_err(|e| CacheError::Corrupt(format!("fetched_at for {}: {e}", row.key)))?
            .with_timezone(&Utc);

        Ok(CachedLookup {
            key: row.key,
            profile,
            repositories,
            summary: row.summary,
            fetched_at,
        })
    }
}

#[async_trait]
impl LookupCache for SqliteLookupCache {
    fn is_ready(&self) -> bool {
        !self.pool.is_closed()
    }

    async fn get(&self, key: &str) -> Result<Option<CachedLookup>, CacheError> {
        let row: Option<LookupRow> = sqlx::query_as(
            "SELECT key, profile, repositories, summary, fetched_at
             FROM lookup_cache WHERE key = ?",
        )
        .bind(key)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| CacheError::Unavailable(e.to_string()))?;

        row.map(CachedLookup::try_from).transpose()
    }

    async fn upsert(&self, record: &CachedLookup) -> Result<(), CacheError> {
        let profile = serde_json::to_string(&record.profile)
            .map_err(|e| CacheError::Corrupt(e.to_string()))?;
        let repositories = serde_json::to_string(&record.repositories)
            .map_err(|e| CacheError::Corrupt(e.to_string()))?;

        // Single-statement upsert: the primary key keeps one row per key
        // under concurrent writers, last writer wins on every column.
        sqlx::query(
            "INSERT INTO lookup_cache (key, profile, repositories, summary, fetched_at)
             VALUES (?, ?, ?, ?, ?)
             ON CONFLICT(key) DO UPDATE SET
                profile = excluded.profile,
                repositories = excluded.repositories,
                summary = excluded.summary,
                fetched_at = excluded.fetched_at",
        )
        .bind(&record.key)
        .bind(&profile)
        .bind(&repositories)
        .bind(&record.summary)
        .bind(record.fetched_at.to_rfc3339())
        .execute(&self.pool)
        .await
        .map_err(|e| CacheError::Unavailable(e.to_string()))?;

        Ok(())
    }
}
