//! Cache-aside lookup orchestration.
//!
//! The core of the service: given a username and a force-refresh flag,
//! decide whether to serve the stored result, when to treat it as stale,
//! and how to persist a refresh. Upstream fetch failures propagate; summary
//! and store failures degrade in place.

use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use tracing::{debug, instrument, warn};

use crate::domain::errors::LookupError;
use crate::domain::models::{CachedLookup, LookupOutcome, MAX_REPOSITORIES};
use crate::domain::ports::{LookupCache, ProfileSource, Summarizer};

/// How long a cached record stays servable.
pub const DEFAULT_TTL_HOURS: i64 = 12;

/// Upper bound on a single summary generation attempt. A hung summarizer
/// degrades to the fallback string instead of hanging the request.
pub const DEFAULT_SUMMARY_TIMEOUT_SECS: u64 = 60;

/// Substituted whenever summary generation fails; the lookup still succeeds
/// because the profile and repository data remain valid without a narrative.
pub const FALLBACK_SUMMARY: &str =
    "AI could not generate a summary at the moment, but the profile and repositories are shown above.";

/// Normalize a username into a cache key: trimmed and case-folded, so two
/// spellings of the same login resolve to the same record.
pub fn normalize_key(username: &str) -> String {
    username.trim().to_lowercase()
}

/// The cache-aside orchestrator.
///
/// Holds the three collaborators behind their port traits. Each `lookup`
/// call is independent; no cross-request locking happens here. The
/// at-most-one-record-per-key guarantee is delegated to the cache's atomic
/// upsert, and races resolve last-writer-wins on `fetched_at`.
pub struct LookupService {
    source: Arc<dyn ProfileSource>,
    summarizer: Arc<dyn Summarizer>,
    cache: Arc<dyn LookupCache>,
    ttl: chrono::Duration,
    summary_timeout: Duration,
}

impl LookupService {
    pub fn new(
        source: Arc<dyn ProfileSource>,
        summarizer: Arc<dyn Summarizer>,
        cache: Arc<dyn LookupCache>,
    ) -> Self {
        Self {
            source,
            summarizer,
            cache,
            ttl: chrono::Duration::hours(DEFAULT_TTL_HOURS),
            summary_timeout: Duration::from_secs(DEFAULT_SUMMARY_TIMEOUT_SECS),
        }
    }

    /// Override the cache TTL.
    pub fn with_ttl(mut self, ttl: chrono::Duration) -> Self {
        self.ttl = ttl;
        self
    }

    /// Override the summary generation timeout.
    pub fn with_summary_timeout(mut self, timeout: Duration) -> Self {
        self.summary_timeout = timeout;
        self
    }

    /// Look up a username, serving from the cache when a fresh record
    /// exists and `force_refresh` is false.
    ///
    /// Failure behavior:
    /// - profile or repository fetch failure fails the whole lookup and
    ///   leaves any previously cached record untouched (and unserved);
    /// - summary failure or timeout substitutes [`FALLBACK_SUMMARY`];
    /// - a not-ready or erroring store degrades to an uncached fresh fetch
    ///   with no write attempted.
    #[instrument(skip(self), fields(key = tracing::field::Empty))]
    pub async fn lookup(
        &self,
        username: &str,
        force_refresh: bool,
    ) -> Result<LookupOutcome, LookupError> {
        let key = normalize_key(username);
        tracing::Span::current().record("key", key.as_str());

        let mut store_ok = self.cache.is_ready();

        if store_ok && !force_refresh {
            match self.cache.get(&key).await {
                Ok(Some(record)) if record.is_fresh(self.ttl, Utc::now()) => {
                    debug!(fetched_at = %record.fetched_at, "serving cached record");
                    return Ok(LookupOutcome {
                        profile: record.profile,
                        repositories: record.repositories,
                        summary: record.summary,
                        served_from_cache: true,
                    });
                }
                Ok(Some(_)) => debug!("cached record is stale, refreshing"),
                Ok(None) => debug!("no cached record, fetching"),
                Err(err) => {
                    // Degrade to the not-ready path for the rest of this
                    // lookup: no propagation, no later write.
                    warn!(error = %err, "cache read failed, continuing uncached");
                    store_ok = false;
                }
            }
        }

        let profile = self.source.fetch_profile(&key).await?;
        let mut repositories = self.source.fetch_repositories(&key).await?;
        repositories.truncate(MAX_REPOSITORIES);

        let summary = match tokio::time::timeout(
            self.summary_timeout,
            self.summarizer.summarize(&profile, &repositories),
        )
        .await
        {
            Ok(Ok(text)) => text,
            Ok(Err(err)) => {
                warn!(error = %err, "summary generation failed, using fallback");
                FALLBACK_SUMMARY.to_string()
            }
            Err(_) => {
                warn!(
                    timeout_secs = self.summary_timeout.as_secs(),
                    "summary generation timed out, using fallback"
                );
                FALLBACK_SUMMARY.to_string()
            }
        };

        if store_ok {
            let record = CachedLookup {
                key: key.clone(),
                profile: profile.clone(),
                repositories: repositories.clone(),
                summary: summary.clone(),
                fetched_at: Utc::now(),
            };
            if let Err(err) = self.cache.upsert(&record).await {
                warn!(error = %err, "cache write failed, serving uncached result");
            }
        }

        Ok(LookupOutcome {
            profile,
            repositories,
            summary,
            served_from_cache: false,
        })
    }
}
