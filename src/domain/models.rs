//! Domain models for profile lookups.
//!
//! Upstream payloads are kept verbatim: the fields the summarizer needs are
//! deserialized into typed members, everything else the API returned lands in
//! a flattened catch-all map and is serialized back out unchanged.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Maximum number of repositories carried through a lookup.
pub const MAX_REPOSITORIES: usize = 5;

/// A developer profile as returned by the upstream source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub login: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub followers: u64,
    #[serde(default)]
    pub public_repos: u64,
    /// Remaining upstream fields, preserved verbatim.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Profile {
    /// Display name, falling back to the login when no name is set.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.login)
    }
}

/// A single repository entry, ordered most-recently-updated first upstream.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RepoSummary {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub stargazers_count: u64,
    /// Remaining upstream fields, preserved verbatim.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// One cached lookup record per normalized username.
///
/// Records are replaced wholesale on refresh; `profile`, `repositories` and
/// `summary` are always written together in a single upsert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CachedLookup {
    /// Normalized username (trimmed, case-folded). The sole lookup key.
    pub key: String,
    pub profile: Profile,
    pub repositories: Vec<RepoSummary>,
    pub summary: String,
    /// When this record was last refreshed from upstream.
    pub fetched_at: DateTime<Utc>,
}

impl CachedLookup {
    /// Whether this record is still servable at `now` given the TTL.
    ///
    /// Expiry is a read-time interpretation of age; stale records stay in
    /// the store until the next refresh replaces them.
    pub fn is_fresh(&self, ttl: chrono::Duration, now: DateTime<Utc>) -> bool {
        now - self.fetched_at < ttl
    }
}

/// The payload returned to the client for a single lookup.
/// Serialize-only: it exists to be written out as the response body.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LookupOutcome {
    pub profile: Profile,
    pub repositories: Vec<RepoSummary>,
    pub summary: String,
    #[serde(rename = "cached")]
    pub served_from_cache: bool,
}
