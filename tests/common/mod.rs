//! Shared test fakes and fixture builders.
//!
//! The fakes implement the domain ports with explicitly controlled
//! readiness, contents, and failure modes, plus call counters so tests can
//! assert which collaborators were actually hit.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use serde_json::json;

use gitbrief::domain::errors::{CacheError, SourceError, SummaryError};
use gitbrief::domain::models::{CachedLookup, Profile, RepoSummary};
use gitbrief::domain::ports::{LookupCache, ProfileSource, Summarizer};

pub fn sample_profile(login: &str) -> Profile {
    serde_json::from_value(json!({
        "login": login,
        "name": "The Octocat",
        "bio": "Mascot",
        "location": "San Francisco",
        "followers": 4000,
        "public_repos": 8,
        "avatar_url": "https://example.invalid/avatar.png"
    }))
    .unwrap()
}

pub fn sample_repos(count: usize) -> Vec<RepoSummary> {
    (0..count)
        .map(|i| {
            serde_json::from_value(json!({
                "name": format!("repo-{i}"),
                "description": format!("Repository number {i}"),
                "language": "Rust",
                "stargazers_count": i * 10,
                "fork": false
            }))
            .unwrap()
        })
        .collect()
}

/// How the fake profile source behaves.
pub enum SourceMode {
    Ok,
    ProfileNotFound,
    ProfileTransportError,
    RepoTransportError,
}

pub struct FakeSource {
    pub mode: SourceMode,
    pub repo_count: usize,
    pub profile_calls: AtomicUsize,
    pub repo_calls: AtomicUsize,
}

impl FakeSource {
    pub fn new(repo_count: usize) -> Self {
        Self {
            mode: SourceMode::Ok,
            repo_count,
            profile_calls: AtomicUsize::new(0),
            repo_calls: AtomicUsize::new(0),
        }
    }

    pub fn with_mode(mut self, mode: SourceMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn profile_fetches(&self) -> usize {
        self.profile_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ProfileSource for FakeSource {
    async fn fetch_profile(&self, key: &str) -> Result<Profile, SourceError> {
        self.profile_calls.fetch_add(1, Ordering::SeqCst);
        match self.mode {
            SourceMode::ProfileNotFound => Err(SourceError::NotFound(key.to_string())),
            SourceMode::ProfileTransportError => {
                Err(SourceError::Transport("connection reset".to_string()))
            }
            _ => Ok(sample_profile(key)),
        }
    }

    async fn fetch_repositories(&self, _key: &str) -> Result<Vec<RepoSummary>, SourceError> {
        self.repo_calls.fetch_add(1, Ordering::SeqCst);
        match self.mode {
            SourceMode::RepoTransportError => {
                Err(SourceError::Transport("connection reset".to_string()))
            }
            _ => Ok(sample_repos(self.repo_count)),
        }
    }
}

/// How the fake summarizer behaves.
pub enum SummarizerMode {
    Ok(String),
    Fail,
    Hang,
}

pub struct FakeSummarizer {
    pub mode: SummarizerMode,
    pub calls: AtomicUsize,
}

impl FakeSummarizer {
    pub fn ok(text: &str) -> Self {
        Self {
            mode: SummarizerMode::Ok(text.to_string()),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn failing() -> Self {
        Self {
            mode: SummarizerMode::Fail,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn hanging() -> Self {
        Self {
            mode: SummarizerMode::Hang,
            calls: AtomicUsize::new(0),
        }
    }
}

#[async_trait]
impl Summarizer for FakeSummarizer {
    async fn summarize(
        &self,
        _profile: &Profile,
        _repositories: &[RepoSummary],
    ) -> Result<String, SummaryError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.mode {
            SummarizerMode::Ok(text) => Ok(text.clone()),
            SummarizerMode::Fail => Err(SummaryError::EmptyResponse),
            SummarizerMode::Hang => {
                tokio::time::sleep(Duration::from_secs(3600)).await;
                unreachable!("hanging summarizer should be timed out")
            }
        }
    }
}

/// In-memory cache with controllable readiness and failure injection.
#[derive(Default)]
pub struct MemoryCache {
    pub not_ready: AtomicBool,
    pub fail_reads: AtomicBool,
    pub fail_writes: AtomicBool,
    pub records: Mutex<HashMap<String, CachedLookup>>,
    pub get_calls: AtomicUsize,
    pub upsert_calls: AtomicUsize,
}

impl MemoryCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn unready() -> Self {
        let cache = Self::default();
        cache.not_ready.store(true, Ordering::SeqCst);
        cache
    }

    pub fn seed(&self, record: CachedLookup) {
        self.records
            .lock()
            .unwrap()
            .insert(record.key.clone(), record);
    }

    pub fn stored(&self, key: &str) -> Option<CachedLookup> {
        self.records.lock().unwrap().get(key).cloned()
    }

    pub fn writes(&self) -> usize {
        self.upsert_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl LookupCache for MemoryCache {
    fn is_ready(&self) -> bool {
        !self.not_ready.load(Ordering::SeqCst)
    }

    async fn get(&self, key: &str) -> Result<Option<CachedLookup>, CacheError> {
        self.get_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_reads.load(Ordering::SeqCst) {
            return Err(CacheError::Unavailable("injected read failure".to_string()));
        }
        Ok(self.records.lock().unwrap().get(key).cloned())
    }

    async fn upsert(&self, record: &CachedLookup) -> Result<(), CacheError> {
        self.upsert_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(CacheError::Unavailable(
                "injected write failure".to_string(),
            ));
        }
        self.seed(record.clone());
        Ok(())
    }
}
