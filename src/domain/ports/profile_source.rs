//! Port for the upstream profile source.

use async_trait::async_trait;

use crate::domain::errors::SourceError;
use crate::domain::models::{Profile, RepoSummary};

/// Retrieves a developer profile and recent repositories for a username.
///
/// Implementations carry no caching logic; the orchestrator decides when to
/// call them. There is exactly one production implementation (the GitHub
/// REST client) plus in-memory fakes for tests.
#[async_trait]
pub trait ProfileSource: Send + Sync {
    /// Fetch the profile for `key`.
    ///
    /// Fails with [`SourceError::NotFound`] when the identity does not exist
    /// upstream, [`SourceError::Transport`] otherwise.
    async fn fetch_profile(&self, key: &str) -> Result<Profile, SourceError>;

    /// Fetch repositories for `key`, ordered most-recently-updated first.
    ///
    /// An empty list is a valid result (zero public repos), not an error.
    async fn fetch_repositories(&self, key: &str) -> Result<Vec<RepoSummary>, SourceError>;
}
