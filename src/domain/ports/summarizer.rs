//! Port for the natural-language summary generator.

use async_trait::async_trait;

use crate::domain::errors::SummaryError;
use crate::domain::models::{Profile, RepoSummary};

/// Produces a short natural-language description of a developer.
///
/// A single failed attempt is final for that lookup: no retries are
/// performed here or by the orchestrator, which maps any failure to a
/// fixed fallback string instead.
#[async_trait]
pub trait Summarizer: Send + Sync {
    async fn summarize(
        &self,
        profile: &Profile,
        repositories: &[RepoSummary],
    ) -> Result<String, SummaryError>;
}
