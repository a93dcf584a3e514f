//! GitHub REST API v3 client.
//!
//! Implements the ProfileSource port with the two read-only endpoints the
//! lookup needs. Unauthenticated requests work (at GitHub's lower anonymous
//! rate limit); a token is attached when configured.

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::domain::errors::SourceError;
use crate::domain::models::{Profile, RepoSummary, MAX_REPOSITORIES};
use crate::domain::ports::ProfileSource;

/// Configuration for the GitHub client.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GitHubConfig {
    /// Base URL for the GitHub REST API.
    pub base_url: String,

    /// Optional personal access token. Anonymous requests work without it.
    pub token: Option<String>,

    /// Per-request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for GitHubConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.github.com".to_string(),
            token: None,
            timeout_secs: 10,
        }
    }
}

/// HTTP client for the GitHub REST API v3.
#[derive(Debug, Clone)]
pub struct GitHubClient {
    http: Client,
    base_url: String,
    token: Option<String>,
}

impl GitHubClient {
    pub fn new(config: GitHubConfig) -> Result<Self, SourceError> {
        let http = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| SourceError::Transport(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            http,
            base_url: config.base_url,
            token: config.token,
        })
    }

    fn request(&self, url: &str) -> reqwest::RequestBuilder {
        let mut req = self
            .http
            .get(url)
            .header("Accept", "application/vnd.github+json")
            .header("X-GitHub-Api-Version", "2022-11-28")
            .header("User-Agent", "gitbrief");
        if let Some(token) = &self.token {
            req = req.header("Authorization", format!("Bearer {token}"));
        }
        req
    }
}

#[async_trait]
impl ProfileSource for GitHubClient {
    async fn fetch_profile(&self, key: &str) -> Result<Profile, SourceError> {
        let url = format!("{}/users/{}", self.base_url, key);

        let resp = self
            .request(&url)
            .send()
            .await
            .map_err(|e| SourceError::Transport(format!("GitHub profile request failed: {e}")))?;

        if resp.status() == StatusCode::NOT_FOUND {
            return Err(SourceError::NotFound(key.to_string()));
        }
        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            return Err(SourceError::Transport(format!(
                "GitHub profile returned {status}: {body}"
            )));
        }

        resp.json::<Profile>()
            .await
            .map_err(|e| SourceError::Transport(format!("GitHub profile parse failed: {e}")))
    }

    async fn fetch_repositories(&self, key: &str) -> Result<Vec<RepoSummary>, SourceError> {
        let url = format!(
            "{}/users/{}/repos?sort=updated&per_page={}",
            self.base_url, key, MAX_REPOSITORIES
        );

        let resp = self
            .request(&url)
            .send()
            .await
            .map_err(|e| SourceError::Transport(format!("GitHub repos request failed: {e}")))?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            return Err(SourceError::Transport(format!(
                "GitHub repos returned {status}: {body}"
            )));
        }

        resp.json::<Vec<RepoSummary>>()
            .await
            .map_err(|e| SourceError::Transport(format!("GitHub repos parse failed: {e}")))
    }
}
