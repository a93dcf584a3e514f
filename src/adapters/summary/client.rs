//! Summary generation via the Hugging Face router.
//!
//! The router speaks the OpenAI chat-completions wire format. One request
//! per lookup, no retries: a failed attempt is final and the orchestrator
//! falls back to a fixed summary string.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::domain::errors::SummaryError;
use crate::domain::models::{Profile, RepoSummary};
use crate::domain::ports::Summarizer;

use super::prompt::build_prompt;

/// Configuration for the summary client.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummarizerConfig {
    /// OpenAI-compatible API root, e.g. `https://router.huggingface.co/v1`.
    pub base_url: String,

    /// Bearer token. Absence must not prevent startup; every summarize
    /// call then fails and the orchestrator substitutes the fallback.
    pub api_token: Option<String>,

    /// Model identifier passed through to the router.
    pub model: String,

    /// Per-request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for SummarizerConfig {
    fn default() -> Self {
        Self {
            base_url: "https://router.huggingface.co/v1".to_string(),
            api_token: None,
            model: "mistralai/Mistral-7B-Instruct-v0.2:featherless-ai".to_string(),
            timeout_secs: 45,
        }
    }
}

#[derive(Debug, Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
}

#[derive(Debug, Serialize)]
struct ChatMessage {
    role: &'static str,
    content: String,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChatChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

/// HTTP client for the Hugging Face router's chat completions endpoint.
#[derive(Debug, Clone)]
pub struct HfSummaryClient {
    http: Client,
    base_url: String,
    api_token: Option<String>,
    model: String,
}

impl HfSummaryClient {
    pub fn new(config: SummarizerConfig) -> Result<Self, SummaryError> {
        let http = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| SummaryError::Transport(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            http,
            base_url: config.base_url,
            api_token: config.api_token,
            model: config.model,
        })
    }
}

#[async_trait]
impl Summarizer for HfSummaryClient {
    async fn summarize(
        &self,
        profile: &Profile,
        repositories: &[RepoSummary],
    ) -> Result<String, SummaryError> {
        let Some(token) = &self.api_token else {
            return Err(SummaryError::MissingCredentials);
        };

        let request = ChatRequest {
            model: self.model.clone(),
            messages: vec![ChatMessage {
                role: "user",
                content: build_prompt(profile, repositories),
            }],
        };

        let resp = self
            .http
            .post(format!("{}/chat/completions", self.base_url))
            .header("Authorization", format!("Bearer {token}"))
            .json(&request)
            .send()
            .await
            .map_err(|e| SummaryError::Transport(format!("request failed: {e}")))?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            return Err(SummaryError::Transport(format!("router returned {status}: {body}")));
        }

        let parsed: ChatResponse = resp
            .json()
            .await
            .map_err(|e| SummaryError::Transport(format!("response parse failed: {e}")))?;

        let content = parsed
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .map(|text| text.trim().to_string())
            .filter(|text| !text.is_empty());

        content.ok_or(SummaryError::EmptyResponse)
    }
}
