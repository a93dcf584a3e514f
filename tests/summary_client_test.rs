//! Wiremock tests for the Hugging Face router summary client.

mod common;

use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use gitbrief::adapters::summary::{HfSummaryClient, SummarizerConfig};
use gitbrief::domain::errors::SummaryError;
use gitbrief::domain::ports::Summarizer;

use common::{sample_profile, sample_repos};

fn client(base_url: String, token: Option<&str>) -> HfSummaryClient {
    HfSummaryClient::new(SummarizerConfig {
        base_url,
        api_token: token.map(str::to_string),
        model: "test-model".to_string(),
        timeout_secs: 5,
    })
    .unwrap()
}

fn chat_body(content: serde_json::Value) -> serde_json::Value {
    serde_json::json!({
        "id": "chatcmpl-1",
        "choices": [{"index": 0, "message": {"role": "assistant", "content": content}}]
    })
}

#[tokio::test]
async fn successful_generation_returns_trimmed_text() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .and(header("Authorization", "Bearer hf_test"))
        .respond_with(ResponseTemplate::new(200).set_body_json(chat_body(
            serde_json::json!("  A prolific Rust developer.  \n"),
        )))
        .mount(&server)
        .await;

    let summary = client(server.uri(), Some("hf_test"))
        .summarize(&sample_profile("octocat"), &sample_repos(2))
        .await
        .unwrap();

    assert_eq!(summary, "A prolific Rust developer.");
}

#[tokio::test]
async fn missing_content_is_an_empty_response_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(chat_body(serde_json::Value::Null)))
        .mount(&server)
        .await;

    let err = client(server.uri(), Some("hf_test"))
        .summarize(&sample_profile("octocat"), &[])
        .await
        .unwrap_err();

    assert!(matches!(err, SummaryError::EmptyResponse));
}

#[tokio::test]
async fn whitespace_only_content_is_empty_too() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(chat_body(serde_json::json!("   \n  "))),
        )
        .mount(&server)
        .await;

    let err = client(server.uri(), Some("hf_test"))
        .summarize(&sample_profile("octocat"), &[])
        .await
        .unwrap_err();

    assert!(matches!(err, SummaryError::EmptyResponse));
}

#[tokio::test]
async fn router_error_maps_to_transport() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(503).set_body_string("overloaded"))
        .mount(&server)
        .await;

    let err = client(server.uri(), Some("hf_test"))
        .summarize(&sample_profile("octocat"), &[])
        .await
        .unwrap_err();

    assert!(matches!(err, SummaryError::Transport(_)));
}

#[tokio::test]
async fn missing_token_never_hits_the_network() {
    let server = MockServer::start().await;
    // No mock mounted: any request would 404 and fail differently.

    let err = client(server.uri(), None)
        .summarize(&sample_profile("octocat"), &[])
        .await
        .unwrap_err();

    assert!(matches!(err, SummaryError::MissingCredentials));
}
