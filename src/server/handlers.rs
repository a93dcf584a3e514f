//! HTTP request handlers.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;
use tracing::error;

use crate::domain::errors::LookupError;
use crate::domain::models::LookupOutcome;

use super::AppState;

#[derive(Debug, Deserialize)]
pub struct LookupQuery {
    #[serde(default)]
    pub force: bool,
}

/// Flat `{ "error": message }` body, no stack detail.
pub struct ApiError(LookupError);

impl From<LookupError> for ApiError {
    fn from(err: LookupError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        error!(error = %self.0, "lookup failed");
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "error": self.0.to_string() })),
        )
            .into_response()
    }
}

/// `GET /api/lookup/{username}?force={true|false}`
pub async fn handle_lookup(
    State(state): State<Arc<AppState>>,
    Path(username): Path<String>,
    Query(query): Query<LookupQuery>,
) -> Result<Json<LookupOutcome>, ApiError> {
    let outcome = state.lookup.lookup(&username, query.force).await?;
    Ok(Json(outcome))
}

/// `GET /health`
pub async fn handle_health(State(state): State<Arc<AppState>>) -> Json<serde_json::Value> {
    Json(json!({
        "status": "ok",
        "cache_ready": state.cache.is_ready(),
    }))
}
