//! Recommendation route: source selection, text fetch, analysis.

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::post;
use axum::{Json, Router};
use serde::Deserialize;
use tracing::info;

use giftwise_sources::{resolve, SourceErrorKind};

use crate::state::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/recommend", post(recommend))
}

#[derive(Debug, Deserialize)]
pub struct RecommendRequest {
    pub source: String,
    pub value: String,
}

/// POST /api/recommend — `{source, value}` in, recommendation out.
///
/// Fetch failures return 400 with an `error_kind`, so clients can tell
/// "the source produced no text" (retry, pick another source) apart from
/// a successful analysis that simply found no signal (empty lists, 200).
pub async fn recommend(
    State(state): State<Arc<AppState>>,
    Json(req): Json<RecommendRequest>,
) -> (StatusCode, Json<serde_json::Value>) {
    if req.source.is_empty() || req.value.is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Json(serde_json::json!({ "error": "source and value are required" })),
        );
    }

    let Some(source) = resolve(&req.source) else {
        return fetch_failure(
            SourceErrorKind::UnsupportedSource,
            format!("Unknown source '{}'", req.source),
        );
    };

    let outcome = source.fetch(&req.value);
    if !outcome.success {
        let kind = outcome.error_kind.unwrap_or(SourceErrorKind::AccessError);
        let message = outcome
            .error
            .unwrap_or_else(|| "Failed to obtain profile text".to_string());
        return fetch_failure(kind, message);
    }
    if outcome.text.trim().is_empty() {
        return fetch_failure(
            SourceErrorKind::EmptyText,
            "No text extracted from the provided source".to_string(),
        );
    }

    let result = state.analyzer.run(&outcome.text);
    info!(
        "Recommendation for source={}: {} traits, {} interests, {} gifts",
        source.name(),
        result.traits.len(),
        result.interests.len(),
        result.gifts.len()
    );

    (
        StatusCode::OK,
        Json(serde_json::json!({
            "success": true,
            "source": source.name(),
            "traits": result.traits,
            "interests": result.interests,
            "gifts": result.gifts,
        })),
    )
}

fn fetch_failure(
    kind: SourceErrorKind,
    message: String,
) -> (StatusCode, Json<serde_json::Value>) {
    (
        StatusCode::BAD_REQUEST,
        Json(serde_json::json!({
            "success": false,
            "error": message,
            "error_kind": kind,
            "traits": [],
            "interests": [],
            "gifts": [],
        })),
    )
}
