//! Knowledge-base stats route.

use std::sync::Arc;

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};

use crate::state::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/stats", get(get_stats))
}

/// GET /api/stats — loaded knowledge-base shape.
async fn get_stats(State(state): State<Arc<AppState>>) -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "traits": state.kb.traits.len(),
        "interests": state.kb.interests.len(),
        "catalogItems": state.kb.catalog.len(),
        "orphanCategories": state.kb.orphan_categories(),
        "maxGifts": giftwise_analyze::MAX_GIFTS,
        "kbDir": state.config.kb_paths.root.display().to_string(),
    }))
}
