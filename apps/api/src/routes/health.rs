use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::state::AppState;

/// GET /health
/// Returns service status, version, and which recommender backend is active.
pub async fn health_handler(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "service": "careerpath-api",
        "recommender": state.recommender.backend(),
        "remote_configured": state.config.recommender_url.is_some()
    }))
}
