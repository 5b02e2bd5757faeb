//! Public endpoints: no admin gate, no remote call.

use axum::Json;
use axum::extract::State;
use serde_json::{Value, json};

use crate::state::AppState;

/// GET /api/health - Liveness plus the configured remote URL.
pub async fn health(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "service": state.config.service_name,
        "supabase_url": state.config.supabase_url,
    }))
}

/// GET /api/config - Static client configuration for the frontend.
pub async fn config(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "supabase_url": state.config.supabase_url,
        "app_name": state.config.app_name,
        "version": state.config.app_version,
    }))
}
