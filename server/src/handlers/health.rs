use axum::Json;
use serde_json::{json, Value};

/// GET /health — liveness, no auth.
pub async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
