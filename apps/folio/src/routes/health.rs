use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::state::AppState;

/// GET /health
/// Returns service status, version and the outcome of the last page load.
pub async fn health_handler(State(state): State<AppState>) -> Json<Value> {
    let last_load = *state.last_load.read().await;
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "service": "folio",
        "last_load": last_load,
    }))
}
