use axum::{extract::State, Json};
use serde::Serialize;

use crate::app::AppState;

/// Health check response
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    status: &'static str,
    records_loaded: usize,
}

/// GET /health - readiness signal and record count.
///
/// The dataset is loaded before the router exists, so any served response
/// reports the complete load.
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "OK",
        records_loaded: state.store.len(),
    })
}
