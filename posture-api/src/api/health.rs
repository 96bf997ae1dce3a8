//! Liveness and rule-configuration health

use axum::{extract::State, routing::get, Json, Router};
use posture_common::PostureContext;
use serde::Serialize;

use crate::AppState;

/// GET /health body
///
/// `status` is "degraded" when the analyzer's thresholds fail validation;
/// the service still answers requests in that state.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub module: &'static str,
    pub version: &'static str,
    pub thresholds_valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thresholds_error: Option<String>,
    pub contexts: Vec<&'static str>,
}

/// GET /health
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let check = state.analyzer.thresholds().validate();
    Json(HealthResponse {
        status: if check.is_ok() { "ok" } else { "degraded" },
        module: "posture-api",
        version: env!("CARGO_PKG_VERSION"),
        thresholds_valid: check.is_ok(),
        thresholds_error: check.err().map(|e| e.to_string()),
        contexts: PostureContext::all_variants()
            .iter()
            .map(|c| c.as_str())
            .collect(),
    })
}

pub fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
