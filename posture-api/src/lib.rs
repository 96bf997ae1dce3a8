//! posture-api library - HTTP boundary for single-frame posture analysis
//!
//! Accepts landmarks already produced by a pose-estimation provider and
//! returns the score, issues and recommendations for the chosen context.

use std::sync::Arc;

use axum::extract::DefaultBodyLimit;
use axum::Router;
use posture_common::PostureAnalyzer;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub mod api;
pub mod error;

/// Default request body limit when no configuration overrides it
pub const DEFAULT_MAX_BODY_BYTES: usize = 1024 * 1024;

/// Application state shared across HTTP handlers
#[derive(Clone)]
pub struct AppState {
    /// Stateless analyzer holding the deployment's rule thresholds
    pub analyzer: Arc<PostureAnalyzer>,
    /// Upper bound on request body size
    pub max_body_bytes: usize,
}

impl AppState {
    /// Create new application state
    pub fn new(analyzer: PostureAnalyzer) -> Self {
        Self {
            analyzer: Arc::new(analyzer),
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
        }
    }

    pub fn with_max_body_bytes(mut self, max_body_bytes: usize) -> Self {
        self.max_body_bytes = max_body_bytes;
        self
    }
}

/// Build application router
pub fn build_router(state: AppState) -> Router {
    use axum::routing::{get, post};

    let body_limit = state.max_body_bytes;

    Router::new()
        .route("/analyze", post(api::analyze_posture))
        .route("/api/buildinfo", get(api::get_build_info))
        .merge(api::health_routes())
        .with_state(state)
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(TraceLayer::new_for_http())
        // Browser front end calls from another origin
        .layer(CorsLayer::permissive())
}
