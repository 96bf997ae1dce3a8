//! Posture analysis endpoint

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use posture_common::landmarks::{check_names, scale_to_frame};
use posture_common::{AnalysisResult, Landmark, PostureContext};
use serde::Deserialize;
use tracing::{debug, info};

use crate::error::ApiResult;
use crate::AppState;

/// Body of POST /analyze
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeRequest {
    /// "squat" or "desk"; parsed separately so unknown values get a clear error
    pub posture_type: String,

    /// Landmarks reported by the pose provider (may be empty)
    #[serde(default)]
    pub landmarks: Vec<Landmark>,

    /// Present when landmark coordinates are normalized to [0, 1]
    #[serde(default)]
    pub frame: Option<FrameSize>,
}

/// Pixel dimensions of the analyzed frame
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct FrameSize {
    pub width: u32,
    pub height: u32,
}

/// POST /analyze
///
/// Scores one frame's landmarks against the rule battery for `postureType`.
/// An empty landmark list is not an error: it yields the zero-score
/// "no pose detected" result. Names outside the pose model's vocabulary,
/// and normalized points that overflow the frame, are rejected.
pub async fn analyze_posture(
    State(state): State<AppState>,
    payload: Result<Json<AnalyzeRequest>, JsonRejection>,
) -> ApiResult<Json<AnalysisResult>> {
    let Json(request) = payload?;

    let context: PostureContext = request.posture_type.parse()?;
    check_names(&request.landmarks)?;

    let landmarks = match request.frame {
        Some(frame) => {
            debug!("Scaling landmarks to {}x{} frame", frame.width, frame.height);
            scale_to_frame(&request.landmarks, frame.width as f64, frame.height as f64)?
        }
        None => request.landmarks,
    };

    let result = state.analyzer.analyze(&landmarks, context);
    info!(
        "Analyzed {} posture: score {}, {} issue(s)",
        context,
        result.score,
        result.issues.len()
    );

    Ok(Json(result))
}
