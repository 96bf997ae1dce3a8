//! Single-frame posture analysis entry point

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::context::PostureContext;
use crate::issue::Issue;
use crate::landmarks::{Landmark, LandmarkSet};
use crate::recommend::recommend;
use crate::rules::PostureAnalyzer;
use crate::scoring::score;

/// Sole recommendation when the pose provider found no body
pub const NO_POSE_DETECTED: &str = "No human pose detected. Please try again.";

/// Combined outcome of analyzing one frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    #[serde(rename = "postureType")]
    pub posture_context: PostureContext,
    pub score: u8,
    pub issues: Vec<Issue>,
    pub recommendations: Vec<String>,
}

impl AnalysisResult {
    /// Zero-score result returned when there is nothing to analyze
    pub fn no_pose(context: PostureContext) -> Self {
        Self {
            posture_context: context,
            score: 0,
            issues: Vec::new(),
            recommendations: vec![NO_POSE_DETECTED.to_string()],
        }
    }
}

impl PostureAnalyzer {
    /// Evaluate one landmark set and build the complete result
    ///
    /// Never fails: missing landmarks skip their rules and degenerate
    /// geometry is absorbed by the rule battery.
    pub fn analyze(&self, landmarks: &[Landmark], context: PostureContext) -> AnalysisResult {
        if landmarks.is_empty() {
            debug!("No landmarks for {} analysis", context);
            return AnalysisResult::no_pose(context);
        }

        let set = LandmarkSet::new(landmarks);
        let issues = self.evaluate(&set, context);
        let score = score(&issues);
        let recommendations = recommend(&issues, context);

        debug!(
            "Analyzed {} posture: {} landmarks, {} issues, score {}",
            context,
            set.len(),
            issues.len(),
            score
        );

        AnalysisResult {
            posture_context: context,
            score,
            issues,
            recommendations,
        }
    }
}

/// Analyze `landmarks` for `context` using the default rule thresholds
pub fn analyze(landmarks: &[Landmark], context: PostureContext) -> AnalysisResult {
    PostureAnalyzer::default().analyze(landmarks, context)
}
