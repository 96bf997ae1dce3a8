//! Posture rule engine
//!
//! Each posture context owns a fixed, ordered battery of rules. A rule reads
//! the landmarks it needs by name and returns at most one issue:
//! - `Ok(None)` when a required landmark is absent or the rule does not fire
//! - `Ok(Some(issue))` when the rule fires
//! - `Err(_)` when the computation itself fails (degenerate geometry)
//!
//! The battery runs every rule. A failing rule is logged and contributes
//! nothing; it never aborts the rest of the battery.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::context::PostureContext;
use crate::geometry::angle_at;
use crate::issue::{Issue, IssueType, Severity};
use crate::landmarks::{names, LandmarkSet};
use crate::{Error, Result};

/// Rule thresholds, in pixels unless noted
///
/// Values are fixed for a deployment and never change while serving.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RuleThresholds {
    /// Knee x may exceed ankle x by this much before it counts as over the toe
    pub knee_over_toe_threshold: f64,
    /// Shoulder-hip-knee angle (degrees) below which the back is too acute
    pub back_angle_min: f64,
    /// Back angle (degrees) below which the issue is HIGH instead of MEDIUM
    pub back_angle_high_cutoff: f64,
    /// Horizontal nose offset from shoulder midpoint that counts as forward head
    pub neck_forward_threshold: f64,
    /// Nose offset above which forward head is HIGH
    pub neck_forward_high_cutoff: f64,
    /// Vertical shoulder height difference that counts as misaligned
    pub shoulder_alignment_threshold: f64,
    /// Horizontal shoulder-hip offset that counts as slouching
    pub slouch_threshold: f64,
}

impl Default for RuleThresholds {
    fn default() -> Self {
        Self {
            knee_over_toe_threshold: 10.0,
            back_angle_min: 150.0,
            back_angle_high_cutoff: 130.0,
            neck_forward_threshold: 30.0,
            neck_forward_high_cutoff: 50.0,
            shoulder_alignment_threshold: 20.0,
            slouch_threshold: 30.0,
        }
    }
}

impl RuleThresholds {
    /// Reject thresholds that would make the rules meaningless
    pub fn validate(&self) -> Result<()> {
        let fields = [
            ("knee_over_toe_threshold", self.knee_over_toe_threshold),
            ("back_angle_min", self.back_angle_min),
            ("back_angle_high_cutoff", self.back_angle_high_cutoff),
            ("neck_forward_threshold", self.neck_forward_threshold),
            ("neck_forward_high_cutoff", self.neck_forward_high_cutoff),
            ("shoulder_alignment_threshold", self.shoulder_alignment_threshold),
            ("slouch_threshold", self.slouch_threshold),
        ];
        for (name, value) in fields {
            if !value.is_finite() || value < 0.0 {
                return Err(Error::Config(format!(
                    "{} must be a non-negative number, got {}",
                    name, value
                )));
            }
        }

        if self.back_angle_min > 180.0 {
            return Err(Error::Config(format!(
                "back_angle_min must be at most 180 degrees, got {}",
                self.back_angle_min
            )));
        }
        if self.back_angle_high_cutoff > self.back_angle_min {
            return Err(Error::Config(format!(
                "back_angle_high_cutoff ({}) must not exceed back_angle_min ({})",
                self.back_angle_high_cutoff, self.back_angle_min
            )));
        }
        if self.neck_forward_high_cutoff < self.neck_forward_threshold {
            return Err(Error::Config(format!(
                "neck_forward_high_cutoff ({}) must not be below neck_forward_threshold ({})",
                self.neck_forward_high_cutoff, self.neck_forward_threshold
            )));
        }
        Ok(())
    }
}

type RuleFn = fn(&LandmarkSet<'_>, &RuleThresholds) -> Result<Option<Issue>>;

/// One named check in a rule battery
struct Rule {
    name: &'static str,
    check: RuleFn,
}

const SQUAT_RULES: &[Rule] = &[
    Rule { name: "left_knee_over_toe", check: left_knee_over_toe },
    Rule { name: "right_knee_over_toe", check: right_knee_over_toe },
    Rule { name: "back_angle", check: back_angle },
];

const DESK_RULES: &[Rule] = &[
    Rule { name: "forward_head", check: forward_head },
    Rule { name: "shoulder_misalignment", check: shoulder_misalignment },
    Rule { name: "slouching", check: slouching },
];

fn battery(context: PostureContext) -> &'static [Rule] {
    match context {
        PostureContext::Squat => SQUAT_RULES,
        PostureContext::Desk => DESK_RULES,
    }
}

/// Stateless posture evaluator configured with a fixed set of thresholds
///
/// Cheap to clone and safe to share between threads.
#[derive(Debug, Clone, Default)]
pub struct PostureAnalyzer {
    thresholds: RuleThresholds,
}

impl PostureAnalyzer {
    pub fn new(thresholds: RuleThresholds) -> Self {
        Self { thresholds }
    }

    pub fn thresholds(&self) -> &RuleThresholds {
        &self.thresholds
    }

    /// Run the battery for `context` and collect issues in rule order
    pub fn evaluate(&self, landmarks: &LandmarkSet<'_>, context: PostureContext) -> Vec<Issue> {
        let mut issues = Vec::new();
        for rule in battery(context) {
            match (rule.check)(landmarks, &self.thresholds) {
                Ok(Some(issue)) => {
                    debug_assert_eq!(issue.issue_type.context(), context);
                    issues.push(issue)
                }
                Ok(None) => {}
                Err(e) => {
                    warn!("Skipping {} rule '{}': {}", context, rule.name, e);
                }
            }
        }
        issues
    }
}

// ============================================================================
// Squat battery
// ============================================================================

fn knee_over_toe(
    landmarks: &LandmarkSet<'_>,
    thresholds: &RuleThresholds,
    knee: &str,
    ankle: &str,
    description: &str,
) -> Option<Issue> {
    let (knee, ankle) = (landmarks.get(knee)?, landmarks.get(ankle)?);

    // Assumes the camera faces the subject's side with toes pointing +x
    if knee.x - ankle.x > thresholds.knee_over_toe_threshold {
        Some(Issue::new(IssueType::KneeOverToe, Severity::High, description))
    } else {
        None
    }
}

fn left_knee_over_toe(landmarks: &LandmarkSet<'_>, t: &RuleThresholds) -> Result<Option<Issue>> {
    Ok(knee_over_toe(
        landmarks,
        t,
        names::LEFT_KNEE,
        names::LEFT_ANKLE,
        "Left knee extends beyond toe",
    ))
}

fn right_knee_over_toe(landmarks: &LandmarkSet<'_>, t: &RuleThresholds) -> Result<Option<Issue>> {
    Ok(knee_over_toe(
        landmarks,
        t,
        names::RIGHT_KNEE,
        names::RIGHT_ANKLE,
        "Right knee extends beyond toe",
    ))
}

fn back_angle(landmarks: &LandmarkSet<'_>, t: &RuleThresholds) -> Result<Option<Issue>> {
    let (Some(shoulder), Some(hip), Some(knee)) = (
        landmarks.get(names::LEFT_SHOULDER),
        landmarks.get(names::LEFT_HIP),
        landmarks.get(names::LEFT_KNEE),
    ) else {
        return Ok(None);
    };

    let angle = angle_at(hip, shoulder, knee)?;
    if angle < t.back_angle_min {
        let severity = if angle < t.back_angle_high_cutoff {
            Severity::High
        } else {
            Severity::Medium
        };
        return Ok(Some(
            Issue::new(
                IssueType::BackAngle,
                severity,
                format!("Back angle too acute: {:.1}°", angle),
            )
            .with_angle(angle),
        ));
    }
    Ok(None)
}

// ============================================================================
// Desk battery
// ============================================================================

fn forward_head(landmarks: &LandmarkSet<'_>, t: &RuleThresholds) -> Result<Option<Issue>> {
    let (Some(nose), Some(left), Some(right)) = (
        landmarks.get(names::NOSE),
        landmarks.get(names::LEFT_SHOULDER),
        landmarks.get(names::RIGHT_SHOULDER),
    ) else {
        return Ok(None);
    };

    let center_x = (left.x + right.x) / 2.0;
    let distance = (nose.x - center_x).abs();
    if distance > t.neck_forward_threshold {
        let severity = if distance > t.neck_forward_high_cutoff {
            Severity::High
        } else {
            Severity::Medium
        };
        return Ok(Some(Issue::new(
            IssueType::NeckForward,
            severity,
            format!("Forward head posture: {:.1}px", distance),
        )));
    }
    Ok(None)
}

fn shoulder_misalignment(landmarks: &LandmarkSet<'_>, t: &RuleThresholds) -> Result<Option<Issue>> {
    let (Some(left), Some(right)) = (
        landmarks.get(names::LEFT_SHOULDER),
        landmarks.get(names::RIGHT_SHOULDER),
    ) else {
        return Ok(None);
    };

    let diff = (left.y - right.y).abs();
    if diff > t.shoulder_alignment_threshold {
        return Ok(Some(Issue::new(
            IssueType::ShoulderMisalignment,
            Severity::Medium,
            format!("Uneven shoulders: {:.1}px", diff),
        )));
    }
    Ok(None)
}

fn slouching(landmarks: &LandmarkSet<'_>, t: &RuleThresholds) -> Result<Option<Issue>> {
    let (Some(shoulder), Some(hip)) = (
        landmarks.get(names::LEFT_SHOULDER),
        landmarks.get(names::LEFT_HIP),
    ) else {
        return Ok(None);
    };

    let offset = (shoulder.x - hip.x).abs();
    if offset > t.slouch_threshold {
        return Ok(Some(Issue::new(
            IssueType::Slouching,
            Severity::Medium,
            "Slouching posture detected",
        )));
    }
    Ok(None)
}
