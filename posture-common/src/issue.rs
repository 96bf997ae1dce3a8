//! Detected posture issues

use serde::{Deserialize, Serialize};

use crate::context::PostureContext;

/// Issue severity, ordered from mildest to worst
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Severity {
    Low,
    Medium,
    High,
}

impl Severity {
    /// Points deducted from the posture score for one issue of this severity
    pub fn deduction(&self) -> u32 {
        match self {
            Severity::High => 15,
            Severity::Medium => 10,
            Severity::Low => 5,
        }
    }
}

/// Closed vocabulary of issue tags
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueType {
    KneeOverToe,
    BackAngle,
    NeckForward,
    ShoulderMisalignment,
    Slouching,
}

impl IssueType {
    pub fn as_str(&self) -> &'static str {
        match self {
            IssueType::KneeOverToe => "knee_over_toe",
            IssueType::BackAngle => "back_angle",
            IssueType::NeckForward => "neck_forward",
            IssueType::ShoulderMisalignment => "shoulder_misalignment",
            IssueType::Slouching => "slouching",
        }
    }

    /// Context whose rule battery produces this issue type
    pub fn context(&self) -> PostureContext {
        match self {
            IssueType::KneeOverToe | IssueType::BackAngle => PostureContext::Squat,
            IssueType::NeckForward | IssueType::ShoulderMisalignment | IssueType::Slouching => {
                PostureContext::Desk
            }
        }
    }
}

impl std::fmt::Display for IssueType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single detected posture problem
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Issue {
    #[serde(rename = "type")]
    pub issue_type: IssueType,
    pub description: String,
    pub severity: Severity,
    /// Measured joint angle in degrees, only for angle-derived issues
    pub angle: Option<f64>,
}

impl Issue {
    pub fn new(issue_type: IssueType, severity: Severity, description: impl Into<String>) -> Self {
        Self {
            issue_type,
            description: description.into(),
            severity,
            angle: None,
        }
    }

    pub fn with_angle(mut self, angle: f64) -> Self {
        self.angle = Some(angle);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deductions() {
        assert_eq!(Severity::High.deduction(), 15);
        assert_eq!(Severity::Medium.deduction(), 10);
        assert_eq!(Severity::Low.deduction(), 5);
    }

    #[test]
    fn test_severity_ordering() {
        assert!(Severity::High > Severity::Medium);
        assert!(Severity::Medium > Severity::Low);
    }

    #[test]
    fn test_issue_types_belong_to_one_context() {
        assert_eq!(IssueType::KneeOverToe.context(), PostureContext::Squat);
        assert_eq!(IssueType::BackAngle.context(), PostureContext::Squat);
        assert_eq!(IssueType::NeckForward.context(), PostureContext::Desk);
        assert_eq!(IssueType::ShoulderMisalignment.context(), PostureContext::Desk);
        assert_eq!(IssueType::Slouching.context(), PostureContext::Desk);
    }

    #[test]
    fn test_wire_shape() {
        let issue = Issue::new(IssueType::BackAngle, Severity::High, "Back angle too acute: 125.0°")
            .with_angle(125.0);
        let json = serde_json::to_value(&issue).unwrap();

        assert_eq!(json["type"], "back_angle");
        assert_eq!(json["severity"], "HIGH");
        assert_eq!(json["angle"], 125.0);

        let plain = Issue::new(IssueType::Slouching, Severity::Medium, "Slouching posture detected");
        let json = serde_json::to_value(&plain).unwrap();
        assert!(json["angle"].is_null());
    }
}
