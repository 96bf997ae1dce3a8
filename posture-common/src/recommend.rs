//! Recommendation generator

use std::collections::HashSet;

use crate::context::PostureContext;
use crate::issue::{Issue, IssueType};

/// Sole tip when nothing needs fixing
pub const GREAT_POSTURE_TIP: &str = "Great posture! Keep it up";

/// Appended after any issue-specific tips
pub const BREAK_REMINDER_TIP: &str = "Take regular breaks to reset posture";

/// Issue types checked for each context, paired with their tips, in output order
const SQUAT_TIPS: &[(IssueType, &[&str])] = &[
    (
        IssueType::KneeOverToe,
        &["Keep knees behind toes during squats", "Practice wall squats"],
    ),
    (
        IssueType::BackAngle,
        &["Maintain a neutral spine", "Engage core muscles"],
    ),
];

const DESK_TIPS: &[(IssueType, &[&str])] = &[
    (
        IssueType::NeckForward,
        &["Raise monitor to eye level", "Practice chin tucks"],
    ),
    (
        IssueType::Slouching,
        &["Use a lumbar support cushion", "Strengthen your core"],
    ),
    (IssueType::ShoulderMisalignment, &["Check desk ergonomics"]),
];

fn tip_map(context: PostureContext) -> &'static [(IssueType, &'static [&'static str])] {
    match context {
        PostureContext::Squat => SQUAT_TIPS,
        PostureContext::Desk => DESK_TIPS,
    }
}

/// Turn the distinct issue types of `issues` into ordered, human-readable tips
///
/// Each issue type contributes its tips once, however many sides reported it.
/// Only the tip map of `context` is consulted.
pub fn recommend(issues: &[Issue], context: PostureContext) -> Vec<String> {
    let present: HashSet<IssueType> = issues.iter().map(|issue| issue.issue_type).collect();

    let mut tips: Vec<String> = tip_map(context)
        .iter()
        .filter(|(issue_type, _)| present.contains(issue_type))
        .flat_map(|(_, tips)| tips.iter().map(|tip| tip.to_string()))
        .collect();

    if tips.is_empty() {
        tips.push(GREAT_POSTURE_TIP.to_string());
    } else {
        tips.push(BREAK_REMINDER_TIP.to_string());
    }
    tips
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::issue::Severity;

    fn issue(issue_type: IssueType) -> Issue {
        Issue::new(issue_type, Severity::Medium, "test")
    }

    #[test]
    fn test_no_issues() {
        assert_eq!(recommend(&[], PostureContext::Squat), vec![GREAT_POSTURE_TIP]);
        assert_eq!(recommend(&[], PostureContext::Desk), vec![GREAT_POSTURE_TIP]);
    }

    #[test]
    fn test_squat_order_and_dedup() {
        let issues = vec![
            issue(IssueType::BackAngle),
            issue(IssueType::KneeOverToe),
            issue(IssueType::KneeOverToe),
        ];
        assert_eq!(
            recommend(&issues, PostureContext::Squat),
            vec![
                "Keep knees behind toes during squats",
                "Practice wall squats",
                "Maintain a neutral spine",
                "Engage core muscles",
                BREAK_REMINDER_TIP,
            ]
        );
    }

    #[test]
    fn test_desk_order() {
        let issues = vec![
            issue(IssueType::ShoulderMisalignment),
            issue(IssueType::Slouching),
            issue(IssueType::NeckForward),
        ];
        assert_eq!(
            recommend(&issues, PostureContext::Desk),
            vec![
                "Raise monitor to eye level",
                "Practice chin tucks",
                "Use a lumbar support cushion",
                "Strengthen your core",
                "Check desk ergonomics",
                BREAK_REMINDER_TIP,
            ]
        );
    }

    #[test]
    fn test_single_shoulder_issue() {
        let issues = vec![issue(IssueType::ShoulderMisalignment)];
        assert_eq!(
            recommend(&issues, PostureContext::Desk),
            vec!["Check desk ergonomics", BREAK_REMINDER_TIP]
        );
    }

    #[test]
    fn test_foreign_context_issue_ignored() {
        let issues = vec![issue(IssueType::KneeOverToe)];
        assert_eq!(recommend(&issues, PostureContext::Desk), vec![GREAT_POSTURE_TIP]);
    }
}
