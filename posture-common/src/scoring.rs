//! Severity-weighted posture score

use crate::issue::Issue;

/// Score assigned when no issue was detected
pub const MAX_SCORE: u8 = 100;

/// Reduce an issue list to a quality score in [0, 100]
///
/// Starts at 100 and deducts 15/10/5 per HIGH/MEDIUM/LOW issue.
/// Order of `issues` does not matter.
pub fn score(issues: &[Issue]) -> u8 {
    let deducted: u32 = issues.iter().map(|issue| issue.severity.deduction()).sum();
    u32::from(MAX_SCORE).saturating_sub(deducted) as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::issue::{IssueType, Severity};

    fn issue(severity: Severity) -> Issue {
        Issue::new(IssueType::Slouching, severity, "test")
    }

    #[test]
    fn test_no_issues_is_perfect() {
        assert_eq!(score(&[]), 100);
    }

    #[test]
    fn test_mixed_deductions() {
        let issues = vec![
            issue(Severity::High),
            issue(Severity::Medium),
            issue(Severity::Low),
        ];
        assert_eq!(score(&issues), 70);
    }

    #[test]
    fn test_clamped_at_zero() {
        let issues = vec![issue(Severity::High); 10];
        assert_eq!(score(&issues), 0);
    }

    #[test]
    fn test_order_independent() {
        let a = vec![issue(Severity::High), issue(Severity::Low)];
        let b = vec![issue(Severity::Low), issue(Severity::High)];
        assert_eq!(score(&a), score(&b));
    }

    #[test]
    fn test_monotonic() {
        let mut issues = Vec::new();
        let mut previous = score(&issues);
        for severity in [Severity::Low, Severity::High, Severity::Medium, Severity::High]
            .into_iter()
            .cycle()
            .take(20)
        {
            issues.push(issue(severity));
            let current = score(&issues);
            assert!(current <= previous, "{} > {}", current, previous);
            assert!(current <= MAX_SCORE);
            previous = current;
        }
        assert_eq!(previous, 0);
    }
}
