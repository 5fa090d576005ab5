use curriculum_catalog::CreditLimits;
use curriculum_model::{Finding, FindingKind, Semester};

/// Warn when a semester's attempted credits exceed its term limit.
///
/// Every enrollment counts, whatever its grade.
pub fn check_credit_limit(semester: &Semester, limits: &CreditLimits) -> Option<Finding> {
    let total = semester.attempted_credits();
    let limit = limits.limit_for(semester.term());
    (total > limit).then(|| {
        Finding::warning(
            FindingKind::CreditLimitExceeded,
            semester.key,
            format!(
                "{total} credits attempted in {} exceeds the limit of {limit}",
                semester.key
            ),
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use curriculum_model::{EnrolledCourse, GradeStatus, TermType};

    fn semester(term: TermType, credits: &[u32]) -> Semester {
        let mut semester = Semester::new(term, 2022);
        semester.courses = credits
            .iter()
            .enumerate()
            .map(|(idx, credits)| EnrolledCourse {
                code: format!("C{idx}"),
                name: None,
                grade: "W".to_string(),
                credits_attempted: *credits,
                status: GradeStatus::Withdrawn,
            })
            .collect();
        semester
    }

    #[test]
    fn limit_is_inclusive() {
        let limits = CreditLimits::default();
        assert!(check_credit_limit(&semester(TermType::First, &[10, 12]), &limits).is_none());
        let finding = check_credit_limit(&semester(TermType::First, &[10, 13]), &limits).unwrap();
        assert_eq!(finding.kind, FindingKind::CreditLimitExceeded);
        assert_eq!(finding.position, None);
        assert_eq!(
            finding.detail,
            "23 credits attempted in First 2022 exceeds the limit of 22"
        );
    }

    #[test]
    fn summer_uses_its_own_limit() {
        let limits = CreditLimits::default();
        assert!(check_credit_limit(&semester(TermType::Summer, &[6, 4]), &limits).is_some());
        let no_summer = CreditLimits {
            standard: 22,
            summer: None,
        };
        assert!(check_credit_limit(&semester(TermType::Summer, &[6, 4]), &no_summer).is_none());
    }
}
