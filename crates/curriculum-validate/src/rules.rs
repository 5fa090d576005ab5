//! Per-course rule evaluation against a fixed completion snapshot.
//!
//! ## Rules
//!
//! - **Grade token**: a token the policy does not know → **Warning**
//! - **Course code**: not in the catalog → **Error**, remaining catalog rules skipped
//! - **Prerequisite**: must be passed in an earlier semester → **Error**
//! - **Corequisite**: passed earlier or in the same semester → **Error**
//! - **Dangling reference**: prerequisite/corequisite missing from the catalog → **Warning**
//! - **Duplicate enrollment**: same code twice in one semester → **Warning** per repeat
//! - **Retake after pass**: code already passed in an earlier semester → **Warning**
//!
//! Evaluation reads only the snapshot, so the findings of a semester do not
//! depend on the order its courses are listed in (apart from positions).

use std::collections::BTreeMap;

use tracing::trace;

use curriculum_catalog::CatalogIndex;
use curriculum_model::{
    CourseDefinition, EnrolledCourse, Finding, FindingKind, GradeStatus, Semester, SemesterKey,
    normalize_code,
};

use crate::tracker::CompletionSnapshot;

/// Evaluate every course of `semester`.
pub fn evaluate_semester(
    semester: &Semester,
    snapshot: &CompletionSnapshot<'_>,
    catalog: &CatalogIndex,
) -> Vec<Finding> {
    let mut findings = Vec::new();
    let mut seen: BTreeMap<String, usize> = BTreeMap::new();
    for (position, course) in semester.courses.iter().enumerate() {
        findings.extend(evaluate_course(course, position, snapshot, catalog));
        let code = normalize_code(&course.code);
        if let Some(first_position) = seen.get(&code) {
            findings.push(
                Finding::warning(
                    FindingKind::DuplicateEnrollment,
                    snapshot.semester,
                    format!(
                        "{} is listed more than once in {} (first at position {first_position})",
                        course.code, snapshot.semester
                    ),
                )
                .with_course(&course.code, position)
                .with_related(&course.code),
            );
        } else {
            seen.insert(code, position);
        }
    }
    for finding in &findings {
        trace!(
            semester = %finding.semester,
            kind = %finding.kind,
            course = finding.course_code.as_deref().unwrap_or(""),
            "finding"
        );
    }
    findings
}

/// Evaluate one enrolled course at `position` within its semester.
pub fn evaluate_course(
    course: &EnrolledCourse,
    position: usize,
    snapshot: &CompletionSnapshot<'_>,
    catalog: &CatalogIndex,
) -> Vec<Finding> {
    let semester = snapshot.semester;
    let code = course.code.as_str();
    let mut findings = Vec::new();

    if course.status == GradeStatus::Unrecognized {
        findings.push(
            Finding::warning(
                FindingKind::UnrecognizedGradeToken,
                semester,
                format!(
                    "grade {:?} for {code} is not a recognized token; treated as not passed",
                    course.grade
                ),
            )
            .with_course(code, position),
        );
    }

    if let Some(first) = snapshot.passed_earlier_in(code) {
        findings.push(
            Finding::warning(
                FindingKind::RetakeAfterPass,
                semester,
                format!("{code} was already passed in {first}"),
            )
            .with_course(code, position)
            .with_related(code),
        );
    }

    let Some(definition) = catalog.get(code) else {
        findings.push(
            Finding::error(
                FindingKind::UnknownCourseCode,
                semester,
                format!("{code} is not in the course catalog"),
            )
            .with_course(code, position),
        );
        return findings;
    };

    check_prerequisites(definition, position, snapshot, catalog, &mut findings);
    check_corequisites(definition, position, snapshot, catalog, &mut findings);
    findings
}

fn check_prerequisites(
    definition: &CourseDefinition,
    position: usize,
    snapshot: &CompletionSnapshot<'_>,
    catalog: &CatalogIndex,
    findings: &mut Vec<Finding>,
) {
    let semester = snapshot.semester;
    for prerequisite in &definition.prerequisites {
        if !snapshot.satisfies_prerequisite(prerequisite) {
            findings.push(
                Finding::error(
                    FindingKind::MissingPrerequisite,
                    semester,
                    format!(
                        "{} requires {prerequisite} to be passed before {semester}",
                        definition.code
                    ),
                )
                .with_course(&definition.code, position)
                .with_related(prerequisite),
            );
        }
        if !catalog.contains(prerequisite) {
            findings.push(dangling_reference(
                definition,
                position,
                semester,
                "prerequisite",
                prerequisite,
            ));
        }
    }
}

fn check_corequisites(
    definition: &CourseDefinition,
    position: usize,
    snapshot: &CompletionSnapshot<'_>,
    catalog: &CatalogIndex,
    findings: &mut Vec<Finding>,
) {
    let semester = snapshot.semester;
    for corequisite in &definition.corequisites {
        if !snapshot.satisfies_corequisite(corequisite) {
            findings.push(
                Finding::error(
                    FindingKind::MissingCorequisite,
                    semester,
                    format!(
                        "{} requires {corequisite} to be passed before or during {semester}",
                        definition.code
                    ),
                )
                .with_course(&definition.code, position)
                .with_related(corequisite),
            );
        }
        if !catalog.contains(corequisite) {
            findings.push(dangling_reference(
                definition,
                position,
                semester,
                "corequisite",
                corequisite,
            ));
        }
    }
}

fn dangling_reference(
    definition: &CourseDefinition,
    position: usize,
    semester: SemesterKey,
    relation: &str,
    code: &str,
) -> Finding {
    Finding::warning(
        FindingKind::UnknownCourseCode,
        semester,
        format!(
            "{relation} {code} of {} is not in the course catalog",
            definition.code
        ),
    )
    .with_course(&definition.code, position)
    .with_related(code)
}

#[cfg(test)]
mod tests {
    use super::*;
    use curriculum_model::{CreditValue, TermType};

    use crate::tracker::CompletionTracker;

    fn enrolled(code: &str, status: GradeStatus) -> EnrolledCourse {
        EnrolledCourse {
            code: code.to_string(),
            name: None,
            grade: "X".to_string(),
            credits_attempted: 3,
            status,
        }
    }

    fn catalog() -> CatalogIndex {
        CatalogIndex::build([
            CourseDefinition::new("A", "A", CreditValue::new(3)),
            CourseDefinition::new("B", "B", CreditValue::new(3)).with_prerequisites(["A"]),
            CourseDefinition::new("C", "C", CreditValue::new(3))
                .with_corequisites(["A", "GHOST"]),
        ])
        .unwrap()
    }

    fn evaluate(courses: Vec<EnrolledCourse>) -> Vec<Finding> {
        let mut semester = Semester::new(TermType::First, 2021);
        semester.courses = courses;
        let mut tracker = CompletionTracker::new();
        tracker.advance(&semester).unwrap();
        let snapshot = tracker.snapshot().unwrap();
        evaluate_semester(&semester, &snapshot, &catalog())
    }

    fn kinds(findings: &[Finding]) -> Vec<FindingKind> {
        findings.iter().map(|f| f.kind).collect()
    }

    #[test]
    fn same_semester_prerequisite_is_missing() {
        let findings = evaluate(vec![
            enrolled("A", GradeStatus::Passing),
            enrolled("B", GradeStatus::Passing),
        ]);
        assert_eq!(kinds(&findings), [FindingKind::MissingPrerequisite]);
        assert_eq!(findings[0].course_code.as_deref(), Some("B"));
        assert_eq!(findings[0].related_code.as_deref(), Some("A"));
        assert_eq!(findings[0].position, Some(1));
    }

    #[test]
    fn dangling_corequisite_warns_and_fails() {
        let findings = evaluate(vec![
            enrolled("A", GradeStatus::Passing),
            enrolled("C", GradeStatus::Passing),
        ]);
        assert_eq!(
            kinds(&findings),
            [
                FindingKind::MissingCorequisite,
                FindingKind::UnknownCourseCode
            ]
        );
        assert!(findings[0].is_error());
        assert!(!findings[1].is_error());
        assert_eq!(findings[1].related_code.as_deref(), Some("GHOST"));
    }

    #[test]
    fn unknown_course_skips_rule_checks() {
        let findings = evaluate(vec![enrolled("ZZ999", GradeStatus::Unrecognized)]);
        assert_eq!(
            kinds(&findings),
            [
                FindingKind::UnrecognizedGradeToken,
                FindingKind::UnknownCourseCode
            ]
        );
        assert!(findings[1].is_error());
    }

    #[test]
    fn repeats_in_one_semester_warn_per_repeat() {
        let findings = evaluate(vec![
            enrolled("A", GradeStatus::Failing),
            enrolled("A", GradeStatus::Passing),
            enrolled("A", GradeStatus::Withdrawn),
        ]);
        assert_eq!(
            kinds(&findings),
            [
                FindingKind::DuplicateEnrollment,
                FindingKind::DuplicateEnrollment
            ]
        );
        assert_eq!(findings[0].position, Some(1));
        assert_eq!(findings[1].position, Some(2));
    }
}
