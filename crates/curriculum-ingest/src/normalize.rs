//! Transcript normalization: raw records to a chronologically ordered
//! [`Transcript`].

use tracing::{debug, trace};

use curriculum_catalog::GradePolicy;
use curriculum_model::{
    EnrolledCourse, GradeStatus, Semester, SemesterKey, StructureError, StructureResult,
    TermType, Transcript, normalize_code,
};

use crate::records::{CourseRecord, SemesterRecord, TranscriptRecord};

/// Validate a raw transcript and order its semesters by `(year, term rank)`.
///
/// # Errors
///
/// Returns the first structural problem found: an unknown term literal, a
/// non-numeric year, malformed credits, an empty course code, or two
/// semesters sharing the same key.
pub fn normalize_transcript(
    record: TranscriptRecord,
    policy: &GradePolicy,
) -> StructureResult<Transcript> {
    let mut semesters = record
        .semesters
        .into_iter()
        .enumerate()
        .map(|(index, semester)| normalize_semester(index, semester, policy))
        .collect::<StructureResult<Vec<_>>>()?;

    semesters.sort_by_key(|semester| semester.key);
    if let Some(pair) = semesters.windows(2).find(|pair| pair[0].key == pair[1].key) {
        return Err(StructureError::DuplicateSemesterKey { key: pair[1].key });
    }

    let transcript = Transcript {
        student: record.student_info,
        semesters,
    };
    debug!(
        semesters = transcript.semesters.len(),
        courses = transcript.course_count(),
        "transcript normalized"
    );
    Ok(transcript)
}

fn normalize_semester(
    index: usize,
    record: SemesterRecord,
    policy: &GradePolicy,
) -> StructureResult<Semester> {
    let term = record
        .semester_type
        .parse::<TermType>()
        .map_err(|_| StructureError::InvalidTermType {
            value: record.semester_type.clone(),
            index,
        })?;
    let year = record.year.to_year(index)?;
    let key = SemesterKey::new(term, year);

    let courses = record
        .courses
        .into_iter()
        .enumerate()
        .map(|(position, course)| normalize_course(key, position, course, policy))
        .collect::<StructureResult<Vec<_>>>()?;

    Ok(Semester {
        key,
        courses,
        semester_gpa: record.sem_gpa.as_ref().and_then(|gpa| gpa.to_f64()),
        cumulative_gpa: record.cum_gpa.as_ref().and_then(|gpa| gpa.to_f64()),
    })
}

fn normalize_course(
    semester: SemesterKey,
    position: usize,
    record: CourseRecord,
    policy: &GradePolicy,
) -> StructureResult<EnrolledCourse> {
    let code = normalize_code(&record.code);
    if code.is_empty() {
        return Err(StructureError::MissingCourseCode { semester, position });
    }
    let context = format!("course {code} in {semester}");
    let credits = record.credits.to_credit_value(&context)?;
    let grade = record.grade.trim().to_string();
    let status = policy.classify(&grade);
    if status == GradeStatus::Unrecognized {
        trace!(%semester, code = %code, grade = %grade, "unrecognized grade token");
    }
    Ok(EnrolledCourse {
        code,
        name: record.name.filter(|name| !name.trim().is_empty()),
        grade,
        credits_attempted: credits.total,
        status,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use curriculum_catalog::RawCredits;

    use crate::records::RawYear;

    fn course(code: &str, grade: &str) -> CourseRecord {
        CourseRecord {
            code: code.to_string(),
            name: None,
            grade: grade.to_string(),
            credits: RawCredits::Count(3),
        }
    }

    fn semester(term: &str, year: i64, courses: Vec<CourseRecord>) -> SemesterRecord {
        SemesterRecord {
            semester_type: term.to_string(),
            year: RawYear::Number(year),
            sem_gpa: None,
            cum_gpa: None,
            courses,
        }
    }

    fn transcript(semesters: Vec<SemesterRecord>) -> TranscriptRecord {
        TranscriptRecord {
            student_info: Default::default(),
            semesters,
        }
    }

    #[test]
    fn orders_semesters_by_year_then_term() {
        let record = transcript(vec![
            semester("Summer", 2021, vec![]),
            semester("second", 2021, vec![]),
            semester("First", 2022, vec![]),
            semester("FIRST", 2021, vec![]),
        ]);
        let normalized = normalize_transcript(record, &GradePolicy::default()).unwrap();
        let keys: Vec<String> = normalized
            .semesters
            .iter()
            .map(|s| s.key.to_string())
            .collect();
        assert_eq!(
            keys,
            ["First 2021", "Second 2021", "Summer 2021", "First 2022"]
        );
    }

    #[test]
    fn classifies_grades_and_normalizes_codes() {
        let record = transcript(vec![semester(
            "First",
            2021,
            vec![course(" ab101 ", "B+"), course("AB102", "Q"), course("AB103", "")],
        )]);
        let normalized = normalize_transcript(record, &GradePolicy::default()).unwrap();
        let courses = &normalized.semesters[0].courses;
        assert_eq!(courses[0].code, "AB101");
        assert_eq!(courses[0].status, GradeStatus::Passing);
        assert_eq!(courses[1].status, GradeStatus::Unrecognized);
        assert_eq!(courses[2].status, GradeStatus::InProgress);
    }

    #[test]
    fn duplicate_semester_is_rejected() {
        let record = transcript(vec![
            semester("Second", 2022, vec![]),
            semester("First", 2022, vec![]),
            semester("Second", 2022, vec![]),
        ]);
        let err = normalize_transcript(record, &GradePolicy::default()).unwrap_err();
        assert_eq!(
            err,
            StructureError::DuplicateSemesterKey {
                key: SemesterKey::new(TermType::Second, 2022)
            }
        );
    }

    #[test]
    fn invalid_term_names_its_record() {
        let record = transcript(vec![
            semester("First", 2021, vec![]),
            semester("Winter", 2021, vec![]),
        ]);
        let err = normalize_transcript(record, &GradePolicy::default()).unwrap_err();
        assert_eq!(
            err,
            StructureError::InvalidTermType {
                value: "Winter".into(),
                index: 1
            }
        );
    }

    #[test]
    fn empty_code_is_rejected() {
        let record = transcript(vec![semester(
            "First",
            2021,
            vec![course("AB101", "A"), course("  ", "A")],
        )]);
        let err = normalize_transcript(record, &GradePolicy::default()).unwrap_err();
        assert_eq!(
            err,
            StructureError::MissingCourseCode {
                semester: SemesterKey::new(TermType::First, 2021),
                position: 1
            }
        );
    }

    #[test]
    fn negative_credits_are_rejected() {
        let mut bad = course("AB101", "A");
        bad.credits = RawCredits::Count(-1);
        let record = transcript(vec![semester("First", 2021, vec![bad])]);
        let err = normalize_transcript(record, &GradePolicy::default()).unwrap_err();
        assert!(matches!(err, StructureError::MalformedCreditValue { .. }));
    }
    #[test]
    fn oversized_credits_are_rejected() {
        let mut huge = course("AB101", "A");
        huge.credits = RawCredits::Count(i64::from(u32::MAX));
        let record = transcript(vec![semester(
            "First",
            2021,
            vec![huge, course("AB102", "B")],
        )]);
        let err = normalize_transcript(record, &GradePolicy::default()).unwrap_err();
        match err {
            StructureError::MalformedCreditValue { value, context } => {
                assert_eq!(value, "4294967295");
                assert!(context.contains("AB101"), "{context}");
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
