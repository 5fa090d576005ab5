//! Shared builders for validation tests.

#![allow(dead_code)]

use curriculum_catalog::{CatalogIndex, GradePolicy};
use curriculum_model::{
    CourseDefinition, CreditValue, EnrolledCourse, Semester, TermType, Transcript,
};

pub fn course(code: &str) -> CourseDefinition {
    CourseDefinition::new(code, format!("Course {code}"), CreditValue::new(3))
}

pub fn catalog(definitions: Vec<CourseDefinition>) -> CatalogIndex {
    CatalogIndex::build(definitions).expect("valid catalog")
}

/// `(code, grade)` pairs, three credits each, classified by the default policy.
pub fn semester(term: TermType, year: i32, courses: &[(&str, &str)]) -> Semester {
    semester_with_credits(
        term,
        year,
        &courses
            .iter()
            .map(|(code, grade)| (*code, *grade, 3_u32))
            .collect::<Vec<_>>(),
    )
}

pub fn semester_with_credits(term: TermType, year: i32, courses: &[(&str, &str, u32)]) -> Semester {
    let policy = GradePolicy::default();
    let mut semester = Semester::new(term, year);
    semester.courses = courses
        .iter()
        .map(|(code, grade, credits)| EnrolledCourse {
            code: (*code).to_string(),
            name: None,
            grade: (*grade).to_string(),
            credits_attempted: *credits,
            status: policy.classify(grade),
        })
        .collect();
    semester
}

pub fn transcript(semesters: Vec<Semester>) -> Transcript {
    Transcript {
        student: Default::default(),
        semesters,
    }
}
