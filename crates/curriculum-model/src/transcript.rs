use std::fmt;

use serde::{Deserialize, Serialize};

use crate::enums::{GradeStatus, TermType};

/// Chronological position of a semester: `(year, term rank)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SemesterKey {
    pub year: i32,
    pub term: TermType,
}

impl SemesterKey {
    pub fn new(term: TermType, year: i32) -> Self {
        Self { year, term }
    }
}

impl fmt::Display for SemesterKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.term, self.year)
    }
}

/// Free-form student metadata carried through to reports.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentInfo {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub field_of_study: Option<String>,
    #[serde(default)]
    pub date_admission: Option<String>,
}

/// A course attempt recorded on a transcript.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnrolledCourse {
    pub code: String,
    #[serde(default)]
    pub name: Option<String>,
    /// Raw grade token as it appears on the transcript.
    pub grade: String,
    pub credits_attempted: u32,
    pub status: GradeStatus,
}

impl EnrolledCourse {
    pub fn is_passing(&self) -> bool {
        self.status.is_passing()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Semester {
    pub key: SemesterKey,
    pub courses: Vec<EnrolledCourse>,
    /// Reported semester GPA (informational, never validated).
    #[serde(default)]
    pub semester_gpa: Option<f64>,
    /// Reported cumulative GPA (informational, never validated).
    #[serde(default)]
    pub cumulative_gpa: Option<f64>,
}

impl Semester {
    pub fn new(term: TermType, year: i32) -> Self {
        Self {
            key: SemesterKey::new(term, year),
            courses: Vec::new(),
            semester_gpa: None,
            cumulative_gpa: None,
        }
    }

    pub fn term(&self) -> TermType {
        self.key.term
    }

    /// Total credits attempted, regardless of grade. Saturates at `u32::MAX`.
    pub fn attempted_credits(&self) -> u32 {
        self.courses
            .iter()
            .fold(0u32, |total, c| total.saturating_add(c.credits_attempted))
    }

    pub fn passing_codes(&self) -> impl Iterator<Item = &str> {
        self.courses
            .iter()
            .filter(|c| c.is_passing())
            .map(|c| c.code.as_str())
    }
}

/// Normalized transcript: semesters are strictly increasing by [`SemesterKey`].
///
/// Construct through the transcript normalizer; the ordering invariant is
/// not re-checked here.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Transcript {
    pub student: StudentInfo,
    pub semesters: Vec<Semester>,
}

impl Transcript {
    pub fn course_count(&self) -> usize {
        self.semesters.iter().map(|s| s.courses.len()).sum()
    }

    pub fn student_label(&self) -> &str {
        self.student
            .id
            .as_deref()
            .or(self.student.name.as_deref())
            .unwrap_or("unknown")
    }
}
