//! Raw transcript records as written by the transcript extractor.
//!
//! ```json
//! {
//!   "student_info": { "id": "6510500001", "name": "...", "field_of_study": "..." },
//!   "semesters": [
//!     { "semester_type": "First", "year": 2021, "sem_gpa": 3.25, "cum_gpa": 3.25,
//!       "courses": [ { "code": "01417167", "name": "...", "grade": "B+", "credits": 3 } ] }
//!   ]
//! }
//! ```
//!
//! Fields are kept close to the file format; [`crate::normalize`] turns them
//! into the validated model.

use serde::Deserialize;

use curriculum_catalog::RawCredits;
use curriculum_model::{StructureError, StudentInfo};

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TranscriptRecord {
    #[serde(default)]
    pub student_info: StudentInfo,
    #[serde(default)]
    pub semesters: Vec<SemesterRecord>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SemesterRecord {
    #[serde(alias = "term_type")]
    pub semester_type: String,
    pub year: RawYear,
    #[serde(default)]
    pub sem_gpa: Option<RawNumber>,
    #[serde(default)]
    pub cum_gpa: Option<RawNumber>,
    #[serde(default)]
    pub courses: Vec<CourseRecord>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CourseRecord {
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub grade: String,
    pub credits: RawCredits,
}

/// Year as an integer or a numeric string (`2021` or `"2021"`).
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum RawYear {
    Number(i64),
    Text(String),
}

impl RawYear {
    /// `index` is the semester's position in the file, for error messages.
    pub fn to_year(&self, index: usize) -> Result<i32, StructureError> {
        let malformed = |value: String| StructureError::MalformedYear { value, index };
        match self {
            RawYear::Number(n) => i32::try_from(*n).map_err(|_| malformed(n.to_string())),
            RawYear::Text(text) => text.trim().parse().map_err(|_| malformed(text.clone())),
        }
    }
}

/// GPA as printed: a number, a numeric string, or a placeholder such as `"-"`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum RawNumber {
    Number(f64),
    Text(String),
}

impl RawNumber {
    pub fn to_f64(&self) -> Option<f64> {
        match self {
            RawNumber::Number(n) => Some(*n),
            RawNumber::Text(text) => text.trim().parse().ok(),
        }
    }
}
