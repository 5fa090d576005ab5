pub mod course;
pub mod enums;
pub mod error;
pub mod finding;
pub mod report;
pub mod transcript;

pub use course::{
    CourseDefinition, CreditBreakdown, CreditValue, MAX_COURSE_CREDITS, normalize_code,
};
pub use enums::{GradeStatus, TermType};
pub use error::{CatalogError, CatalogResult, StructureError, StructureResult};
pub use finding::{Finding, FindingKind, Severity};
pub use report::{CompletionSummary, Report, ReportSummary};
pub use transcript::{EnrolledCourse, Semester, SemesterKey, StudentInfo, Transcript};
