use std::fmt;

use serde::{Deserialize, Serialize};

use crate::transcript::SemesterKey;

/// Finding severity. Declaration order is report order: errors first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Error => "error",
            Severity::Warning => "warning",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum FindingKind {
    UnknownCourseCode,
    MissingPrerequisite,
    MissingCorequisite,
    CreditLimitExceeded,
    UnrecognizedGradeToken,
    DuplicateEnrollment,
    RetakeAfterPass,
}

impl FindingKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            FindingKind::UnknownCourseCode => "UnknownCourseCode",
            FindingKind::MissingPrerequisite => "MissingPrerequisite",
            FindingKind::MissingCorequisite => "MissingCorequisite",
            FindingKind::CreditLimitExceeded => "CreditLimitExceeded",
            FindingKind::UnrecognizedGradeToken => "UnrecognizedGradeToken",
            FindingKind::DuplicateEnrollment => "DuplicateEnrollment",
            FindingKind::RetakeAfterPass => "RetakeAfterPass",
        }
    }
}

impl fmt::Display for FindingKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A rule violation or advisory observed at one point of a transcript.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Finding {
    pub severity: Severity,
    pub kind: FindingKind,
    pub semester: SemesterKey,
    /// Transcript course the finding is about.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub course_code: Option<String>,
    /// Course referenced by the rule (missing prerequisite, repeated code, ...).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub related_code: Option<String>,
    /// Index of the course within its semester; `None` for semester-level findings.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<usize>,
    pub detail: String,
}

impl Finding {
    pub fn error(kind: FindingKind, semester: SemesterKey, detail: impl Into<String>) -> Self {
        Self::new(Severity::Error, kind, semester, detail)
    }

    pub fn warning(kind: FindingKind, semester: SemesterKey, detail: impl Into<String>) -> Self {
        Self::new(Severity::Warning, kind, semester, detail)
    }

    fn new(
        severity: Severity,
        kind: FindingKind,
        semester: SemesterKey,
        detail: impl Into<String>,
    ) -> Self {
        Self {
            severity,
            kind,
            semester,
            course_code: None,
            related_code: None,
            position: None,
            detail: detail.into(),
        }
    }

    #[must_use]
    pub fn with_course(mut self, code: impl Into<String>, position: usize) -> Self {
        self.course_code = Some(code.into());
        self.position = Some(position);
        self
    }

    #[must_use]
    pub fn with_related(mut self, code: impl Into<String>) -> Self {
        self.related_code = Some(code.into());
        self
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}
