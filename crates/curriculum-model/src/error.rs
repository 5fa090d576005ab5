use thiserror::Error;

use crate::transcript::SemesterKey;

/// Hard failures raised while building a catalog index.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("duplicate course code {code} (categories: {first}, {second})")]
    DuplicateCode {
        code: String,
        first: String,
        second: String,
    },
    #[error("course record with empty code (name: {name:?})")]
    EmptyCode { name: String },
    #[error("course {code} lists itself as a {relation}")]
    SelfReference { code: String, relation: String },
    #[error("prerequisite cycle: {}", path.join(" -> "))]
    PrerequisiteCycle { path: Vec<String> },
}

/// Hard failures raised while validating transcript or catalog structure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StructureError {
    #[error("semester {key} appears more than once")]
    DuplicateSemesterKey { key: SemesterKey },
    #[error("malformed credit value {value:?} for {context}")]
    MalformedCreditValue { value: String, context: String },
    #[error("malformed year {value:?} in semester record {index}")]
    MalformedYear { value: String, index: usize },
    #[error("invalid term type {value:?} in semester record {index}")]
    InvalidTermType { value: String, index: usize },
    #[error("course record {position} in {semester} has no code")]
    MissingCourseCode { semester: SemesterKey, position: usize },
    #[error("semester {key} advanced after {previous}")]
    SemesterOutOfOrder {
        key: SemesterKey,
        previous: SemesterKey,
    },
}

pub type CatalogResult<T> = std::result::Result<T, CatalogError>;
pub type StructureResult<T> = std::result::Result<T, StructureError>;
