//! Type-safe enumerations for transcript and finding concepts.
//!
//! These enums replace the literal strings found in transcript files
//! ("First", "Summer Session", "W", ...) with closed sets.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Academic term within a year.
///
/// Terms are ranked First < Second < Summer inside the same academic year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum TermType {
    First,
    Second,
    Summer,
}

impl TermType {
    /// Within-year ordering used to totally order semesters.
    pub fn rank(&self) -> u8 {
        match self {
            TermType::First => 0,
            TermType::Second => 1,
            TermType::Summer => 2,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TermType::First => "First",
            TermType::Second => "Second",
            TermType::Summer => "Summer",
        }
    }

    pub fn is_summer(&self) -> bool {
        matches!(self, TermType::Summer)
    }
}

impl fmt::Display for TermType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for TermType {
    type Err = String;

    /// Parse a term literal (case-insensitive).
    /// Accepts the long forms printed on transcripts ("First Semester", "Summer Session").
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_uppercase();
        let head = normalized
            .strip_suffix(" SEMESTER")
            .or_else(|| normalized.strip_suffix(" SESSION"))
            .unwrap_or(&normalized);
        match head.trim() {
            "FIRST" | "1" => Ok(TermType::First),
            "SECOND" | "2" => Ok(TermType::Second),
            "SUMMER" | "3" => Ok(TermType::Summer),
            _ => Err(format!("Unknown term type: {s}")),
        }
    }
}

/// Completion status derived from a raw grade token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GradeStatus {
    /// Counts as completion for prerequisite and corequisite checks.
    Passing,
    Failing,
    Withdrawn,
    Incomplete,
    /// Course still running (e.g. "N" or a blank grade).
    InProgress,
    /// Token not covered by the grade policy; treated as non-passing.
    Unrecognized,
}

impl GradeStatus {
    pub fn is_passing(&self) -> bool {
        matches!(self, GradeStatus::Passing)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GradeStatus::Passing => "passing",
            GradeStatus::Failing => "failing",
            GradeStatus::Withdrawn => "withdrawn",
            GradeStatus::Incomplete => "incomplete",
            GradeStatus::InProgress => "in progress",
            GradeStatus::Unrecognized => "unrecognized",
        }
    }
}

impl fmt::Display for GradeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_term_type_from_str() {
        assert_eq!("first".parse::<TermType>().unwrap(), TermType::First);
        assert_eq!(
            "Second Semester".parse::<TermType>().unwrap(),
            TermType::Second
        );
        assert_eq!(
            "Summer Session".parse::<TermType>().unwrap(),
            TermType::Summer
        );
        assert!("Winter".parse::<TermType>().is_err());
    }

    #[test]
    fn test_term_rank_order() {
        assert!(TermType::First.rank() < TermType::Second.rank());
        assert!(TermType::Second.rank() < TermType::Summer.rank());
        assert!(TermType::First < TermType::Summer);
    }

    #[test]
    fn test_only_passing_status_is_passing() {
        assert!(GradeStatus::Passing.is_passing());
        for status in [
            GradeStatus::Failing,
            GradeStatus::Withdrawn,
            GradeStatus::Incomplete,
            GradeStatus::InProgress,
            GradeStatus::Unrecognized,
        ] {
            assert!(!status.is_passing(), "{status} must not count as passing");
        }
    }
}
