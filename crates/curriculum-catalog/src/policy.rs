//! Validation policy: grade classification and per-term credit limits.
//!
//! The policy is a plain value handed to the engine. The CLI reads it from a
//! TOML file:
//!
//! ```toml
//! [grades]
//! passing = ["A", "B+", "B", "C+", "C", "D+", "D", "P", "S"]
//! failing = ["F", "U"]
//!
//! [credit_limits]
//! standard = 22
//! summer = 9
//! ```

#![deny(unsafe_code)]

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use curriculum_model::{GradeStatus, TermType};

/// Maps raw grade tokens to a [`GradeStatus`].
///
/// Tokens compare trimmed and case-insensitively. Tokens listed nowhere are
/// [`GradeStatus::Unrecognized`] and never count as passing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GradePolicy {
    pub passing: Vec<String>,
    pub failing: Vec<String>,
    pub withdrawn: Vec<String>,
    pub incomplete: Vec<String>,
    /// In-progress markers; the empty token is listed as `""`.
    pub in_progress: Vec<String>,
}

impl Default for GradePolicy {
    fn default() -> Self {
        Self {
            passing: tokens(&["A", "B+", "B", "C+", "C", "D+", "D", "P", "S"]),
            failing: tokens(&["F", "U"]),
            withdrawn: tokens(&["W"]),
            incomplete: tokens(&["I"]),
            in_progress: tokens(&["N", ""]),
        }
    }
}

impl GradePolicy {
    pub fn classify(&self, token: &str) -> GradeStatus {
        let token = token.trim();
        let matches = |list: &[String]| list.iter().any(|t| t.trim().eq_ignore_ascii_case(token));
        if matches(&self.passing) {
            GradeStatus::Passing
        } else if matches(&self.failing) {
            GradeStatus::Failing
        } else if matches(&self.withdrawn) {
            GradeStatus::Withdrawn
        } else if matches(&self.incomplete) {
            GradeStatus::Incomplete
        } else if matches(&self.in_progress) {
            GradeStatus::InProgress
        } else {
            GradeStatus::Unrecognized
        }
    }

    /// Reject tokens listed under more than one status.
    pub fn check(&self) -> Result<(), String> {
        let mut seen: BTreeMap<String, &str> = BTreeMap::new();
        let lists = [
            ("passing", &self.passing),
            ("failing", &self.failing),
            ("withdrawn", &self.withdrawn),
            ("incomplete", &self.incomplete),
            ("in_progress", &self.in_progress),
        ];
        for (label, list) in lists {
            for token in list {
                let key = token.trim().to_uppercase();
                if let Some(previous) = seen.insert(key.clone(), label)
                    && previous != label
                {
                    return Err(format!(
                        "grade token {key:?} listed as both {previous} and {label}"
                    ));
                }
            }
        }
        Ok(())
    }
}

fn tokens(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| (*v).to_string()).collect()
}

/// Maximum attempted credits per semester.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CreditLimits {
    /// Limit for First and Second semesters.
    pub standard: u32,
    /// Limit for Summer sessions; `None` applies `standard`.
    pub summer: Option<u32>,
}

impl Default for CreditLimits {
    fn default() -> Self {
        Self {
            standard: 22,
            summer: Some(9),
        }
    }
}

impl CreditLimits {
    pub fn limit_for(&self, term: TermType) -> u32 {
        match (term, self.summer) {
            (TermType::Summer, Some(limit)) => limit,
            _ => self.standard,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationPolicy {
    pub grades: GradePolicy,
    pub credit_limits: CreditLimits,
}

impl ValidationPolicy {
    pub fn check(&self) -> Result<(), String> {
        self.grades.check()?;
        if self.credit_limits.standard == 0 {
            return Err("credit_limits.standard must be greater than zero".to_string());
        }
        Ok(())
    }
}
