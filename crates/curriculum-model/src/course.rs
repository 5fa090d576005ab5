use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Canonical form of a course code: trimmed and upper-cased.
pub fn normalize_code(code: &str) -> String {
    code.trim().to_uppercase()
}

/// Largest credit total accepted for a single course.
pub const MAX_COURSE_CREDITS: u32 = 99;

/// Contact-hour breakdown from the `lecture-lab-study` part of a credit string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreditBreakdown {
    pub lecture: u32,
    pub lab: u32,
    pub study: u32,
}

/// Credit value of a course, parsed from `total(lecture-lab-study)` notation.
///
/// Only `total` takes part in credit accounting; the breakdown is kept for
/// rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreditValue {
    pub total: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub breakdown: Option<CreditBreakdown>,
}

impl CreditValue {
    pub fn new(total: u32) -> Self {
        Self {
            total,
            breakdown: None,
        }
    }
}

impl fmt::Display for CreditValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.breakdown {
            Some(b) => write!(f, "{}({}-{}-{})", self.total, b.lecture, b.lab, b.study),
            None => write!(f, "{}", self.total),
        }
    }
}

impl FromStr for CreditValue {
    type Err = String;

    /// Parse `3(3-0-6)` or a bare total such as `3`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let (total_part, rest) = match trimmed.split_once('(') {
            Some((head, tail)) => (head.trim(), Some(tail)),
            None => (trimmed, None),
        };
        let total = parse_count(total_part)
            .filter(|total| *total <= MAX_COURSE_CREDITS)
            .ok_or_else(|| format!("invalid credit total: {s}"))?;
        let breakdown = match rest {
            None => None,
            Some(tail) => {
                let inner = tail
                    .trim()
                    .strip_suffix(')')
                    .ok_or_else(|| format!("unterminated credit breakdown: {s}"))?;
                let parts: Vec<&str> = inner.split('-').collect();
                let [lecture, lab, study] = parts.as_slice() else {
                    return Err(format!("credit breakdown needs three parts: {s}"));
                };
                Some(CreditBreakdown {
                    lecture: parse_count(lecture)
                        .ok_or_else(|| format!("invalid lecture hours: {s}"))?,
                    lab: parse_count(lab).ok_or_else(|| format!("invalid lab hours: {s}"))?,
                    study: parse_count(study).ok_or_else(|| format!("invalid study hours: {s}"))?,
                })
            }
        };
        Ok(Self { total, breakdown })
    }
}

fn parse_count(value: &str) -> Option<u32> {
    let value = value.trim();
    if value.is_empty() || !value.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    value.parse().ok()
}

/// A course as defined by the curriculum catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseDefinition {
    pub code: String,
    pub name: String,
    pub credits: CreditValue,
    #[serde(default)]
    pub prerequisites: BTreeSet<String>,
    #[serde(default)]
    pub corequisites: BTreeSet<String>,
    /// Catalog group the course was loaded from (informational).
    #[serde(default)]
    pub category: Option<String>,
}

impl CourseDefinition {
    pub fn new(code: &str, name: impl Into<String>, credits: CreditValue) -> Self {
        Self {
            code: normalize_code(code),
            name: name.into(),
            credits,
            prerequisites: BTreeSet::new(),
            corequisites: BTreeSet::new(),
            category: None,
        }
    }

    #[must_use]
    pub fn with_prerequisites<I, S>(mut self, codes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.prerequisites = normalized_set(codes);
        self
    }

    #[must_use]
    pub fn with_corequisites<I, S>(mut self, codes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.corequisites = normalized_set(codes);
        self
    }

    #[must_use]
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn has_rules(&self) -> bool {
        !self.prerequisites.is_empty() || !self.corequisites.is_empty()
    }
}

fn normalized_set<I, S>(codes: I) -> BTreeSet<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    codes
        .into_iter()
        .map(|code| normalize_code(code.as_ref()))
        .filter(|code| !code.is_empty())
        .collect()
}
