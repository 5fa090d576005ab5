use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::finding::{Finding, FindingKind, Severity};
use crate::transcript::SemesterKey;

/// Counts per severity and per kind.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportSummary {
    pub errors: usize,
    pub warnings: usize,
    pub by_kind: BTreeMap<FindingKind, usize>,
}

impl ReportSummary {
    pub fn from_findings(findings: &[Finding]) -> Self {
        let mut summary = Self::default();
        for finding in findings {
            match finding.severity {
                Severity::Error => summary.errors += 1,
                Severity::Warning => summary.warnings += 1,
            }
            *summary.by_kind.entry(finding.kind).or_default() += 1;
        }
        summary
    }

    pub fn count(&self, kind: FindingKind) -> usize {
        self.by_kind.get(&kind).copied().unwrap_or(0)
    }
}

/// Completion totals after the last semester (informational).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletionSummary {
    pub passed_codes: Vec<String>,
    pub attempted_credits: u32,
    /// Each passed code counted once.
    pub completed_credits: u32,
    pub completed_by_category: BTreeMap<String, u32>,
}

/// Ordered findings for one transcript.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    pub findings: Vec<Finding>,
    pub summary: ReportSummary,
    pub completion: CompletionSummary,
}

impl Report {
    /// Wrap already-ordered findings; counts are derived here.
    pub fn new(findings: Vec<Finding>, completion: CompletionSummary) -> Self {
        let summary = ReportSummary::from_findings(&findings);
        Self {
            findings,
            summary,
            completion,
        }
    }

    pub fn error_count(&self) -> usize {
        self.summary.errors
    }

    pub fn warning_count(&self) -> usize {
        self.summary.warnings
    }

    pub fn has_errors(&self) -> bool {
        self.error_count() > 0
    }

    /// A report is valid when it carries no error-severity findings.
    pub fn is_valid(&self) -> bool {
        !self.has_errors()
    }

    pub fn findings_for(&self, semester: SemesterKey) -> impl Iterator<Item = &Finding> {
        self.findings.iter().filter(move |f| f.semester == semester)
    }

    pub fn findings_of(&self, kind: FindingKind) -> impl Iterator<Item = &Finding> {
        self.findings.iter().filter(move |f| f.kind == kind)
    }
}
