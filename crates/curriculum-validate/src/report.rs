//! Report assembly: ordering and counting findings.

use curriculum_model::{CompletionSummary, Finding, Report};

/// Collects findings in emission order and produces an ordered [`Report`].
#[derive(Debug, Clone, Default)]
pub struct ReportAssembler {
    findings: Vec<Finding>,
}

impl ReportAssembler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, finding: Finding) {
        self.findings.push(finding);
    }

    pub fn extend(&mut self, findings: impl IntoIterator<Item = Finding>) {
        self.findings.extend(findings);
    }

    pub fn len(&self) -> usize {
        self.findings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.findings.is_empty()
    }

    pub fn finish(mut self, completion: CompletionSummary) -> Report {
        order_findings(&mut self.findings);
        Report::new(self.findings, completion)
    }
}

/// Sort findings for presentation.
///
/// Order: semester, errors before warnings, course position with
/// semester-level findings last, then emission order.
pub fn order_findings(findings: &mut [Finding]) {
    findings.sort_by_key(|f| (f.semester, f.severity, f.position.is_none(), f.position));
}

#[cfg(test)]
mod tests {
    use super::*;
    use curriculum_model::{FindingKind, SemesterKey, TermType};

    #[test]
    fn orders_by_semester_severity_and_position() {
        let first = SemesterKey::new(TermType::First, 2021);
        let second = SemesterKey::new(TermType::Second, 2021);
        let mut assembler = ReportAssembler::new();
        assembler.push(Finding::warning(FindingKind::CreditLimitExceeded, first, "limit"));
        assembler.push(
            Finding::error(FindingKind::MissingPrerequisite, second, "b").with_course("B", 0),
        );
        assembler.push(
            Finding::warning(FindingKind::RetakeAfterPass, first, "a").with_course("A", 2),
        );
        assembler.push(
            Finding::error(FindingKind::MissingCorequisite, first, "c").with_course("C", 3),
        );
        assembler.push(
            Finding::error(FindingKind::MissingPrerequisite, first, "d").with_course("D", 1),
        );
        assembler.push(
            Finding::error(FindingKind::UnknownCourseCode, first, "d2").with_course("D", 1),
        );
        assert_eq!(assembler.len(), 6);

        let report = assembler.finish(CompletionSummary::default());
        let details: Vec<&str> = report.findings.iter().map(|f| f.detail.as_str()).collect();
        assert_eq!(details, ["d", "d2", "c", "a", "limit", "b"]);
        assert_eq!(report.summary.errors, 4);
        assert_eq!(report.summary.warnings, 2);
    }
}
