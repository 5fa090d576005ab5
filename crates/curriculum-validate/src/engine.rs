//! Validation engine: drives the tracker across a transcript and merges the
//! rule and credit findings into one report.

use tracing::{debug, info, info_span};

use curriculum_catalog::{CatalogIndex, ValidationPolicy};
use curriculum_model::{Report, StructureResult, Transcript};

use crate::completion::summarize_completion;
use crate::credit::check_credit_limit;
use crate::report::ReportAssembler;
use crate::rules::evaluate_semester;
use crate::tracker::CompletionTracker;

/// Validation context: an immutable catalog and policy shared by every run.
#[derive(Debug, Clone, Copy)]
pub struct Validator<'a> {
    catalog: &'a CatalogIndex,
    policy: &'a ValidationPolicy,
}

impl<'a> Validator<'a> {
    pub fn new(catalog: &'a CatalogIndex, policy: &'a ValidationPolicy) -> Self {
        Self { catalog, policy }
    }

    pub fn catalog(&self) -> &'a CatalogIndex {
        self.catalog
    }

    pub fn policy(&self) -> &'a ValidationPolicy {
        self.policy
    }

    /// Validate one transcript.
    ///
    /// # Errors
    ///
    /// [`curriculum_model::StructureError::SemesterOutOfOrder`] if the
    /// semesters are not strictly increasing. Transcripts built by the
    /// normalizer always are.
    pub fn validate(&self, transcript: &Transcript) -> StructureResult<Report> {
        let span = info_span!("validate", semesters = transcript.semesters.len());
        let _guard = span.enter();

        let mut tracker = CompletionTracker::new();
        let mut assembler = ReportAssembler::new();
        for semester in &transcript.semesters {
            tracker.advance(semester)?;
            let before = assembler.len();
            if let Some(snapshot) = tracker.snapshot() {
                assembler.extend(evaluate_semester(semester, &snapshot, self.catalog));
            }
            assembler.extend(check_credit_limit(semester, &self.policy.credit_limits));
            debug!(
                semester = %semester.key,
                courses = semester.courses.len(),
                credits = semester.attempted_credits(),
                passed_before = tracker.passed_before().len(),
                findings = assembler.len() - before,
                "semester evaluated"
            );
        }
        let completion = summarize_completion(transcript, tracker.finish(), self.catalog);
        let report = assembler.finish(completion);
        info!(
            errors = report.error_count(),
            warnings = report.warning_count(),
            completed_credits = report.completion.completed_credits,
            "transcript validated"
        );
        Ok(report)
    }

    /// Validate transcripts independently of each other.
    pub fn validate_all<'t, I>(&self, transcripts: I) -> Vec<StructureResult<Report>>
    where
        I: IntoIterator<Item = &'t Transcript>,
    {
        transcripts
            .into_iter()
            .map(|transcript| self.validate(transcript))
            .collect()
    }
}

/// Validate a transcript against a catalog and policy.
pub fn validate_transcript(
    transcript: &Transcript,
    catalog: &CatalogIndex,
    policy: &ValidationPolicy,
) -> StructureResult<Report> {
    Validator::new(catalog, policy).validate(transcript)
}
