use std::path::PathBuf;

use curriculum_catalog::CatalogSource;
use curriculum_model::Report;

#[derive(Debug)]
pub struct ValidationRun {
    pub catalogs: Vec<CatalogSource>,
    pub course_count: usize,
    pub transcripts: Vec<TranscriptOutcome>,
    pub has_errors: bool,
}

#[derive(Debug)]
pub struct TranscriptOutcome {
    pub path: PathBuf,
    /// Student id or name, or the file stem when neither is recorded.
    pub label: String,
    pub semesters: usize,
    pub courses: usize,
    pub result: Result<Report, String>,
    pub report_path: Option<PathBuf>,
}

impl TranscriptOutcome {
    pub fn has_errors(&self) -> bool {
        match &self.result {
            Ok(report) => report.has_errors(),
            Err(_) => true,
        }
    }
}
