use std::path::{Path, PathBuf};

use tracing::debug;

use curriculum_catalog::GradePolicy;
use curriculum_model::Transcript;

use crate::error::{IngestError, Result};
use crate::normalize::normalize_transcript;
use crate::records::TranscriptRecord;

/// A normalized transcript and the file it came from.
#[derive(Debug, Clone)]
pub struct LoadedTranscript {
    pub path: PathBuf,
    pub transcript: Transcript,
}

impl LoadedTranscript {
    /// Student id if present, otherwise the file stem.
    pub fn report_stem(&self) -> String {
        self.transcript
            .student
            .id
            .as_deref()
            .map(str::trim)
            .filter(|id| !id.is_empty())
            .map(str::to_string)
            .or_else(|| {
                self.path
                    .file_stem()
                    .and_then(|stem| stem.to_str())
                    .map(str::to_string)
            })
            .unwrap_or_else(|| "transcript".to_string())
    }
}

pub fn read_transcript_record(path: &Path) -> Result<TranscriptRecord> {
    let bytes = std::fs::read(path).map_err(|e| IngestError::FileRead {
        path: path.to_path_buf(),
        source: e,
    })?;
    serde_json::from_slice(&bytes).map_err(|source| IngestError::Json {
        path: path.to_path_buf(),
        source,
    })
}

/// Read and normalize one transcript file.
pub fn load_transcript(path: &Path, policy: &GradePolicy) -> Result<LoadedTranscript> {
    let record = read_transcript_record(path)?;
    debug!(path = %path.display(), semesters = record.semesters.len(), "transcript file parsed");
    let transcript = normalize_transcript(record, policy)?;
    Ok(LoadedTranscript {
        path: path.to_path_buf(),
        transcript,
    })
}
