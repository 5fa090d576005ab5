//! JSON report files written by `validate --output-dir`.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::Utc;
use serde::Serialize;

use curriculum_catalog::CatalogSource;
use curriculum_model::{Report, StudentInfo};

pub const REPORT_SCHEMA: &str = "curriculum-check.transcript-report";
pub const REPORT_SCHEMA_VERSION: u32 = 1;

#[derive(Debug, Serialize)]
pub struct ReportPayload<'a> {
    pub schema: &'static str,
    pub schema_version: u32,
    pub generated_at: String,
    pub transcript: String,
    pub catalogs: &'a [CatalogSource],
    pub student: &'a StudentInfo,
    pub valid: bool,
    pub report: &'a Report,
}

impl<'a> ReportPayload<'a> {
    pub fn new(
        transcript: &Path,
        catalogs: &'a [CatalogSource],
        student: &'a StudentInfo,
        report: &'a Report,
    ) -> Self {
        Self {
            schema: REPORT_SCHEMA,
            schema_version: REPORT_SCHEMA_VERSION,
            generated_at: Utc::now().to_rfc3339(),
            transcript: transcript.display().to_string(),
            catalogs,
            student,
            valid: report.is_valid(),
            report,
        }
    }
}

/// Write `<stem>.report.json` into `output_dir`, creating the directory.
pub fn write_report_json(
    output_dir: &Path,
    stem: &str,
    payload: &ReportPayload<'_>,
) -> Result<PathBuf> {
    std::fs::create_dir_all(output_dir)
        .with_context(|| format!("create output directory {}", output_dir.display()))?;
    let output_path = output_dir.join(format!("{}.report.json", sanitize_stem(stem)));
    let json = serde_json::to_string_pretty(payload)?;
    std::fs::write(&output_path, format!("{json}\n"))
        .with_context(|| format!("write {}", output_path.display()))?;
    Ok(output_path)
}

/// Keep report file names to a portable character set.
///
/// Idempotent, so a stem sanitized before deduplication is written unchanged.
pub fn sanitize_stem(stem: &str) -> String {
    let cleaned: String = stem
        .trim()
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.') {
                c
            } else {
                '_'
            }
        })
        .collect();
    if cleaned.is_empty() {
        "transcript".to_string()
    } else {
        cleaned
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sanitizes_stems() {
        assert_eq!(sanitize_stem("6510500001"), "6510500001");
        assert_eq!(sanitize_stem("a/b c"), "a_b_c");
        assert_eq!(sanitize_stem("  "), "transcript");
        assert_eq!(sanitize_stem(&sanitize_stem(" S 1/x ")), "S_1_x");
    }
}
