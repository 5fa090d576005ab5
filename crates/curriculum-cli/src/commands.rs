use std::collections::BTreeSet;
use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use comfy_table::Table;
use tracing::{debug, info, info_span, warn};

use curriculum_catalog::{
    CatalogSource, LoadedCatalog, ValidationPolicy, load_catalog, load_policy_or_default,
};
use curriculum_cli::logging::redact_value;
use curriculum_cli::report_json::{ReportPayload, sanitize_stem, write_report_json};
use curriculum_ingest::{LoadedTranscript, expand_transcript_inputs, load_transcript};
use curriculum_validate::Validator;

use crate::cli::{CoursesArgs, ValidateArgs};
use crate::summary::apply_table_style;
use crate::types::{TranscriptOutcome, ValidationRun};

pub fn run_courses(args: &CoursesArgs) -> Result<()> {
    let catalog = load_catalog(&args.catalogs).context("load catalog")?;
    let mut table = Table::new();
    table.set_header(vec![
        "Code",
        "Name",
        "Credits",
        "Category",
        "Prerequisites",
        "Corequisites",
    ]);
    apply_table_style(&mut table);
    for course in catalog.index.courses() {
        table.add_row(vec![
            course.code.clone(),
            course.name.clone(),
            course.credits.to_string(),
            course.category.clone().unwrap_or_default(),
            join_codes(&course.prerequisites),
            join_codes(&course.corequisites),
        ]);
    }
    println!("{table}");

    let dangling = catalog.index.dangling_references();
    if !dangling.is_empty() {
        let mut table = Table::new();
        table.set_header(vec!["Undefined code", "Referenced by"]);
        apply_table_style(&mut table);
        for (code, referencing) in dangling {
            table.add_row(vec![code.clone(), join_codes(referencing)]);
        }
        println!();
        println!("Referenced but not defined:");
        println!("{table}");
    }
    Ok(())
}

pub fn run_validate(args: &ValidateArgs) -> Result<ValidationRun> {
    let start = Instant::now();
    let LoadedCatalog { index, sources } =
        load_catalog(&args.catalogs).context("load catalog")?;
    let policy = load_policy_or_default(args.policy.as_deref()).context("load policy")?;
    debug!(credit_limits = ?policy.credit_limits, "validation policy resolved");

    let files = expand_transcript_inputs(&args.transcripts).context("find transcripts")?;
    info!(transcripts = files.len(), "validating transcripts");

    let validator = Validator::new(&index, &policy);
    let mut stems: BTreeSet<String> = BTreeSet::new();
    let mut transcripts = Vec::with_capacity(files.len());
    for path in &files {
        let outcome = validate_file(path, &validator, &policy, &sources, args, &mut stems);
        transcripts.push(outcome);
    }

    let has_errors = transcripts.iter().any(TranscriptOutcome::has_errors);
    info!(
        transcripts = transcripts.len(),
        invalid = transcripts.iter().filter(|t| t.has_errors()).count(),
        elapsed_ms = start.elapsed().as_millis(),
        "validation finished"
    );
    Ok(ValidationRun {
        catalogs: sources,
        course_count: index.len(),
        transcripts,
        has_errors,
    })
}

fn validate_file(
    path: &Path,
    validator: &Validator<'_>,
    policy: &ValidationPolicy,
    sources: &[CatalogSource],
    args: &ValidateArgs,
    stems: &mut BTreeSet<String>,
) -> TranscriptOutcome {
    let span = info_span!("transcript", path = %path.display());
    let _guard = span.enter();

    let loaded = match load_transcript(path, &policy.grades) {
        Ok(loaded) => loaded,
        Err(error) => {
            warn!(%error, "transcript rejected");
            return TranscriptOutcome {
                path: path.to_path_buf(),
                label: file_stem(path),
                semesters: 0,
                courses: 0,
                result: Err(error.to_string()),
                report_path: None,
            };
        }
    };
    let LoadedTranscript { transcript, .. } = &loaded;
    debug!(student = redact_value(transcript.student_label()), "transcript loaded");

    let mut report_path = None;
    let result = match validator.validate(transcript) {
        Ok(report) => match &args.output_dir {
            Some(output_dir) => {
                let stem = unique_stem(&loaded.report_stem(), stems);
                let payload = ReportPayload::new(path, sources, &transcript.student, &report);
                match write_report_json(output_dir, &stem, &payload) {
                    Ok(written) => {
                        debug!(path = %written.display(), "report written");
                        report_path = Some(written);
                        Ok(report)
                    }
                    Err(error) => Err(format!("{error:#}")),
                }
            }
            None => Ok(report),
        },
        Err(error) => Err(error.to_string()),
    };
    if let Err(error) = &result {
        warn!(%error, "transcript not validated");
    }

    let has_student = transcript.student.id.is_some() || transcript.student.name.is_some();
    TranscriptOutcome {
        path: path.to_path_buf(),
        label: if has_student {
            transcript.student_label().to_string()
        } else {
            file_stem(path)
        },
        semesters: transcript.semesters.len(),
        courses: transcript.course_count(),
        result,
        report_path,
    }
}

/// Sanitize `stem` and suffix it until it differs from every stem already issued.
fn unique_stem(stem: &str, issued: &mut BTreeSet<String>) -> String {
    let base = sanitize_stem(stem);
    let mut candidate = base.clone();
    let mut suffix = 1;
    while !issued.insert(candidate.clone()) {
        suffix += 1;
        candidate = format!("{base}-{suffix}");
    }
    candidate
}

fn file_stem(path: &Path) -> String {
    path.file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or("transcript")
        .to_string()
}

fn join_codes<'a>(codes: impl IntoIterator<Item = &'a String>) -> String {
    codes
        .into_iter()
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}
