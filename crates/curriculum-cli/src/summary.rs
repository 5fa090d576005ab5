use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{
    Attribute, Cell, CellAlignment, Color, ColumnConstraint, ContentArrangement, Table, Width,
};

use curriculum_model::{Finding, Severity};

use crate::types::{TranscriptOutcome, ValidationRun};

pub fn print_summary(run: &ValidationRun) {
    for source in &run.catalogs {
        println!(
            "Catalog: {} ({} courses, sha256 {})",
            source.path.display(),
            source.course_count,
            short_digest(&source.sha256)
        );
    }
    println!("Courses indexed: {}", run.course_count);
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Student"),
        header_cell("Transcript"),
        header_cell("Semesters"),
        header_cell("Courses"),
        header_cell("Credits"),
        header_cell("Errors"),
        header_cell("Warnings"),
        header_cell("Status"),
    ]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Right);
    align_column(&mut table, 4, CellAlignment::Right);
    align_column(&mut table, 5, CellAlignment::Right);
    align_column(&mut table, 6, CellAlignment::Right);
    align_column(&mut table, 7, CellAlignment::Center);

    let mut total_errors = 0usize;
    let mut total_warnings = 0usize;
    for outcome in &run.transcripts {
        let (errors, warnings, credits) = match &outcome.result {
            Ok(report) => (
                Some(report.error_count()),
                Some(report.warning_count()),
                Some(report.completion.completed_credits),
            ),
            Err(_) => (None, None, None),
        };
        total_errors += errors.unwrap_or(0);
        total_warnings += warnings.unwrap_or(0);
        table.add_row(vec![
            Cell::new(&outcome.label)
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold),
            Cell::new(outcome.path.display()),
            Cell::new(outcome.semesters),
            Cell::new(outcome.courses),
            credits.map_or_else(|| dim_cell("-"), Cell::new),
            count_cell(errors, Color::Red),
            count_cell(warnings, Color::Yellow),
            status_cell(outcome),
        ]);
    }
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(format!("{} transcript(s)", run.transcripts.len()))
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        dim_cell("-"),
        dim_cell("-"),
        dim_cell("-"),
        count_cell(Some(total_errors), Color::Red).add_attribute(Attribute::Bold),
        count_cell(Some(total_warnings), Color::Yellow).add_attribute(Attribute::Bold),
        dim_cell("-"),
    ]);
    println!("{table}");
    print_finding_table(run);

    let failures: Vec<(&TranscriptOutcome, &String)> = run
        .transcripts
        .iter()
        .filter_map(|outcome| outcome.result.as_ref().err().map(|e| (outcome, e)))
        .collect();
    if !failures.is_empty() {
        eprintln!("Errors:");
        for (outcome, error) in failures {
            eprintln!("- {}: {error}", outcome.path.display());
        }
    }
    let written: Vec<_> = run
        .transcripts
        .iter()
        .filter_map(|outcome| outcome.report_path.as_ref())
        .collect();
    if !written.is_empty() {
        println!();
        for path in written {
            println!("Report: {}", path.display());
        }
    }
}

fn print_finding_table(run: &ValidationRun) {
    let findings: Vec<(&str, &Finding)> = run
        .transcripts
        .iter()
        .filter_map(|outcome| {
            outcome
                .result
                .as_ref()
                .ok()
                .map(|report| (outcome.label.as_str(), report))
        })
        .flat_map(|(label, report)| report.findings.iter().map(move |f| (label, f)))
        .collect();
    if findings.is_empty() {
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Student"),
        header_cell("Semester"),
        header_cell("Severity"),
        header_cell("Kind"),
        header_cell("Course"),
        header_cell("Related"),
        header_cell("Detail"),
    ]);
    apply_finding_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Center);
    for (label, finding) in findings {
        table.add_row(vec![
            Cell::new(label),
            Cell::new(finding.semester),
            severity_cell(finding.severity),
            Cell::new(finding.kind),
            optional_cell(finding.course_code.as_deref()),
            optional_cell(finding.related_code.as_deref()),
            Cell::new(&finding.detail),
        ]);
    }
    println!();
    println!("Findings:");
    println!("{table}");
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(140);
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::DynamicFullWidth)
        .set_width(140);
    if table.column_count() >= 8 {
        table.set_constraints(vec![
            ColumnConstraint::UpperBoundary(Width::Fixed(24)),
            ColumnConstraint::UpperBoundary(Width::Percentage(40)),
            ColumnConstraint::LowerBoundary(Width::Fixed(9)),
            ColumnConstraint::LowerBoundary(Width::Fixed(7)),
            ColumnConstraint::LowerBoundary(Width::Fixed(7)),
            ColumnConstraint::LowerBoundary(Width::Fixed(6)),
            ColumnConstraint::LowerBoundary(Width::Fixed(8)),
            ColumnConstraint::LowerBoundary(Width::Fixed(8)),
        ]);
    }
}

fn apply_finding_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::DynamicFullWidth)
        .set_width(180);
    if table.column_count() >= 7 {
        table.set_constraints(vec![
            ColumnConstraint::UpperBoundary(Width::Fixed(16)),
            ColumnConstraint::UpperBoundary(Width::Fixed(12)),
            ColumnConstraint::UpperBoundary(Width::Fixed(9)),
            ColumnConstraint::UpperBoundary(Width::Fixed(24)),
            ColumnConstraint::UpperBoundary(Width::Fixed(10)),
            ColumnConstraint::UpperBoundary(Width::Fixed(10)),
            ColumnConstraint::UpperBoundary(Width::Percentage(50)),
        ]);
    }
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn status_cell(outcome: &TranscriptOutcome) -> Cell {
    match &outcome.result {
        Ok(report) if report.is_valid() => Cell::new("VALID")
            .fg(Color::Green)
            .add_attribute(Attribute::Bold),
        Ok(_) => Cell::new("INVALID").fg(Color::Red),
        Err(_) => Cell::new("FAILED")
            .fg(Color::Red)
            .add_attribute(Attribute::Bold),
    }
}

fn severity_cell(severity: Severity) -> Cell {
    match severity {
        Severity::Error => Cell::new("ERROR").fg(Color::Red),
        Severity::Warning => Cell::new("WARN").fg(Color::Yellow),
    }
}

fn count_cell(count: Option<usize>, color: Color) -> Cell {
    match count {
        Some(value) if value > 0 => Cell::new(value).fg(color).add_attribute(Attribute::Bold),
        Some(value) => dim_cell(value),
        None => dim_cell("-"),
    }
}

fn optional_cell(value: Option<&str>) -> Cell {
    value.map_or_else(|| dim_cell("-"), Cell::new)
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}

fn short_digest(digest: &str) -> &str {
    digest.get(..12).unwrap_or(digest)
}
