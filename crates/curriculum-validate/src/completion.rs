use std::collections::{BTreeMap, BTreeSet};

use curriculum_catalog::CatalogIndex;
use curriculum_model::{CompletionSummary, Transcript, normalize_code};

/// Category for passed codes the catalog does not define.
pub const UNIDENTIFIED_CATEGORY: &str = "unidentified";

/// Credit totals for a transcript.
///
/// `passed` is the tracker's terminal set of passed codes. Each passed code is
/// counted once, with the credits recorded on its first passing attempt.
/// Totals saturate at `u32::MAX`.
pub fn summarize_completion(
    transcript: &Transcript,
    passed: BTreeSet<String>,
    catalog: &CatalogIndex,
) -> CompletionSummary {
    let mut summary = CompletionSummary::default();
    let mut counted = BTreeSet::new();
    let mut by_category: BTreeMap<String, u32> = BTreeMap::new();

    for course in transcript.semesters.iter().flat_map(|s| &s.courses) {
        summary.attempted_credits = summary
            .attempted_credits
            .saturating_add(course.credits_attempted);
        let code = normalize_code(&course.code);
        if !course.is_passing() || !passed.contains(&code) || !counted.insert(code.clone()) {
            continue;
        }
        summary.completed_credits = summary
            .completed_credits
            .saturating_add(course.credits_attempted);
        let category = catalog
            .category_of(&code)
            .unwrap_or_else(|| UNIDENTIFIED_CATEGORY.to_string());
        let entry = by_category.entry(category).or_default();
        *entry = entry.saturating_add(course.credits_attempted);
    }

    summary.passed_codes = passed.into_iter().collect();
    summary.completed_by_category = by_category;
    summary
}
