//! Temporal completion tracking.
//!
//! The tracker walks a transcript one semester at a time and answers "which
//! courses had been passed at this point". Passing status never regresses: a
//! failed retake leaves an earlier pass in place. Codes are stored and looked
//! up in normalized form, so hand-built transcripts match the catalog.

use std::collections::{BTreeMap, BTreeSet};

use curriculum_model::{Semester, SemesterKey, StructureError, StructureResult, normalize_code};

/// Completion state seen by the courses of one semester.
#[derive(Debug, Clone, Copy)]
pub struct CompletionSnapshot<'a> {
    pub semester: SemesterKey,
    /// Codes passed in semesters strictly before `semester`.
    pub passed_before: &'a BTreeSet<String>,
    /// Codes passed within `semester`.
    pub passed_this_semester: &'a BTreeSet<String>,
    first_passed: &'a BTreeMap<String, SemesterKey>,
}

impl CompletionSnapshot<'_> {
    pub fn satisfies_prerequisite(&self, code: &str) -> bool {
        self.passed_before.contains(&normalize_code(code))
    }

    pub fn satisfies_corequisite(&self, code: &str) -> bool {
        let code = normalize_code(code);
        self.passed_before.contains(&code) || self.passed_this_semester.contains(&code)
    }

    /// Semester of the earliest pass, if it precedes this snapshot.
    pub fn passed_earlier_in(&self, code: &str) -> Option<SemesterKey> {
        self.first_passed
            .get(&normalize_code(code))
            .copied()
            .filter(|key| *key < self.semester)
    }
}

#[derive(Debug, Clone, Default)]
pub struct CompletionTracker {
    passed_before: BTreeSet<String>,
    passed_this_semester: BTreeSet<String>,
    current: Option<SemesterKey>,
    first_passed: BTreeMap<String, SemesterKey>,
}

impl CompletionTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Move to `semester`, committing the previous one first.
    ///
    /// # Errors
    ///
    /// [`StructureError::SemesterOutOfOrder`] if `semester` does not come
    /// strictly after the current semester.
    pub fn advance(&mut self, semester: &Semester) -> StructureResult<()> {
        if let Some(previous) = self.current
            && semester.key <= previous
        {
            return Err(StructureError::SemesterOutOfOrder {
                key: semester.key,
                previous,
            });
        }
        self.commit();
        self.current = Some(semester.key);
        for code in semester.passing_codes().map(normalize_code) {
            self.passed_this_semester.insert(code.clone());
            self.first_passed.entry(code).or_insert(semester.key);
        }
        Ok(())
    }

    /// Snapshot for the current semester; `None` before the first advance.
    pub fn snapshot(&self) -> Option<CompletionSnapshot<'_>> {
        self.current.map(|semester| CompletionSnapshot {
            semester,
            passed_before: &self.passed_before,
            passed_this_semester: &self.passed_this_semester,
            first_passed: &self.first_passed,
        })
    }

    /// Fold the current semester's passes into `passed_before`.
    pub fn commit(&mut self) {
        let passed = std::mem::take(&mut self.passed_this_semester);
        self.passed_before.extend(passed);
    }

    pub fn current_semester(&self) -> Option<SemesterKey> {
        self.current
    }

    pub fn passed_before(&self) -> &BTreeSet<String> {
        &self.passed_before
    }

    /// Codes first passed strictly before `key`.
    pub fn passed_as_of(&self, key: SemesterKey) -> BTreeSet<&str> {
        self.first_passed
            .iter()
            .filter(|(_, first)| **first < key)
            .map(|(code, _)| code.as_str())
            .collect()
    }

    pub fn first_passed(&self, code: &str) -> Option<SemesterKey> {
        self.first_passed.get(&normalize_code(code)).copied()
    }

    /// Commit and return every code passed anywhere on the transcript.
    pub fn finish(mut self) -> BTreeSet<String> {
        self.commit();
        self.passed_before
    }
}
