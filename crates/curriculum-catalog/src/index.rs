//! Catalog index: code → course definition.
//!
//! The index is built once and is read-only afterwards, so a single instance
//! can back any number of validation runs (including concurrent ones).

#![deny(unsafe_code)]

use std::collections::{BTreeMap, BTreeSet};

use tracing::debug;

use curriculum_model::{CatalogError, CatalogResult, CourseDefinition, normalize_code};

const UNCATEGORIZED: &str = "uncategorized";

#[derive(Debug, Clone, Default)]
pub struct CatalogIndex {
    courses: BTreeMap<String, CourseDefinition>,
    /// Referenced-but-undefined code → courses referencing it.
    dangling: BTreeMap<String, BTreeSet<String>>,
}

impl CatalogIndex {
    /// Build an index from course definitions.
    ///
    /// # Errors
    ///
    /// Fails on empty or duplicate codes, on a course listing itself as a
    /// prerequisite or corequisite, and on prerequisite cycles. References to
    /// codes outside the catalog are recorded, not rejected.
    pub fn build<I>(definitions: I) -> CatalogResult<Self>
    where
        I: IntoIterator<Item = CourseDefinition>,
    {
        let mut courses: BTreeMap<String, CourseDefinition> = BTreeMap::new();
        for definition in definitions {
            if definition.code.is_empty() {
                return Err(CatalogError::EmptyCode {
                    name: definition.name,
                });
            }
            check_self_reference(&definition)?;
            if let Some(existing) = courses.get(&definition.code) {
                return Err(CatalogError::DuplicateCode {
                    code: definition.code.clone(),
                    first: category_label(existing),
                    second: category_label(&definition),
                });
            }
            courses.insert(definition.code.clone(), definition);
        }

        let dangling = collect_dangling(&courses);
        if let Some(path) = find_prerequisite_cycle(&courses) {
            return Err(CatalogError::PrerequisiteCycle { path });
        }

        debug!(
            course_count = courses.len(),
            dangling_count = dangling.len(),
            "catalog index built"
        );
        Ok(Self { courses, dangling })
    }

    pub fn get(&self, code: &str) -> Option<&CourseDefinition> {
        self.courses
            .get(code)
            .or_else(|| self.courses.get(&normalize_code(code)))
    }

    pub fn contains(&self, code: &str) -> bool {
        self.get(code).is_some()
    }

    pub fn len(&self) -> usize {
        self.courses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }

    /// Courses in code order.
    pub fn courses(&self) -> impl Iterator<Item = &CourseDefinition> {
        self.courses.values()
    }

    /// Prerequisite/corequisite codes that no catalog course defines.
    pub fn dangling_references(&self) -> &BTreeMap<String, BTreeSet<String>> {
        &self.dangling
    }

    /// Category label used for completion accounting.
    pub fn category_of(&self, code: &str) -> Option<String> {
        self.get(code).map(category_label)
    }
}

fn category_label(course: &CourseDefinition) -> String {
    course
        .category
        .clone()
        .unwrap_or_else(|| UNCATEGORIZED.to_string())
}

fn check_self_reference(course: &CourseDefinition) -> CatalogResult<()> {
    let relation = if course.prerequisites.contains(&course.code) {
        "prerequisite"
    } else if course.corequisites.contains(&course.code) {
        "corequisite"
    } else {
        return Ok(());
    };
    Err(CatalogError::SelfReference {
        code: course.code.clone(),
        relation: relation.to_string(),
    })
}

fn collect_dangling(
    courses: &BTreeMap<String, CourseDefinition>,
) -> BTreeMap<String, BTreeSet<String>> {
    let mut dangling: BTreeMap<String, BTreeSet<String>> = BTreeMap::new();
    for course in courses.values() {
        for reference in course.prerequisites.iter().chain(&course.corequisites) {
            if !courses.contains_key(reference) {
                dangling
                    .entry(reference.clone())
                    .or_default()
                    .insert(course.code.clone());
            }
        }
    }
    dangling
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Mark {
    Visiting,
    Done,
}

/// Depth-first search over prerequisite edges, in code order.
///
/// Returns the first cycle found as `[start, ..., start]`.
fn find_prerequisite_cycle(courses: &BTreeMap<String, CourseDefinition>) -> Option<Vec<String>> {
    let mut marks: BTreeMap<&str, Mark> = BTreeMap::new();
    let mut stack: Vec<&str> = Vec::new();
    for code in courses.keys() {
        if let Some(cycle) = visit(code, courses, &mut marks, &mut stack) {
            return Some(cycle);
        }
    }
    None
}

fn visit<'a>(
    code: &'a str,
    courses: &'a BTreeMap<String, CourseDefinition>,
    marks: &mut BTreeMap<&'a str, Mark>,
    stack: &mut Vec<&'a str>,
) -> Option<Vec<String>> {
    match marks.get(code) {
        Some(Mark::Done) => return None,
        Some(Mark::Visiting) => {
            let start = stack.iter().position(|c| *c == code)?;
            let mut path: Vec<String> = stack[start..].iter().map(|c| (*c).to_string()).collect();
            path.push(code.to_string());
            return Some(path);
        }
        None => {}
    }

    marks.insert(code, Mark::Visiting);
    stack.push(code);
    if let Some(course) = courses.get(code) {
        for prerequisite in &course.prerequisites {
            if !courses.contains_key(prerequisite) {
                continue;
            }
            if let Some(cycle) = visit(prerequisite, courses, marks, stack) {
                return Some(cycle);
            }
        }
    }
    stack.pop();
    marks.insert(code, Mark::Done);
    None
}
