//! Raw catalog records as they appear in curriculum JSON files.
//!
//! A catalog file is an object whose top-level keys name course groups:
//!
//! ```json
//! {
//!   "curriculum": "B-IE-2565",
//!   "industrial_engineering_courses": [ { "code": "01206221", ... } ],
//!   "gen_ed_courses": { "wellness": [ ... ], "aesthetics": [ ... ] }
//! }
//! ```
//!
//! Lists of objects are course groups, objects of such lists are nested
//! groups, and any other value is catalog metadata and ignored.

#![deny(unsafe_code)]

use std::collections::BTreeMap;

use serde::Deserialize;
use serde_json::Value;

use curriculum_model::{
    CourseDefinition, CreditValue, MAX_COURSE_CREDITS, StructureError, normalize_code,
};

/// Credit field: either a plain number or `total(lecture-lab-study)` notation.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum RawCredits {
    Count(i64),
    Notation(String),
}

impl RawCredits {
    /// Convert to a validated credit value; `context` names the record for errors.
    ///
    /// Totals above [`MAX_COURSE_CREDITS`] are malformed.
    pub fn to_credit_value(&self, context: &str) -> Result<CreditValue, StructureError> {
        match self {
            RawCredits::Count(count) => u32::try_from(*count)
                .ok()
                .filter(|total| *total <= MAX_COURSE_CREDITS)
                .map(CreditValue::new)
                .ok_or_else(|| StructureError::MalformedCreditValue {
                    value: count.to_string(),
                    context: context.to_string(),
                }),
            RawCredits::Notation(text) => {
                text.parse()
                    .map_err(|_| StructureError::MalformedCreditValue {
                        value: text.clone(),
                        context: context.to_string(),
                    })
            }
        }
    }
}

/// One course entry in a catalog group.
#[derive(Debug, Clone, Deserialize)]
pub struct CatalogRecord {
    pub code: String,
    #[serde(default)]
    pub name: String,
    pub credits: RawCredits,
    #[serde(default)]
    pub prerequisites: Vec<String>,
    #[serde(default)]
    pub corequisites: Vec<String>,
    #[serde(default)]
    pub technical_electives: bool,
}

impl CatalogRecord {
    pub fn into_definition(self, group: &str) -> Result<CourseDefinition, StructureError> {
        let context = format!("course {} in group {group}", normalize_code(&self.code));
        let credits = self.credits.to_credit_value(&context)?;
        let category = if self.technical_electives {
            format!("{group}/technical_electives")
        } else {
            group.to_string()
        };
        Ok(CourseDefinition::new(&self.code, self.name, credits)
            .with_prerequisites(&self.prerequisites)
            .with_corequisites(&self.corequisites)
            .with_category(category))
    }
}

/// Course records grouped under their category label, in file order per group.
#[derive(Debug, Clone, Default)]
pub struct CatalogDocument {
    pub groups: BTreeMap<String, Vec<CatalogRecord>>,
}

impl CatalogDocument {
    /// Split a parsed catalog value into course groups.
    ///
    /// Returns `(group, message)` for a group that looks like course data but
    /// does not deserialize.
    pub fn from_value(value: Value) -> Result<Self, (String, String)> {
        let Value::Object(entries) = value else {
            return Err(("<root>".to_string(), "catalog must be a JSON object".to_string()));
        };
        let mut groups = BTreeMap::new();
        for (name, entry) in entries {
            match entry {
                Value::Array(items) if is_record_list(&items) => {
                    groups.insert(name.clone(), parse_records(&name, items)?);
                }
                Value::Object(nested) if is_nested_group(&nested) => {
                    for (sub, items) in nested {
                        let label = format!("{name}/{sub}");
                        let Value::Array(items) = items else {
                            continue;
                        };
                        let records = parse_records(&label, items)?;
                        groups.insert(label, records);
                    }
                }
                _ => {}
            }
        }
        Ok(Self { groups })
    }

    pub fn record_count(&self) -> usize {
        self.groups.values().map(Vec::len).sum()
    }

    /// Convert every record into a course definition, in group order.
    pub fn into_definitions(self) -> Result<Vec<CourseDefinition>, StructureError> {
        let mut definitions = Vec::with_capacity(self.record_count());
        for (group, records) in self.groups {
            for record in records {
                definitions.push(record.into_definition(&group)?);
            }
        }
        Ok(definitions)
    }
}

fn is_record_list(items: &[Value]) -> bool {
    items.iter().all(Value::is_object)
}

fn is_nested_group(entries: &serde_json::Map<String, Value>) -> bool {
    !entries.is_empty()
        && entries.values().all(|value| match value {
            Value::Array(items) => is_record_list(items),
            _ => false,
        })
}

fn parse_records(group: &str, items: Vec<Value>) -> Result<Vec<CatalogRecord>, (String, String)> {
    items
        .into_iter()
        .enumerate()
        .map(|(idx, item)| {
            serde_json::from_value(item)
                .map_err(|err| (group.to_string(), format!("record {idx}: {err}")))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn groups_flat_and_nested_lists() {
        let doc = CatalogDocument::from_value(json!({
            "curriculum": "B-IE-2565",
            "industrial_engineering_courses": [
                {"code": "01206221", "name": "Statics", "credits": "3(3-0-6)", "prerequisites": ["01417167"]},
                {"code": "01206499", "name": "Seminar", "credits": 1, "technical_electives": true}
            ],
            "gen_ed_courses": {
                "wellness": [{"code": "01175111", "name": "Swimming", "credits": "1(0-2-1)"}]
            }
        }))
        .unwrap();

        assert_eq!(doc.record_count(), 3);
        assert!(doc.groups.contains_key("gen_ed_courses/wellness"));
        assert!(!doc.groups.contains_key("curriculum"));

        let definitions = doc.into_definitions().unwrap();
        let seminar = definitions.iter().find(|d| d.code == "01206499").unwrap();
        assert_eq!(
            seminar.category.as_deref(),
            Some("industrial_engineering_courses/technical_electives")
        );
        let statics = definitions.iter().find(|d| d.code == "01206221").unwrap();
        assert_eq!(statics.credits.total, 3);
        assert!(statics.prerequisites.contains("01417167"));
    }

    #[test]
    fn malformed_record_names_its_group() {
        let err = CatalogDocument::from_value(json!({
            "other_related_courses": [{"name": "No code", "credits": 3}]
        }))
        .unwrap_err();
        assert_eq!(err.0, "other_related_courses");
        assert!(err.1.starts_with("record 0"));
    }

    #[test]
    fn negative_credit_count_is_malformed() {
        let err = RawCredits::Count(-3).to_credit_value("course X").unwrap_err();
        assert!(matches!(err, StructureError::MalformedCreditValue { .. }));
        for count in [100, i64::from(u32::MAX)] {
            let err = RawCredits::Count(count)
                .to_credit_value("course X")
                .unwrap_err();
            assert!(matches!(err, StructureError::MalformedCreditValue { .. }));
        }
        assert_eq!(
            RawCredits::Count(99).to_credit_value("course X").unwrap(),
            CreditValue::new(99)
        );
        let err = RawCredits::Notation("three".into())
            .to_credit_value("course X")
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "malformed credit value \"three\" for course X"
        );
    }
}
