mod common;

use curriculum_catalog::ValidationPolicy;
use curriculum_model::TermType;
use curriculum_validate::validate_transcript;

use common::{catalog, course, semester, transcript};

#[test]
fn report_snapshot_is_stable() {
    let catalog = catalog(vec![
        course("A").with_category("core"),
        course("B").with_prerequisites(["A"]).with_category("core"),
    ]);
    let transcript = transcript(vec![
        semester(TermType::First, 2021, &[("A", "F"), ("B", "B")]),
        semester(TermType::Second, 2021, &[("A", "C")]),
        semester(TermType::Summer, 2021, &[("A", "X")]),
    ]);
    let policy = ValidationPolicy::default();

    let report = validate_transcript(&transcript, &catalog, &policy).unwrap();
    let rerun = validate_transcript(&transcript, &catalog, &policy).unwrap();
    assert_eq!(
        serde_json::to_string(&report).unwrap(),
        serde_json::to_string(&rerun).unwrap()
    );

    insta::assert_json_snapshot!(report, @r#"
    {
      "findings": [
        {
          "severity": "error",
          "kind": "MissingPrerequisite",
          "semester": {
            "year": 2021,
            "term": "First"
          },
          "course_code": "B",
          "related_code": "A",
          "position": 1,
          "detail": "B requires A to be passed before First 2021"
        },
        {
          "severity": "warning",
          "kind": "UnrecognizedGradeToken",
          "semester": {
            "year": 2021,
            "term": "Summer"
          },
          "course_code": "A",
          "position": 0,
          "detail": "grade \"X\" for A is not a recognized token; treated as not passed"
        },
        {
          "severity": "warning",
          "kind": "RetakeAfterPass",
          "semester": {
            "year": 2021,
            "term": "Summer"
          },
          "course_code": "A",
          "related_code": "A",
          "position": 0,
          "detail": "A was already passed in Second 2021"
        }
      ],
      "summary": {
        "errors": 1,
        "warnings": 2,
        "by_kind": {
          "MissingPrerequisite": 1,
          "UnrecognizedGradeToken": 1,
          "RetakeAfterPass": 1
        }
      },
      "completion": {
        "passed_codes": [
          "A",
          "B"
        ],
        "attempted_credits": 12,
        "completed_credits": 6,
        "completed_by_category": {
          "core": 6
        }
      }
    }
    "#);
}
