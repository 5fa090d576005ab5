//! End-to-end runs of the `curriculum-check` binary.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

const CATALOG: &str = r#"{
  "industrial_engineering_courses": [
    {"code": "01206221", "name": "Engineering Statics", "credits": "3(3-0-6)",
     "prerequisites": ["01417167"]},
    {"code": "01206311", "name": "Operations Research", "credits": "3(3-0-6)",
     "corequisites": ["01206312"]},
    {"code": "01206312", "name": "Operations Research Lab", "credits": "1(0-3-2)"}
  ],
  "other_related_courses": [
    {"code": "01417167", "name": "Engineering Mathematics I", "credits": "3(3-0-6)"}
  ]
}"#;

const VALID_TRANSCRIPT: &str = r#"{
  "student_info": {"id": "6510500001", "name": "Valid Student"},
  "semesters": [
    {"semester_type": "First", "year": 2021, "courses": [
      {"code": "01417167", "grade": "A", "credits": 3}
    ]},
    {"semester_type": "Second", "year": 2021, "courses": [
      {"code": "01206221", "grade": "B", "credits": 3},
      {"code": "01206311", "grade": "C", "credits": 3},
      {"code": "01206312", "grade": "C+", "credits": 1}
    ]}
  ]
}"#;

const INVALID_TRANSCRIPT: &str = r#"{
  "student_info": {"id": "6510500002"},
  "semesters": [
    {"semester_type": "First", "year": 2021, "courses": [
      {"code": "01206221", "grade": "B", "credits": 3}
    ]}
  ]
}"#;

fn write(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, contents).expect("write file");
    path
}

fn run(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_curriculum-check"))
        .args(args)
        .env_remove("CURRICULUM_POLICY")
        .env_remove("RUST_LOG")
        .output()
        .expect("run curriculum-check")
}

#[test]
fn valid_transcript_exits_zero_and_writes_report() {
    let dir = tempfile::tempdir().unwrap();
    let catalog = write(dir.path(), "catalog.json", CATALOG);
    let transcript = write(dir.path(), "valid.json", VALID_TRANSCRIPT);
    let output_dir = dir.path().join("reports");

    let output = run(&[
        "--color",
        "never",
        "validate",
        "--catalog",
        catalog.to_str().unwrap(),
        "--output-dir",
        output_dir.to_str().unwrap(),
        transcript.to_str().unwrap(),
    ]);

    assert!(output.status.success(), "{output:?}");
    let report_path = output_dir.join("6510500001.report.json");
    let report: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(report_path).unwrap()).unwrap();
    assert_eq!(report["valid"], true);
    assert_eq!(report["report"]["completion"]["completed_credits"], 10);
}

#[test]
fn invalid_transcript_in_directory_exits_one() {
    let dir = tempfile::tempdir().unwrap();
    let catalog = write(dir.path(), "catalog.json", CATALOG);
    let batch = dir.path().join("batch");
    fs::create_dir(&batch).unwrap();
    write(&batch, "a.json", VALID_TRANSCRIPT);
    write(&batch, "b.json", INVALID_TRANSCRIPT);

    let output = run(&[
        "--color",
        "never",
        "validate",
        "--catalog",
        catalog.to_str().unwrap(),
        batch.to_str().unwrap(),
    ]);

    assert_eq!(output.status.code(), Some(1));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("MissingPrerequisite"), "{stdout}");
    assert!(stdout.contains("6510500002"), "{stdout}");
}

#[test]
fn strict_policy_changes_outcome() {
    let dir = tempfile::tempdir().unwrap();
    let catalog = write(dir.path(), "catalog.json", CATALOG);
    let transcript = write(dir.path(), "valid.json", VALID_TRANSCRIPT);
    // "A" is no longer a passing grade, so 01417167 never completes.
    let policy = write(
        dir.path(),
        "policy.toml",
        "[grades]\npassing = [\"B\", \"C\", \"C+\"]\nfailing = [\"A\"]\n",
    );

    let output = run(&[
        "validate",
        "--catalog",
        catalog.to_str().unwrap(),
        "--policy",
        policy.to_str().unwrap(),
        transcript.to_str().unwrap(),
    ]);

    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn broken_catalog_is_a_hard_error() {
    let dir = tempfile::tempdir().unwrap();
    let catalog = write(
        dir.path(),
        "catalog.json",
        r#"{"courses": [{"code": "A", "credits": 3, "prerequisites": ["A"]}]}"#,
    );
    let transcript = write(dir.path(), "t.json", VALID_TRANSCRIPT);

    let output = run(&[
        "validate",
        "--catalog",
        catalog.to_str().unwrap(),
        transcript.to_str().unwrap(),
    ]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("lists itself as a prerequisite"), "{stderr}");
}

#[test]
fn courses_lists_catalog() {
    let dir = tempfile::tempdir().unwrap();
    let catalog = write(dir.path(), "catalog.json", CATALOG);

    let output = run(&["courses", "--catalog", catalog.to_str().unwrap()]);

    assert!(output.status.success(), "{output:?}");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("01206312"));
    assert!(stdout.contains("other_related_courses"));
}

#[test]
fn student_ids_that_sanitize_alike_get_separate_reports() {
    let dir = tempfile::tempdir().unwrap();
    let catalog = write(dir.path(), "catalog.json", CATALOG);
    let first = VALID_TRANSCRIPT.replace("6510500001", "S 1");
    let second = VALID_TRANSCRIPT.replace("6510500001", "S_1");
    let a = write(dir.path(), "a.json", &first);
    let b = write(dir.path(), "b.json", &second);
    let output_dir = dir.path().join("out");

    let output = run(&[
        "validate",
        "--catalog",
        catalog.to_str().unwrap(),
        "--output-dir",
        output_dir.to_str().unwrap(),
        a.to_str().unwrap(),
        b.to_str().unwrap(),
    ]);

    assert!(output.status.success(), "{output:?}");
    let mut files: Vec<String> = fs::read_dir(&output_dir)
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    files.sort();
    assert_eq!(files, ["S_1-2.report.json", "S_1.report.json"]);

    let report = |name: &str| -> serde_json::Value {
        serde_json::from_str(&fs::read_to_string(output_dir.join(name)).unwrap()).unwrap()
    };
    assert_eq!(report("S_1.report.json")["student"]["id"], "S 1");
    assert_eq!(report("S_1-2.report.json")["student"]["id"], "S_1");
}
