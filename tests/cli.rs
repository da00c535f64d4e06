use std::fs;

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use tempfile::tempdir;

fn valid_plan_json() -> &'static str {
    r#"
{
  "name": "Morning routine",
  "exercises": [
    {
      "name": "Spider chromatics",
      "duration_seconds": 300,
      "tempo_bpm": 96,
      "goal_bpm": 120
    },
    {
      "name": "Alternate picking",
      "duration_seconds": 600,
      "history": [{"bpm": 104, "recorded_at": "2026-08-01T09:00:00Z"}]
    }
  ]
}
"#
}

#[test]
fn check_plan_succeeds_with_valid_plan_file() {
    let dir = tempdir().expect("tempdir");
    let plan = dir.path().join("practice.json");
    fs::write(&plan, valid_plan_json()).expect("write json");

    let mut cmd = cargo_bin_cmd!("woodshed");
    cmd.arg("--check-plan")
        .arg("--plan")
        .arg(plan)
        .assert()
        .success()
        .stdout(predicate::str::contains("plan ok: 2 exercises, 15:00 planned"))
        .stdout(predicate::str::contains("Spider chromatics"))
        .stdout(predicate::str::contains("[96 -> 120 bpm]"));
}

#[test]
fn malformed_json_fails_with_clear_error() {
    let dir = tempdir().expect("tempdir");
    let plan = dir.path().join("practice.json");
    fs::write(&plan, "{ not-valid-json ").expect("write invalid json");

    let mut cmd = cargo_bin_cmd!("woodshed");
    cmd.arg("--check-plan")
        .arg("--plan")
        .arg(plan)
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid JSON"));
}

#[test]
fn zero_duration_exercise_is_rejected() {
    let dir = tempdir().expect("tempdir");
    let plan = dir.path().join("practice.json");
    fs::write(
        &plan,
        r#"{"exercises": [{"name": "Bends", "duration_seconds": 0}]}"#,
    )
    .expect("write json");

    let mut cmd = cargo_bin_cmd!("woodshed");
    cmd.arg("--check-plan")
        .arg("--plan")
        .arg(plan)
        .assert()
        .failure()
        .stderr(predicate::str::contains("positive duration"));
}

#[test]
fn missing_plan_file_fails_with_its_path() {
    let dir = tempdir().expect("tempdir");
    let plan = dir.path().join("nowhere.json");

    let mut cmd = cargo_bin_cmd!("woodshed");
    cmd.arg("--check-plan")
        .arg("--plan")
        .arg(&plan)
        .assert()
        .failure()
        .stderr(predicate::str::contains("nowhere.json"));
}
