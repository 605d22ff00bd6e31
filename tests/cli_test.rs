// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Integration tests for the coachdesk-cli binary
// ABOUTME: Runs import, validate, and score commands and checks JSON output and exit codes

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use serde_json::Value;
use std::fs;
use std::process::Command;
use tempfile::TempDir;

/// Helper to run CLI command and capture output
fn run_cli(args: &[&str]) -> (i32, String, String) {
    let output = Command::new(env!("CARGO_BIN_EXE_coachdesk-cli"))
        .args(args)
        .env_remove("RUST_LOG")
        .env_remove("COACHDESK_SCORE_BOUND")
        .env_remove("COACHDESK_STRICT_MISSING_VALUES")
        .output()
        .unwrap();

    let exit_code = output.status.code().unwrap_or(-1);
    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();

    (exit_code, stdout, stderr)
}

/// The error envelope is the last line on stderr; log lines may precede it
fn error_envelope(stderr: &str) -> Value {
    let line = stderr.lines().rfind(|l| l.starts_with('{')).unwrap();
    serde_json::from_str(line).unwrap()
}

fn rows_json() -> Value {
    serde_json::json!([
        {
            "date": "2025-03-03",
            "week": 1,
            "weight": 80,
            "bodyFat": 18,
            "nutrition": { "calories": 2000, "protein": 150, "carbs": 200, "fats": 70 },
            "training": { "sessions": 4, "intensity": 8 },
            "recovery": { "sleep": 7, "stress": 6, "energy": 8 },
            "customQuestions": [
                { "question": "How many meals?", "answer": "3", "category": "nutrition" }
            ],
            "percentageRating": 80
        },
        {
            "date": "2025-03-10",
            "week": 2,
            "weight": 78,
            "bodyFat": 17.5,
            "nutrition": { "calories": 2100, "protein": 160, "carbs": 210, "fats": 65 },
            "training": { "sessions": 3, "intensity": 7 },
            "recovery": { "sleep": 7.5, "stress": 5, "energy": 7 },
            "customQuestions": [
                { "question": "How many meals?", "answer": "4", "category": "nutrition" }
            ],
            "percentageRating": 85
        }
    ])
}

fn write_input(dir: &TempDir, name: &str, value: &Value) -> String {
    let path = dir.path().join(name);
    fs::write(&path, serde_json::to_string(value).unwrap()).unwrap();
    path.to_str().unwrap().to_owned()
}

#[test]
fn test_cli_help_shows_commands() {
    let (exit_code, stdout, _stderr) = run_cli(&["--help"]);

    assert_eq!(exit_code, 0, "CLI help should exit with 0");
    assert!(stdout.contains("import"), "Help should mention 'import'");
    assert!(stdout.contains("validate"), "Help should mention 'validate'");
    assert!(stdout.contains("score"), "Help should mention 'score'");
}

#[test]
fn test_cli_import_prints_result() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, "rows.json", &rows_json());

    let (exit_code, stdout, stderr) = run_cli(&["import", "--input", &input]);
    assert_eq!(exit_code, 0, "import failed: {stderr}");

    let result: Value = serde_json::from_str(stdout.trim()).unwrap();
    assert_eq!(result["checkIns"].as_array().unwrap().len(), 2);
    assert_eq!(result["checkIns"][0]["scores"]["nutrition"], 87);
    assert_eq!(result["insights"]["progress"]["weightChange"], -2.0);
    assert_eq!(
        result["customQuestions"][0]["questions"][0]["answers"],
        serde_json::json!(["3", "4"])
    );
}

#[test]
fn test_cli_import_sheet() {
    let dir = TempDir::new().unwrap();
    let sheet = serde_json::json!({
        "headers": ["Date", "Weight", "Protein", "Carbs", "Fats", "Sessions", "Intensity",
                    "Sleep", "Stress", "Energy", "Anything else?"],
        "rows": [["2025-03-03", "80", "150", "200", "70", "4", "8", "7", "6", "8", "All good"]]
    });
    let input = write_input(&dir, "sheet.json", &sheet);

    let (exit_code, stdout, stderr) = run_cli(&["import", "--input", &input, "--sheet"]);
    assert_eq!(exit_code, 0, "sheet import failed: {stderr}");

    let result: Value = serde_json::from_str(stdout.trim()).unwrap();
    assert_eq!(result["checkIns"][0]["scores"]["overall"], 83);
    assert_eq!(result["customQuestions"][0]["category"], "general");
}

#[test]
fn test_cli_import_malformed_row_fails() {
    let dir = TempDir::new().unwrap();
    let mut rows = rows_json();
    rows[1].as_object_mut().unwrap().remove("recovery");
    let input = write_input(&dir, "rows.json", &rows);

    let (exit_code, stdout, stderr) = run_cli(&["import", "--input", &input]);
    assert_ne!(exit_code, 0);
    assert!(stdout.trim().is_empty());

    let envelope = error_envelope(&stderr);
    assert_eq!(envelope["error"]["code"], "MISSING_REQUIRED_FIELD");
    assert_eq!(envelope["error"]["details"]["field"], "recovery");
    assert_eq!(envelope["error"]["details"]["row"], 1);
}

#[test]
fn test_cli_import_unparsable_date_is_invalid_format() {
    let dir = TempDir::new().unwrap();
    let mut rows = rows_json();
    rows[0]["date"] = Value::from("next tuesday");
    let input = write_input(&dir, "rows.json", &rows);

    let (exit_code, _stdout, stderr) = run_cli(&["import", "--input", &input]);
    assert_ne!(exit_code, 0);

    let envelope = error_envelope(&stderr);
    assert_eq!(envelope["error"]["code"], "INVALID_FORMAT");
    assert_eq!(envelope["error"]["details"]["field"], "date");
    assert_eq!(envelope["error"]["details"]["row"], 0);
}

#[test]
fn test_cli_import_strict_flag() {
    let dir = TempDir::new().unwrap();
    let mut rows = rows_json();
    rows[0]["nutrition"].as_object_mut().unwrap().remove("fats");
    let input = write_input(&dir, "rows.json", &rows);

    let (lenient_code, _, _) = run_cli(&["import", "--input", &input]);
    assert_eq!(lenient_code, 0);

    let (strict_code, _, stderr) = run_cli(&["import", "--input", &input, "--strict"]);
    assert_ne!(strict_code, 0);
    assert_eq!(
        error_envelope(&stderr)["error"]["details"]["field"],
        "nutrition.fats"
    );
}

#[test]
fn test_cli_import_missing_file() {
    let (exit_code, _stdout, stderr) = run_cli(&["import", "--input", "/nonexistent/rows.json"]);

    assert_ne!(exit_code, 0);
    assert_eq!(error_envelope(&stderr)["error"]["code"], "INVALID_INPUT");
}

#[test]
fn test_cli_validate_warns_on_large_change() {
    let (exit_code, stdout, _stderr) = run_cli(&[
        "validate", "--kind", "weight", "--value", "100", "--previous", "90",
    ]);

    assert_eq!(exit_code, 0);
    let result: Value = serde_json::from_str(stdout.trim()).unwrap();
    assert_eq!(result["isValid"], true);
    assert!(result["warning"].as_str().unwrap().contains("11.1%"));
}

#[test]
fn test_cli_score_training() {
    let (exit_code, stdout, _stderr) =
        run_cli(&["score", "training", "--sessions", "4", "--intensity", "8"]);

    assert_eq!(exit_code, 0);
    let result: Value = serde_json::from_str(stdout.trim()).unwrap();
    assert_eq!(result["category"], "training");
    assert_eq!(result["score"], 90);
}

#[test]
fn test_cli_score_unclamped_recovery() {
    let (exit_code, stdout, _stderr) = run_cli(&[
        "score", "recovery", "--sleep", "0", "--stress", "20", "--energy", "0", "--unclamped",
    ]);

    assert_eq!(exit_code, 0);
    let result: Value = serde_json::from_str(stdout.trim()).unwrap();
    assert_eq!(result["score"], -30);
}
