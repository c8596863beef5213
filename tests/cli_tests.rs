//! CLI interface tests

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn faultline() -> Command {
    let mut cmd = Command::cargo_bin("faultline").unwrap();
    cmd.env_remove("FAULTLINE_CONFIG").env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_version_flag() {
    faultline()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("faultline"));
}

#[test]
fn test_help_flag() {
    faultline()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("catalogue of error-handling idioms"));
}

#[test]
fn test_missing_config_error() {
    faultline()
        .arg("--config")
        .arg("nonexistent.yaml")
        .assert()
        .failure()
        .code(1) // Configuration error
        .stdout(predicate::str::contains("Configuration file not found"));
}

#[test]
fn test_text_output_logs_chain() {
    let temp_dir = TempDir::new().unwrap();
    faultline()
        .current_dir(temp_dir.path())
        .arg("--demo")
        .arg("wrapping")
        .arg("--user-id")
        .arg("999")
        .assert()
        .success()
        .stdout(predicate::str::contains("failed to process user 999"))
        .stdout(predicate::str::contains("using defaults"));
}

#[test]
fn test_json_output_is_one_report_per_line() {
    let temp_dir = TempDir::new().unwrap();
    let output = faultline()
        .current_dir(temp_dir.path())
        .arg("--output-format")
        .arg("json")
        .arg("--demo")
        .arg("sentinel")
        .arg("--demo")
        .arg("database")
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let reports: Vec<serde_json::Value> = stdout
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();
    assert_eq!(reports.len(), 2);
    assert_eq!(reports[0]["sentinel"], "UserNotFound");
    assert_eq!(reports[1]["retryable"], true);
}

#[test]
fn test_config_file_is_used() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("faultline.yaml");
    fs::write(&config_path, "dividend: 9\ndivisor: 3\n").unwrap();

    faultline()
        .arg("--config")
        .arg(config_path.to_str().unwrap())
        .arg("--demo")
        .arg("basic")
        .assert()
        .success()
        .stdout(predicate::str::contains("Result: 3.00"));
}

#[test]
fn test_tight_depth_is_a_chain_integrity_failure() {
    let temp_dir = TempDir::new().unwrap();
    faultline()
        .current_dir(temp_dir.path())
        .arg("--demo")
        .arg("wrapping")
        .arg("--max-depth")
        .arg("2")
        .assert()
        .failure()
        .code(2);
}

#[test]
fn test_unknown_demo_is_rejected() {
    faultline().arg("--demo").arg("nope").assert().failure();
}
