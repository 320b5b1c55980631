//! Integration tests for the currency-input CLI.
//!
//! These tests run the actual binary on edit scripts and verify the emitted
//! field states against expected CSV files.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::io::Write;

/// Get path to test data file
fn test_data_path(filename: &str) -> String {
    format!("tests/data/{}", filename)
}

/// Run the binary with the given script file and return stdout
fn run_engine(input_file: &str) -> String {
    let mut cmd = Command::cargo_bin("currency-input").unwrap();
    let assert = cmd.arg(input_file).assert().success();
    String::from_utf8(assert.get_output().stdout.clone()).unwrap()
}

/// Normalize CSV for comparison (trim whitespace, drop blank lines).
/// Row order is part of the contract and is preserved.
fn normalize_csv(csv: &str) -> Vec<String> {
    csv.lines()
        .map(|l| l.trim().to_string())
        .filter(|l| !l.is_empty())
        .collect()
}

#[test]
fn test_typing_session_states() {
    let output = run_engine(&test_data_path("typing_session.csv"));
    let expected = fs::read_to_string(test_data_path("expected_typing.csv")).unwrap();

    assert_eq!(normalize_csv(&output), normalize_csv(&expected));
}

#[test]
fn test_editing_session_states() {
    let output = run_engine(&test_data_path("editing_session.csv"));
    let expected = fs::read_to_string(test_data_path("expected_editing.csv")).unwrap();

    assert_eq!(normalize_csv(&output), normalize_csv(&expected));
}

#[test]
fn test_invalid_rows_are_skipped() {
    let output = run_engine(&test_data_path("mixed_invalid.csv"));
    let expected = fs::read_to_string(test_data_path("expected_mixed.csv")).unwrap();

    assert_eq!(normalize_csv(&output), normalize_csv(&expected));
}

#[test]
fn test_missing_file_error() {
    let mut cmd = Command::cargo_bin("currency-input").unwrap();
    cmd.arg("nonexistent.csv")
        .assert()
        .failure()
        .stderr(predicate::str::contains("error").or(predicate::str::contains("Error")));
}

#[test]
fn test_missing_argument_error() {
    let mut cmd = Command::cargo_bin("currency-input").unwrap();
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Missing input file"));
}

#[test]
fn test_output_has_correct_header() {
    let output = run_engine(&test_data_path("typing_session.csv"));
    assert!(output.starts_with("display,cursor,value,state"));
}

#[test]
fn test_script_from_temporary_file() {
    let mut script = tempfile::NamedTempFile::new().unwrap();
    writeln!(script, "op,text,at,len").unwrap();
    writeln!(script, "insert,1000,,").unwrap();
    script.flush().unwrap();

    let mut cmd = Command::cargo_bin("currency-input").unwrap();
    cmd.arg(script.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("\"$ 1,000\",7,1000,ok"));
}
