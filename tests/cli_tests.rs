//! CLI integration tests
//!
//! Tests the sheetpack binary directly using assert_cmd to exercise
//! main.rs code paths.

// Skip all CLI tests during coverage builds
#![cfg(not(coverage))]
#![allow(deprecated)] // Command::cargo_bin deprecation - no stable replacement yet

use assert_cmd::Command;
use predicates::prelude::*;
use rust_xlsxwriter::Workbook;
use std::fs;
use tempfile::TempDir;

fn write_fixture(path: &std::path::Path) {
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    sheet.set_name("Enemies").unwrap();
    sheet.write_string(0, 0, "Name").unwrap();
    sheet.write_string(0, 1, "HP").unwrap();
    sheet.write_string(1, 0, "Slime").unwrap();
    sheet.write_string(1, 1, "10").unwrap();
    workbook.save(path).unwrap();
}

// ═══════════════════════════════════════════════════════════════════════════
// HELP AND VERSION TESTS
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn test_cli_help() {
    let mut cmd = Command::cargo_bin("sheetpack").unwrap();
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("sheetpack"))
        .stdout(predicate::str::contains("COMMANDS"));
}

#[test]
fn test_cli_version() {
    let mut cmd = Command::cargo_bin("sheetpack").unwrap();
    cmd.arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("sheetpack"));
}

#[test]
fn test_convert_help() {
    let mut cmd = Command::cargo_bin("sheetpack").unwrap();
    cmd.args(["convert", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("INCREMENTAL MODE"));
}

#[test]
fn test_check_help() {
    let mut cmd = Command::cargo_bin("sheetpack").unwrap();
    cmd.args(["check", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("without writing"));
}

#[test]
fn test_watch_help() {
    let mut cmd = Command::cargo_bin("sheetpack").unwrap();
    cmd.args(["watch", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("convert on change"));
}

// ═══════════════════════════════════════════════════════════════════════════
// CONVERT COMMAND
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn test_convert_writes_json() {
    let input = TempDir::new().unwrap();
    let output = TempDir::new().unwrap();
    write_fixture(&input.path().join("enemies.xlsx"));

    let mut cmd = Command::cargo_bin("sheetpack").unwrap();
    cmd.arg("convert")
        .arg(input.path())
        .arg(output.path())
        .arg("--verbose")
        .assert()
        .success()
        .stdout(predicate::str::contains("Conversion Complete"));

    let json = fs::read_to_string(output.path().join("Enemies.json")).unwrap();
    assert_eq!(json, r#"[{"Name":"Slime","HP":"10"}]"#);
}

#[test]
fn test_convert_missing_input_dir_fails() {
    let output = TempDir::new().unwrap();

    let mut cmd = Command::cargo_bin("sheetpack").unwrap();
    cmd.arg("convert")
        .arg("no/such/dir")
        .arg(output.path())
        .assert()
        .failure();
}

#[test]
fn test_convert_corrupt_workbook_exits_nonzero() {
    let input = TempDir::new().unwrap();
    let output = TempDir::new().unwrap();
    fs::write(input.path().join("broken.xlsx"), b"not a zip archive").unwrap();

    let mut cmd = Command::cargo_bin("sheetpack").unwrap();
    cmd.arg("convert")
        .arg(input.path())
        .arg(output.path())
        .assert()
        .failure();
}

#[test]
fn test_convert_reads_config_from_working_directory() {
    let workdir = TempDir::new().unwrap();
    let input = workdir.path().join("sheets");
    let output = workdir.path().join("json");
    fs::create_dir(&input).unwrap();
    write_fixture(&input.join("enemies.xlsx"));

    fs::write(
        workdir.path().join("sheetpack.yaml"),
        "input_path: sheets\noutput_path: json\n",
    )
    .unwrap();

    let mut cmd = Command::cargo_bin("sheetpack").unwrap();
    cmd.current_dir(workdir.path())
        .arg("convert")
        .assert()
        .success();

    assert!(output.join("Enemies.json").exists());
}

// ═══════════════════════════════════════════════════════════════════════════
// CHECK COMMAND
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn test_check_reports_stale_and_writes_nothing() {
    let input = TempDir::new().unwrap();
    let output = TempDir::new().unwrap();
    write_fixture(&input.path().join("enemies.xlsx"));

    let mut cmd = Command::cargo_bin("sheetpack").unwrap();
    cmd.arg("check")
        .arg(input.path())
        .arg(output.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("stale"))
        .stdout(predicate::str::contains("need conversion"));

    assert!(!output.path().join("Enemies.json").exists());
}

#[test]
fn test_check_up_to_date_after_convert() {
    let input = TempDir::new().unwrap();
    let output = TempDir::new().unwrap();
    write_fixture(&input.path().join("enemies.xlsx"));

    Command::cargo_bin("sheetpack")
        .unwrap()
        .arg("convert")
        .arg(input.path())
        .arg(output.path())
        .assert()
        .success();

    let mut cmd = Command::cargo_bin("sheetpack").unwrap();
    cmd.arg("check")
        .arg(input.path())
        .arg(output.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("All outputs up to date"));
}

// ═══════════════════════════════════════════════════════════════════════════
// SHEETS COMMAND
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn test_sheets_lists_names() {
    let input = TempDir::new().unwrap();
    let file = input.path().join("enemies.xlsx");
    write_fixture(&file);

    let mut cmd = Command::cargo_bin("sheetpack").unwrap();
    cmd.arg("sheets")
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains("Enemies"))
        .stdout(predicate::str::contains("Enemies.json"));
}

#[test]
fn test_sheets_unsupported_extension_fails() {
    let input = TempDir::new().unwrap();
    let file = input.path().join("enemies.csv");
    fs::write(&file, b"Name,HP\n").unwrap();

    let mut cmd = Command::cargo_bin("sheetpack").unwrap();
    cmd.arg("sheets").arg(&file).assert().failure();
}
