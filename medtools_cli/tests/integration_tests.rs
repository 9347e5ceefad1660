//! Integration tests for the medtools binary.
//!
//! These tests verify end-to-end behavior including:
//! - One-shot calculator commands (text and JSON)
//! - Rejection of out-of-domain input
//! - Config file overrides

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Helper to get the path to the CLI binary
fn cli() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("medtools"))
}

/// Helper to create a test config directory
fn setup_test_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp dir")
}

fn json_output(cmd: &mut Command) -> serde_json::Value {
    let output = cmd.assert().success().get_output().stdout.clone();
    serde_json::from_slice(&output).expect("stdout should be JSON")
}

#[test]
fn test_cli_help() {
    cli()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Clinical calculators: BMI and creatinine clearance",
        ));
}

#[test]
fn test_bmi_text_output() {
    cli()
        .args(["bmi", "--weight", "70", "--height", "1.75"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Your BMI: 22.86 kg/m²"))
        .stdout(predicate::str::contains("NORMAL WEIGHT"));
}

#[test]
fn test_bmi_json_obese_class_one() {
    let value = json_output(cli().args(["bmi", "--weight", "100", "--height", "1.75", "--json"]));

    assert_eq!(value["page"], "bmi");
    assert_eq!(value["result"]["bmi"], 32.65);
    assert_eq!(value["result"]["category"], "obese");
    assert_eq!(value["result"]["obesity_class"], "I");
    assert_eq!(value["result"]["adjustment"]["kind"], "lose");
    assert_eq!(value["result"]["adjustment"]["kg"], 23.74);
    assert_eq!(value["guidance"]["severity"], "error");
}

#[test]
fn test_bmi_out_of_range_rejected() {
    cli()
        .args(["bmi", "--weight", "70", "--height", "3.0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("height_m = 3 is out of range"))
        .stdout(predicate::str::contains("Your BMI").not());
}

#[test]
fn test_error_reported_once() {
    let output = cli()
        .args(["bmi", "--weight", "70", "--height", "3.0"])
        .assert()
        .failure()
        .get_output()
        .stderr
        .clone();
    let stderr = String::from_utf8(output).unwrap();

    assert_eq!(stderr.matches("Error:").count(), 1, "stderr was: {}", stderr);
    assert!(stderr.contains("Error: height_m = 3 is out of range [1, 2.5]"));
    assert!(!stderr.contains("OutOfRange {"));
}

#[test]
fn test_creatinine_male() {
    let value = json_output(cli().args([
        "creatinine",
        "--age",
        "50",
        "--sex",
        "male",
        "--weight",
        "70",
        "--creatinine",
        "1.0",
        "--json",
    ]));

    assert_eq!(value["result"]["clearance_ml_min"], 87.5);
    assert_eq!(value["result"]["stage"], "mild");
    assert_eq!(value["result"]["guidance"], "routine_monitoring");
}

#[test]
fn test_creatinine_female_text() {
    cli()
        .args([
            "creatinine",
            "--age",
            "50",
            "--sex",
            "female",
            "--weight",
            "70",
            "--creatinine",
            "1.0",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Estimated clearance: 74.38 mL/min"))
        .stdout(predicate::str::contains("Annual monitoring"));
}

#[test]
fn test_creatinine_unknown_sex() {
    cli()
        .args([
            "creatinine",
            "--age",
            "50",
            "--sex",
            "other",
            "--weight",
            "70",
            "--creatinine",
            "1.0",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown sex"));
}

#[test]
fn test_creatinine_age_out_of_range() {
    cli()
        .args([
            "creatinine",
            "--age",
            "130",
            "--sex",
            "male",
            "--weight",
            "70",
            "--creatinine",
            "1.0",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("age_years = 130 is out of range [18, 120]"));
}

#[test]
fn test_config_override() {
    let temp_dir = setup_test_dir();
    let config_path = temp_dir.path().join("config.toml");
    fs::write(
        &config_path,
        r#"
[bmi]
height_max_m = 3.0

[display]
decimals = 1
show_references = false
"#,
    )
    .unwrap();

    cli()
        .arg("--config")
        .arg(&config_path)
        .args(["bmi", "--weight", "90", "--height", "3.0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Your BMI: 10.0 kg/m²"))
        .stdout(predicate::str::contains("References").not());
}

#[test]
fn test_invalid_config_fails() {
    let temp_dir = setup_test_dir();
    let config_path = temp_dir.path().join("config.toml");
    fs::write(&config_path, "[creatinine]\nage_min = 200\n").unwrap();

    cli()
        .arg("--config")
        .arg(&config_path)
        .args(["bmi", "--weight", "70", "--height", "1.75"])
        .assert()
        .failure();
}

#[test]
fn test_excessive_precision_config_fails() {
    let temp_dir = setup_test_dir();
    let config_path = temp_dir.path().join("config.toml");
    fs::write(&config_path, "[display]\ndecimals = 400\n").unwrap();

    cli()
        .arg("--config")
        .arg(&config_path)
        .args(["bmi", "--weight", "70", "--height", "1.75", "--json"])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("display.decimals: 400 exceeds the maximum of 10"));
}
