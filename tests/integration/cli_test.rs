//! CLI surface tests: classify, config, completions, help.

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

use crate::helpers::{arg, fixtures_dir, run_geoclean};

fn geoclean(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("geoclean").expect("binary");
    cmd.env("HOME", home.path()).env("NO_COLOR", "1");
    cmd
}

#[test]
fn classify_prints_labels() {
    let home = TempDir::new().unwrap();
    let fixture = fixtures_dir().join("POINT_BASED.GSI");
    geoclean(&home)
        .args(["classify", arg(&fixture)])
        .assert()
        .success()
        .stdout(predicate::str::contains("PointBased"))
        .stdout(predicate::str::contains("GSI-8"))
        .stdout(predicate::str::contains("target_point"))
        .stdout(predicate::str::contains("control_point"));
}

#[test]
fn classify_json_is_structured() {
    let home = TempDir::new().unwrap();
    let fixture = fixtures_dir().join("STATION_BASED.GSI");
    let output = geoclean(&home)
        .args(["classify", arg(&fixture), "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["dialect"], "station_based");
    assert_eq!(value["collapsed_stations"], 1);
    assert_eq!(value["wide"], true);
    let records = value["records"].as_array().unwrap();
    assert_eq!(records.len(), 7);
    assert_eq!(records[0]["label"], "station");
    assert_eq!(records[0]["point_number"], "FS01");
    assert_eq!(records[1]["label"], "target_point");
}

#[test]
fn classify_missing_file_fails() {
    let home = TempDir::new().unwrap();
    geoclean(&home)
        .args(["classify", "/nonexistent/A.GSI"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("File not found"));
}

#[test]
fn config_init_then_show() {
    let home = TempDir::new().unwrap();
    geoclean(&home)
        .args(["config", "init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Config file created"));

    let path = home.path().join(".config").join("geoclean").join("config.toml");
    assert!(path.exists());

    geoclean(&home)
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("control_point_id = \"STKE\""))
        .stdout(predicate::str::contains("two_face_word_index = 79"));

    geoclean(&home)
        .args(["config", "init"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn config_path_points_into_home() {
    let home = TempDir::new().unwrap();
    let (stdout, _, code) = run_geoclean(home.path(), &["config", "path"]);
    assert_eq!(code, 0);
    assert!(stdout.trim().ends_with(".config/geoclean/config.toml"));
}

#[test]
fn invalid_config_is_reported() {
    let home = TempDir::new().unwrap();
    let config = home.path().join("bad.toml");
    fs::write(&config, "[identifiers]\nfree_station_id = \"\"\n").unwrap();
    geoclean(&home)
        .args(["--config", arg(&config), "config", "show"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("free_station_id must not be empty"));
}

#[test]
fn completions_are_generated() {
    let home = TempDir::new().unwrap();
    geoclean(&home)
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("geoclean"));
}

#[test]
fn help_lists_commands() {
    let home = TempDir::new().unwrap();
    geoclean(&home)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("clear-up"))
        .stdout(predicate::str::contains("ltop"))
        .stdout(predicate::str::contains("logfile"));
}

#[test]
fn verbose_logs_decisions() {
    let home = TempDir::new().unwrap();
    let fixture = fixtures_dir().join("POINT_BASED.GSI");
    geoclean(&home)
        .args(["-v", "classify", arg(&fixture)])
        .assert()
        .success()
        .stderr(predicate::str::contains("classified GSI records"));
}
