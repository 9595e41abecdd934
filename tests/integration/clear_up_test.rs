//! Integration tests for the clear-up command.

use std::fs;

use crate::helpers::{arg, read_lines, run_geoclean, temp_fixture};

#[test]
fn clear_up_writes_edit_file_next_to_input() {
    let (temp, input) = temp_fixture("POINT_BASED.GSI");
    let (stdout, stderr, code) = run_geoclean(temp.path(), &["clear-up", arg(&input)]);
    assert_eq!(code, 0, "stderr: {}", stderr);

    let output = temp.path().join("POINT_BASED_EDIT.GSI");
    assert!(stdout.contains("POINT_BASED_EDIT.GSI"));
    assert!(stdout.contains("9 -> 3 lines"));

    let original = read_lines(&input);
    assert_eq!(
        read_lines(&output),
        vec![original[4].clone(), original[6].clone(), original[8].clone()]
    );
}

#[test]
fn clear_up_preserves_crlf() {
    let (temp, input) = temp_fixture("POINT_BASED.GSI");
    let (_, _, code) = run_geoclean(temp.path(), &["clear-up", arg(&input)]);
    assert_eq!(code, 0);
    let content = fs::read_to_string(temp.path().join("POINT_BASED_EDIT.GSI")).unwrap();
    assert!(content.ends_with("\r\n"));
    assert_eq!(content.matches("\r\n").count(), 3);
}

#[test]
fn hold_flags_keep_stations_and_control_points() {
    let (temp, input) = temp_fixture("POINT_BASED.GSI");
    let (stdout, _, code) = run_geoclean(
        temp.path(),
        &[
            "clear-up",
            arg(&input),
            "--hold-stations",
            "--hold-control-points",
        ],
    );
    assert_eq!(code, 0);
    assert!(stdout.contains("9 -> 6 lines"));
    let output = read_lines(&temp.path().join("POINT_BASED_EDIT.GSI"));
    assert!(output.iter().any(|l| l.contains("1001STKE")));
    assert!(output.iter().any(|l| l.contains("0000ST02")));
}

#[test]
fn retention_defaults_come_from_config() {
    let (temp, input) = temp_fixture("STATION_BASED.GSI");
    let config = temp.path().join("geoclean.toml");
    fs::write(&config, "[retention]\nhold_stations = true\n").unwrap();

    let (_, stderr, code) = run_geoclean(
        temp.path(),
        &["--config", arg(&config), "clear-up", arg(&input)],
    );
    assert_eq!(code, 0, "stderr: {}", stderr);
    let output = read_lines(&temp.path().join("STATION_BASED_EDIT.GSI"));
    assert_eq!(output.len(), 4);
    assert!(output[0].contains("FS01"));
}

#[test]
fn output_directory_receives_all_files() {
    let (temp, point) = temp_fixture("POINT_BASED.GSI");
    let station = temp.path().join("STATION_BASED.GSI");
    fs::copy(crate::helpers::fixtures_dir().join("STATION_BASED.GSI"), &station).unwrap();
    let out = temp.path().join("cleaned");
    fs::create_dir(&out).unwrap();

    let (_, stderr, code) = run_geoclean(
        temp.path(),
        &[
            "clear-up",
            arg(&point),
            arg(&station),
            "--output",
            arg(&out),
            "--workers",
            "2",
        ],
    );
    assert_eq!(code, 0, "stderr: {}", stderr);
    assert!(out.join("POINT_BASED_EDIT.GSI").exists());
    assert!(out.join("STATION_BASED_EDIT.GSI").exists());
    assert!(!temp.path().join("POINT_BASED_EDIT.GSI").exists());
}

#[test]
fn missing_file_fails_but_others_are_written() {
    let (temp, input) = temp_fixture("POINT_BASED.GSI");
    let missing = temp.path().join("MISSING.GSI");

    let (_, stderr, code) = run_geoclean(temp.path(), &["clear-up", arg(&missing), arg(&input)]);
    assert_ne!(code, 0);
    assert!(stderr.contains("File not found"));
    assert!(stderr.contains("1 of 2 files failed"));
    assert!(temp.path().join("POINT_BASED_EDIT.GSI").exists());
}

#[test]
fn missing_output_directory_is_an_error() {
    let (temp, input) = temp_fixture("POINT_BASED.GSI");
    let (_, stderr, code) = run_geoclean(
        temp.path(),
        &["clear-up", arg(&input), "--output", "/nonexistent/geoclean"],
    );
    assert_ne!(code, 0);
    assert!(stderr.contains("Output directory does not exist"));
}
