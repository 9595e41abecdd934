//! Integration tests for the ltop command.

use crate::helpers::{arg, read_lines, run_geoclean, temp_fixture};

#[test]
fn ltop_writes_ltop_file_and_reports_warning() {
    let (temp, input) = temp_fixture("POLAR.GSL");
    let (stdout, stderr, code) = run_geoclean(temp.path(), &["ltop", arg(&input)]);
    assert_eq!(code, 0, "stderr: {}", stderr);

    assert!(stdout.contains("POLAR_LTOP.GSL"));
    assert!(stdout.contains("13 -> 10 lines"));
    assert!(stdout.contains("warning: no control point found"));
    assert!(stdout.contains("station FS01 (line 6)"));

    let output = read_lines(&temp.path().join("POLAR_LTOP.GSL"));
    assert_eq!(output.len(), 10);
    assert!(output.iter().all(|l| !l.contains("STKE")));
}

#[test]
fn ltop_warning_is_logged_to_stderr() {
    let (temp, input) = temp_fixture("POLAR.GSL");
    let (_, stderr, code) = run_geoclean(temp.path(), &["ltop", arg(&input)]);
    assert_eq!(code, 0);
    assert!(stderr.contains("WARN"));
    assert!(stderr.contains("FS01"));
}
