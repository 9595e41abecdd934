//! LTOP clean over a complete polar file

use geoclean::clearup::ClearUpConfig;
use geoclean::ltop::{ltop_clean, LtopConfig};

use crate::helpers::{fixture_lines, is_subsequence, pick};

#[test]
fn polar_file_is_cleaned() {
    let lines = fixture_lines("POLAR.GSL");
    let outcome = ltop_clean(&lines, &ClearUpConfig::default(), &LtopConfig::default());
    assert_eq!(
        outcome.lines,
        pick(&lines, &[0, 1, 2, 3, 4, 5, 6, 8, 9, 11])
    );
    assert!(is_subsequence(&outcome.lines, &lines));
}

#[test]
fn reference_run_past_the_cap_warns_for_its_station() {
    let lines = fixture_lines("POLAR.GSL");
    let outcome = ltop_clean(&lines, &ClearUpConfig::default(), &LtopConfig::default());
    assert_eq!(outcome.warnings.len(), 1);
    let warning = &outcome.warnings[0];
    assert_eq!(warning.station, "FS01");
    assert_eq!(warning.line, 5);
    assert!(warning.to_string().contains("FS01"));
}

#[test]
fn no_control_point_survives() {
    let lines = fixture_lines("POLAR.GSL");
    let outcome = ltop_clean(&lines, &ClearUpConfig::default(), &LtopConfig::default());
    assert!(outcome.lines.iter().all(|l| !l.contains("STKE")));
}

#[test]
fn custom_control_identifier() {
    let lines: Vec<String> = fixture_lines("POLAR.GSL")
        .into_iter()
        .map(|l| l.replace("STKE", "KTRL"))
        .collect();
    let config = ClearUpConfig {
        control_point_id: "KTRL".to_string(),
        ..ClearUpConfig::default()
    };
    let outcome = ltop_clean(&lines, &config, &LtopConfig::default());
    assert_eq!(outcome.lines.len(), 10);
}
