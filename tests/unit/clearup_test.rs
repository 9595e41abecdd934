//! Clear-up classification over complete files

use geoclean::clearup::{self, ClearUpConfig, Dialect, LineLabel, Retention};

use crate::helpers::{fixture_lines, is_subsequence, pick};

fn labels(lines: &[String], retention: Retention) -> Vec<LineLabel> {
    clearup::classify(lines, &ClearUpConfig::default(), retention)
        .labeled
        .into_iter()
        .map(|(_, label)| label)
        .collect()
}

#[test]
fn point_based_file_labels() {
    let lines = fixture_lines("POINT_BASED.GSI");
    let classification =
        clearup::classify(&lines, &ClearUpConfig::default(), Retention::new(true, true));
    assert_eq!(classification.dialect, Dialect::PointBased);
    assert_eq!(classification.collapsed_stations, 1);
    let labels: Vec<LineLabel> = classification.labeled.iter().map(|(_, l)| *l).collect();
    assert_eq!(
        labels,
        vec![
            LineLabel::Station,
            LineLabel::TargetPoint,
            LineLabel::TargetPoint,
            LineLabel::Measurement,
            LineLabel::ControlPoint,
            LineLabel::Measurement,
            LineLabel::Station,
            LineLabel::Measurement,
        ]
    );
}

#[test]
fn point_based_leading_stations_are_stripped_without_hold() {
    let lines = fixture_lines("POINT_BASED.GSI");
    let labels = labels(&lines, Retention::default());
    assert_eq!(labels.len(), 7);
    assert_eq!(labels[0], LineLabel::TargetPoint);
}

#[test]
fn point_based_retention_matrix() {
    let lines = fixture_lines("POINT_BASED.GSI");
    let config = ClearUpConfig::default();
    let cases = [
        (Retention::new(false, false), vec![4, 6, 8]),
        (Retention::new(true, false), vec![0, 4, 6, 7, 8]),
        (Retention::new(false, true), vec![4, 5, 6, 8]),
        (Retention::new(true, true), vec![0, 4, 5, 6, 7, 8]),
    ];
    for (retention, expected) in cases {
        let outcome = clearup::clear_up(&lines, &config, retention);
        assert_eq!(outcome.lines, pick(&lines, &expected), "{:?}", retention);
        assert!(is_subsequence(&outcome.lines, &lines));
    }
}

#[test]
fn report_counts_every_label() {
    let lines = fixture_lines("POINT_BASED.GSI");
    let report = clearup::clear_up(&lines, &ClearUpConfig::default(), Retention::default()).report;
    assert_eq!(report.input_lines, 9);
    assert_eq!(report.collapsed_stations, 2);
    assert_eq!(report.stations, 1);
    assert_eq!(report.target_points, 2);
    assert_eq!(report.control_points, 1);
    assert_eq!(report.measurements, 3);
    assert_eq!(report.output_lines, 3);
}

#[test]
fn station_based_file_labels() {
    let lines = fixture_lines("STATION_BASED.GSI");
    let classification = clearup::classify(&lines, &ClearUpConfig::default(), Retention::default());
    assert_eq!(classification.dialect, Dialect::StationBased);
    assert_eq!(classification.collapsed_stations, 1);
    let labels: Vec<LineLabel> = classification.labeled.iter().map(|(_, l)| *l).collect();
    assert_eq!(
        labels,
        vec![
            LineLabel::Station,
            LineLabel::TargetPoint,
            LineLabel::TargetPoint,
            LineLabel::Measurement,
            LineLabel::ControlPoint,
            LineLabel::Station,
            LineLabel::Measurement,
        ]
    );
}

#[test]
fn station_based_retention() {
    let lines = fixture_lines("STATION_BASED.GSI");
    let config = ClearUpConfig::default();

    let none = clearup::clear_up(&lines, &config, Retention::default());
    assert_eq!(none.lines, pick(&lines, &[3, 7]));

    let stations = clearup::clear_up(&lines, &config, Retention::new(true, false));
    assert_eq!(stations.lines, pick(&lines, &[0, 3, 5, 7]));

    let all = clearup::clear_up(&lines, &config, Retention::new(true, true));
    assert_eq!(all.lines, pick(&lines, &[0, 3, 4, 5, 7]));
}

#[test]
fn station_followed_by_two_targets_keeps_only_station() {
    let lines = fixture_lines("STATION_BASED.GSI");
    let input = pick(&lines, &[0, 1, 2]);
    let outcome = clearup::clear_up(&input, &ClearUpConfig::default(), Retention::new(true, false));
    assert_eq!(outcome.lines, pick(&input, &[0]));
    assert_eq!(outcome.report.target_points, 2);
}

#[test]
fn output_never_contains_targets() {
    for fixture in ["POINT_BASED.GSI", "STATION_BASED.GSI"] {
        let lines = fixture_lines(fixture);
        let outcome =
            clearup::clear_up(&lines, &ClearUpConfig::default(), Retention::new(true, true));
        let targets: Vec<String> = clearup::classify(
            &lines,
            &ClearUpConfig::default(),
            Retention::new(true, true),
        )
        .labeled
        .into_iter()
        .filter(|(_, label)| *label == LineLabel::TargetPoint)
        .map(|(line, _)| line.into_text())
        .collect();
        assert!(!targets.is_empty());
        for target in targets {
            assert!(!outcome.lines.contains(&target), "{}", fixture);
        }
    }
}

#[test]
fn custom_identifiers_change_station_detection() {
    let lines = fixture_lines("POINT_BASED.GSI");
    let config = ClearUpConfig {
        known_station_id: "XX".to_string(),
        ..ClearUpConfig::default()
    };
    let outcome = clearup::clear_up(&lines, &config, Retention::default());
    // ST02 is no longer a station and is kept as a measurement
    assert!(outcome.lines.contains(&lines[7]));
}

#[test]
fn empty_input_cleans_to_nothing() {
    let lines: Vec<String> = Vec::new();
    let outcome = clearup::clear_up(&lines, &ClearUpConfig::default(), Retention::new(true, true));
    assert!(outcome.lines.is_empty());
    assert_eq!(outcome.dialect, Dialect::PointBased);
}
