//! Clear-up of GSI point and station files.
//!
//! A clear-up run labels every record of a file as station, target point,
//! control point or plain measurement, then writes back the subset selected
//! by the two retention flags. The pipeline is:
//!
//! 1. Detect the [`Dialect`] from the first record
//! 2. Collapse runs of duplicate station records ([`filter::collapse_stations`])
//! 3. Label each record in one forward pass ([`classify`])
//! 4. Keep the records the [`Retention`] policy asks for ([`filter::retain`])
//!
//! Output order is always a subsequence of the input order.

pub mod classify;
pub mod filter;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::gsi::{IdentifierMatcher, Line};

pub use classify::{classify_point_based, classify_station_based, ClassificationContext};
pub use filter::{collapse_stations, retain};

/// Identifier strings used to recognize station and control-point records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClearUpConfig {
    /// Identifier of a free station setup
    #[serde(default = "default_free_station_id")]
    pub free_station_id: String,
    /// Identifier of a setup on a known point
    #[serde(default = "default_known_station_id")]
    pub known_station_id: String,
    /// Identifier of a control (check) point
    #[serde(default = "default_control_point_id")]
    pub control_point_id: String,
}

pub fn default_free_station_id() -> String {
    "FS".to_string()
}

pub fn default_known_station_id() -> String {
    "ST".to_string()
}

pub fn default_control_point_id() -> String {
    "STKE".to_string()
}

impl Default for ClearUpConfig {
    fn default() -> Self {
        Self {
            free_station_id: default_free_station_id(),
            known_station_id: default_known_station_id(),
            control_point_id: default_control_point_id(),
        }
    }
}

/// Which record kinds survive a clear-up.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Retention {
    #[serde(default)]
    pub hold_stations: bool,
    #[serde(default)]
    pub hold_control_points: bool,
}

impl Retention {
    pub fn new(hold_stations: bool, hold_control_points: bool) -> Self {
        Self {
            hold_stations,
            hold_control_points,
        }
    }
}

/// Role of one record, assigned by a classifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineLabel {
    Station,
    TargetPoint,
    ControlPoint,
    Measurement,
}

impl LineLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LineLabel::Station => "station",
            LineLabel::TargetPoint => "target_point",
            LineLabel::ControlPoint => "control_point",
            LineLabel::Measurement => "measurement",
        }
    }
}

impl std::fmt::Display for LineLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// File layout variant, chosen by the first record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dialect {
    /// Only point records; stations are recognized by identifier.
    PointBased,
    /// Dedicated station records (WI 84/85/86) between point records.
    StationBased,
}

impl Dialect {
    /// Station-based when the first record is a station-based station line.
    pub fn detect(lines: &[Line], matcher: &IdentifierMatcher) -> Self {
        match lines.first() {
            Some(first) if matcher.is_station_line_station_based(first) => Dialect::StationBased,
            _ => Dialect::PointBased,
        }
    }
}

/// Per-label counts of one clear-up run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ClearUpReport {
    pub input_lines: usize,
    /// Station records removed before classification
    pub collapsed_stations: usize,
    pub stations: usize,
    pub target_points: usize,
    pub control_points: usize,
    pub measurements: usize,
    pub output_lines: usize,
}

impl ClearUpReport {
    fn count(&mut self, label: LineLabel) {
        match label {
            LineLabel::Station => self.stations += 1,
            LineLabel::TargetPoint => self.target_points += 1,
            LineLabel::ControlPoint => self.control_points += 1,
            LineLabel::Measurement => self.measurements += 1,
        }
    }
}

/// Labeled records of a file after the duplicate-station pre-step.
#[derive(Debug, Clone)]
pub struct Classification {
    pub dialect: Dialect,
    pub labeled: Vec<(Line, LineLabel)>,
    pub collapsed_stations: usize,
}

/// Result of a clear-up run.
#[derive(Debug, Clone)]
pub struct ClearUpOutcome {
    pub dialect: Dialect,
    pub lines: Vec<String>,
    pub report: ClearUpReport,
}

/// Run the pre-step and the classifier for the file's dialect.
///
/// Runs of consecutive station records are collapsed to their first member,
/// also when stations are held: a duplicated setup is retained exactly once.
/// A point-based file that does not hold stations also loses its leading run
/// of station records; a station-based file keeps its opening station.
pub fn classify<S: AsRef<str>>(
    lines: &[S],
    config: &ClearUpConfig,
    retention: Retention,
) -> Classification {
    let matcher = IdentifierMatcher::new(config);
    let parsed: Vec<Line> = lines.iter().map(|l| Line::new(l.as_ref())).collect();
    let dialect = Dialect::detect(&parsed, &matcher);
    let before = parsed.len();

    let labeled = match dialect {
        Dialect::PointBased => {
            let reduced = collapse_stations(
                parsed,
                |line| matcher.is_station_line(line),
                !retention.hold_stations,
            );
            classify_point_based(reduced, &matcher)
        }
        Dialect::StationBased => {
            let reduced = collapse_stations(
                parsed,
                |line| matcher.is_station_line_station_based(line),
                false,
            );
            classify_station_based(reduced, &matcher)
        }
    };

    let collapsed_stations = before - labeled.len();
    debug!(
        ?dialect,
        lines = before,
        collapsed_stations,
        "classified GSI records"
    );

    Classification {
        dialect,
        labeled,
        collapsed_stations,
    }
}

/// Clear up a GSI file: classify every record and keep the retained subset.
pub fn clear_up<S: AsRef<str>>(
    lines: &[S],
    config: &ClearUpConfig,
    retention: Retention,
) -> ClearUpOutcome {
    let classification = classify(lines, config, retention);
    let mut report = ClearUpReport {
        input_lines: lines.len(),
        collapsed_stations: classification.collapsed_stations,
        ..ClearUpReport::default()
    };

    let mut output = Vec::with_capacity(classification.labeled.len());
    for (line, label) in classification.labeled {
        report.count(label);
        if retain(label, retention) {
            output.push(line.into_text());
        }
    }
    report.output_lines = output.len();

    ClearUpOutcome {
        dialect: classification.dialect,
        lines: output,
        report,
    }
}
