//! Single-pass record classifiers.
//!
//! Both classifiers walk the records once with a one-record lookahead (the
//! last record looks ahead at itself). The rules are tried in order and the
//! first one that fires decides the label; the order is load-bearing.
//!
//! Point-based:
//! 1. Target record (all-zero coordinates) -> `TargetPoint`
//! 2. Next record is a target with the same point number -> `TargetPoint`
//!    (face 1 of a two-face measurement)
//! 3. Station identifier -> `Station`
//! 4. Control-point identifier -> `ControlPoint` if its base number was seen
//!    as a target, otherwise `Measurement`
//! 5. Anything else -> `Measurement`
//!
//! Station-based adds a rule 0: a record carrying WI 84/85/86 is always a
//! `Station`. Rule 3 does not apply, and an unmatched control point is kept as
//! `Measurement` so it is never lost.

use std::collections::HashSet;

use tracing::trace;

use super::LineLabel;
use crate::gsi::{IdentifierMatcher, Line};

/// Scratch state carried across one classification pass.
#[derive(Debug, Default)]
pub struct ClassificationContext {
    /// Point numbers already labeled `TargetPoint`. Never shrinks.
    seen_targets: HashSet<String>,
}

impl ClassificationContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a point number has been seen as a target.
    pub fn has_seen(&self, point_number: &str) -> bool {
        self.seen_targets.contains(point_number)
    }

    fn remember(&mut self, line: &Line) {
        if let Some(number) = line.point_number() {
            self.seen_targets.insert(number);
        }
    }

    /// Rules 1 and 2. Records the point number when either fires.
    fn label_target(&mut self, line: &Line, next: &Line) -> Option<LineLabel> {
        if line.is_target() || is_face_one(line, next) {
            self.remember(line);
            Some(LineLabel::TargetPoint)
        } else {
            None
        }
    }

    /// Rule 4: control point resolved against the seen targets.
    fn label_control(&self, line: &Line, matcher: &IdentifierMatcher) -> LineLabel {
        match matcher.control_point_number(line) {
            Some(number) if self.has_seen(&number) => LineLabel::ControlPoint,
            number => {
                trace!(
                    point = number.as_deref().unwrap_or(""),
                    "control point without a matching target, kept as measurement"
                );
                LineLabel::Measurement
            }
        }
    }

    /// Label one record of a point-based file.
    pub fn label_point_based(
        &mut self,
        line: &Line,
        next: &Line,
        matcher: &IdentifierMatcher,
    ) -> LineLabel {
        if let Some(label) = self.label_target(line, next) {
            return label;
        }
        if matcher.is_station_line(line) {
            return LineLabel::Station;
        }
        if matcher.is_control_point(line) {
            return self.label_control(line, matcher);
        }
        LineLabel::Measurement
    }

    /// Label one record of a station-based file.
    pub fn label_station_based(
        &mut self,
        line: &Line,
        next: &Line,
        matcher: &IdentifierMatcher,
    ) -> LineLabel {
        if matcher.is_station_line_station_based(line) {
            return LineLabel::Station;
        }
        if let Some(label) = self.label_target(line, next) {
            return label;
        }
        if matcher.is_control_point(line) {
            return self.label_control(line, matcher);
        }
        LineLabel::Measurement
    }
}

/// Face 1 of a two-face pair: the next record is a target sharing this
/// record's point number.
fn is_face_one(line: &Line, next: &Line) -> bool {
    if !next.is_target() {
        return false;
    }
    match (line.point_number(), next.point_number()) {
        (Some(a), Some(b)) => a == b,
        _ => false,
    }
}

type LabelFn = fn(&mut ClassificationContext, &Line, &Line, &IdentifierMatcher) -> LineLabel;

fn run_pass(
    lines: Vec<Line>,
    matcher: &IdentifierMatcher,
    label: LabelFn,
) -> Vec<(Line, LineLabel)> {
    let mut context = ClassificationContext::new();
    let labels: Vec<LineLabel> = lines
        .iter()
        .enumerate()
        .map(|(i, line)| {
            let next = lines.get(i + 1).unwrap_or(line);
            label(&mut context, line, next, matcher)
        })
        .collect();
    lines.into_iter().zip(labels).collect()
}

/// Classify the records of a point-based file.
pub fn classify_point_based(
    lines: Vec<Line>,
    matcher: &IdentifierMatcher,
) -> Vec<(Line, LineLabel)> {
    run_pass(lines, matcher, ClassificationContext::label_point_based)
}

/// Classify the records of a station-based file.
pub fn classify_station_based(
    lines: Vec<Line>,
    matcher: &IdentifierMatcher,
) -> Vec<(Line, LineLabel)> {
    run_pass(lines, matcher, ClassificationContext::label_station_based)
}
