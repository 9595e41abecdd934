//! Clear-up filters: duplicate-station collapsing and the retention policy.

use tracing::debug;

use super::{LineLabel, Retention};
use crate::gsi::Line;

/// Collapse every run of consecutive station records to its first member.
///
/// With `strip_leading` the run of station records at the very start of the
/// file is removed entirely. Produces a new list; the input is consumed, not
/// edited in place.
pub fn collapse_stations<F>(lines: Vec<Line>, is_station: F, strip_leading: bool) -> Vec<Line>
where
    F: Fn(&Line) -> bool,
{
    let mut leading = strip_leading;
    let mut previous_station = false;
    let mut output = Vec::with_capacity(lines.len());

    for line in lines {
        let station = is_station(&line);
        let keep = !station || !(leading || previous_station);
        if !station {
            leading = false;
        }
        previous_station = station;

        if keep {
            output.push(line);
        } else {
            debug!(record = line.text(), "dropping duplicate station record");
        }
    }
    output
}

/// Whether a labeled record is written to the output.
///
/// Measurements are always kept, target points never. Stations and control
/// points follow their retention flag.
pub fn retain(label: LineLabel, retention: Retention) -> bool {
    match label {
        LineLabel::Measurement => true,
        LineLabel::TargetPoint => false,
        LineLabel::Station => retention.hold_stations,
        LineLabel::ControlPoint => retention.hold_control_points,
    }
}
