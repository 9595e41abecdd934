//! Identifier predicates over GSI records.
//!
//! Station and control-point records are not tagged in GSI. They are
//! recognized by configurable identifiers embedded in the point number,
//! e.g. `FS01` for a free station written as `0000FS01` in a GSI-8 field.

use super::line::Line;
use crate::clearup::ClearUpConfig;

/// Pure predicates parameterized by the configured identifiers.
#[derive(Debug, Clone)]
pub struct IdentifierMatcher {
    free_station: String,
    known_station: String,
    control_point: String,
}

impl IdentifierMatcher {
    pub fn new(config: &ClearUpConfig) -> Self {
        Self {
            free_station: config.free_station_id.to_uppercase(),
            known_station: config.known_station_id.to_uppercase(),
            control_point: config.control_point_id.to_uppercase(),
        }
    }

    /// Identifier left-padded with the zeros a point number field of this
    /// line's width would carry.
    fn padded(line: &Line, identifier: &str) -> String {
        let zeros = line.width().identifier_padding();
        format!("{}{}", "0".repeat(zeros), identifier)
    }

    fn contains_padded(line: &Line, identifier: &str) -> bool {
        !identifier.is_empty() && line.upper().contains(&Self::padded(line, identifier))
    }

    /// Free or known station, point-based identifier test.
    pub fn is_station_line(&self, line: &Line) -> bool {
        Self::contains_padded(line, &self.free_station)
            || Self::contains_padded(line, &self.known_station)
    }

    pub fn is_free_station_line(&self, line: &Line) -> bool {
        Self::contains_padded(line, &self.free_station)
    }

    /// The control-point identifier appears anywhere in the record.
    pub fn is_control_point(&self, line: &Line) -> bool {
        !self.control_point.is_empty() && line.upper().contains(&self.control_point)
    }

    /// Station record of the station-based dialect (84/85/86 present).
    pub fn is_station_line_station_based(&self, line: &Line) -> bool {
        line.has_station_coordinates()
    }

    /// Point number of a control-point record with the identifier removed,
    /// normalized the same way as [`Line::point_number`].
    pub fn control_point_number(&self, line: &Line) -> Option<String> {
        let number = line.point_number()?;
        if self.control_point.is_empty() {
            return Some(number);
        }
        let base = number.replace(&self.control_point, "");
        let stripped = base.trim_start_matches('0');
        if stripped.is_empty() {
            None
        } else {
            Some(stripped.to_string())
        }
    }
}
