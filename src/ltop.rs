//! LTOP polar clean.
//!
//! Prepares a polar measurement file for LTOP. Each station record (5 blocks)
//! opens a reference run of measurement records (6 blocks). The run is closed
//! by a control-point record, which is dropped; a second control-point record
//! closes the measurement run and is dropped as well. Everything else is kept.
//!
//! Records of the LTOP+ variant carry one extra trailing two-face block whose
//! word index is configurable (see [`LtopConfig`]).

use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};

use crate::clearup::ClearUpConfig;
use crate::gsi::block::TWO_FACE_MARKER;
use crate::gsi::{IdentifierMatcher, Line};

/// Blocks in a station record.
pub const STATION_TOKENS: usize = 5;
/// Blocks in a measurement record.
pub const MEASUREMENT_TOKENS: usize = 6;
/// Reference records allowed before a control point must appear.
///
/// A control point directly after the fourth reference still closes the run
/// without a warning. Only a fifth non-control reference is over the cap.
pub const REFERENCE_CAP: usize = 4;

/// LTOP specific settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LtopConfig {
    /// Word index of the trailing two-face block of LTOP+ records
    #[serde(default = "default_two_face_word_index")]
    pub two_face_word_index: u8,
}

pub fn default_two_face_word_index() -> u8 {
    TWO_FACE_MARKER
}

impl Default for LtopConfig {
    fn default() -> Self {
        Self {
            two_face_word_index: default_two_face_word_index(),
        }
    }
}

/// A station whose reference run passed the cap without a control point.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LtopWarning {
    /// Point number of the station record
    pub station: String,
    /// Zero-based input index of the record that hit the cap
    pub line: usize,
}

impl std::fmt::Display for LtopWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "no control point found within the reference run for station {} (line {})",
            self.station,
            self.line + 1
        )
    }
}

/// Result of an LTOP clean.
#[derive(Debug, Clone, Default)]
pub struct LtopOutcome {
    pub lines: Vec<String>,
    pub warnings: Vec<LtopWarning>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    AwaitingStation,
    CountingReferences { range: usize, control_found: bool },
}

/// Block count used by the state machine, ignoring a trailing two-face block.
fn effective_tokens(line: &Line, config: &LtopConfig) -> usize {
    let tokens = line.token_count();
    match line.blocks().last() {
        Some(block) if block.word_index == config.two_face_word_index => tokens - 1,
        _ => tokens,
    }
}

struct LtopCleaner<'a> {
    matcher: IdentifierMatcher,
    config: &'a LtopConfig,
    state: State,
    station: String,
    /// The last emitted record is a free station setup.
    last_is_free_station: bool,
    outcome: LtopOutcome,
}

impl<'a> LtopCleaner<'a> {
    fn new(identifiers: &ClearUpConfig, config: &'a LtopConfig) -> Self {
        Self {
            matcher: IdentifierMatcher::new(identifiers),
            config,
            state: State::AwaitingStation,
            station: String::new(),
            last_is_free_station: false,
            outcome: LtopOutcome::default(),
        }
    }

    fn emit(&mut self, line: Line) {
        self.last_is_free_station = false;
        self.outcome.lines.push(line.into_text());
    }

    fn on_station(&mut self, line: Line) {
        let free = self.matcher.is_free_station_line(&line);
        if free && self.last_is_free_station {
            if let Some(previous) = self.outcome.lines.pop() {
                debug!(record = %previous, "replacing repeated free station setup");
            }
        }
        self.station = line.point_number().unwrap_or_default();
        self.state = State::CountingReferences {
            range: 0,
            control_found: false,
        };
        self.emit(line);
        self.last_is_free_station = free;
    }

    fn on_measurement(&mut self, index: usize, line: Line) {
        let (range, control_found) = match self.state {
            State::AwaitingStation => {
                debug!(line = index + 1, "measurement before the first station, kept");
                self.emit(line);
                return;
            }
            State::CountingReferences {
                range,
                control_found,
            } => (range, control_found),
        };
        let is_control = self.matcher.is_control_point(&line);

        if control_found || range > REFERENCE_CAP {
            // measurement run; a further control point closes it
            if !is_control {
                self.emit(line);
            }
            return;
        }

        if is_control {
            // closes the reference run
            self.state = State::CountingReferences {
                range: range + 1,
                control_found: true,
            };
            return;
        }

        if range == REFERENCE_CAP {
            let warning = LtopWarning {
                station: self.station.clone(),
                line: index,
            };
            warn!(station = %warning.station, line = index + 1, "{}", warning);
            self.outcome.warnings.push(warning);
        }
        self.state = State::CountingReferences {
            range: range + 1,
            control_found: false,
        };
        self.emit(line);
    }

    fn feed(&mut self, index: usize, raw: &str) {
        let line = Line::new(raw);
        match effective_tokens(&line, self.config) {
            STATION_TOKENS => self.on_station(line),
            MEASUREMENT_TOKENS => self.on_measurement(index, line),
            other => trace!(line = index + 1, tokens = other, "skipping record"),
        }
    }
}

/// Clean an LTOP polar file.
///
/// Never fails; a station without a control point inside its reference run is
/// reported through [`LtopOutcome::warnings`] and logged.
pub fn ltop_clean<S: AsRef<str>>(
    lines: &[S],
    identifiers: &ClearUpConfig,
    config: &LtopConfig,
) -> LtopOutcome {
    let mut cleaner = LtopCleaner::new(identifiers, config);
    for (index, raw) in lines.iter().enumerate() {
        cleaner.feed(index, raw.as_ref());
    }
    cleaner.outcome
}
