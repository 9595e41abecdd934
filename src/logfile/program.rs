//! On-board programs that write logfile blocks.

use serde::Serialize;

/// Program that produced a logfile block, recognized by a marker substring on
/// the sixth line of the block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Program {
    Cogo,
    ReferenceLine,
    ReferencePlane,
    Setup,
    Stakeout,
    VolumeCalculations,
}

impl Program {
    /// All programs in detection order.
    pub const ALL: [Program; 6] = [
        Program::Cogo,
        Program::ReferenceLine,
        Program::ReferencePlane,
        Program::Setup,
        Program::Stakeout,
        Program::VolumeCalculations,
    ];

    /// Literal marker written by the program into its block header.
    pub fn marker(&self) -> &'static str {
        match self {
            Program::Cogo => "Leica System 1200 COGO,",
            Program::ReferenceLine => "Leica System 1200 Reference Line,",
            Program::ReferencePlane => "Leica System 1200 Reference Plane,",
            Program::Setup => "Leica System 1200 Setup,",
            Program::Stakeout => "Leica System 1200 Stakeout,",
            Program::VolumeCalculations => "Leica System 1200 Volume Calculations,",
        }
    }

    /// First program whose marker appears in the line.
    pub fn detect(line: &str) -> Option<Program> {
        Program::ALL
            .into_iter()
            .find(|program| line.contains(program.marker()))
    }

    pub fn name(&self) -> &'static str {
        match self {
            Program::Cogo => "COGO",
            Program::ReferenceLine => "Reference Line",
            Program::ReferencePlane => "Reference Plane",
            Program::Setup => "Setup",
            Program::Stakeout => "Stakeout",
            Program::VolumeCalculations => "Volume Calculations",
        }
    }
}

impl std::fmt::Display for Program {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
