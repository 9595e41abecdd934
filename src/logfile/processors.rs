//! Per-program content processors.
//!
//! Every block starts and ends with boilerplate (sentinel, instrument and job
//! header, memory and operator footer). A processor strips that band and keeps
//! the rest only when it contains one of the program's result markers; a block
//! without results is noise and is dropped as a whole.

use super::program::Program;

/// Decides whether one logfile block carries information worth keeping.
pub trait ContentProcessor {
    /// The program this processor handles.
    fn program(&self) -> Program;

    /// Boilerplate lines at the start of a block.
    fn leading(&self) -> usize {
        2
    }

    /// Boilerplate lines at the end of a block.
    fn trailing(&self) -> usize {
        4
    }

    /// Substrings that mark computed, staked or resulting data.
    fn markers(&self) -> &'static [&'static str];

    /// Strip the boilerplate and keep the remainder if any line carries a
    /// marker. `None` drops the whole block.
    fn process(&self, block: &[String]) -> Option<Vec<String>> {
        let (leading, trailing) = (self.leading(), self.trailing());
        if block.len() <= leading + trailing {
            return None;
        }
        let body = &block[leading..block.len() - trailing];
        let informative = body
            .iter()
            .any(|line| self.markers().iter().any(|marker| line.contains(marker)));
        informative.then(|| body.to_vec())
    }
}

pub struct CogoProcessor;

impl ContentProcessor for CogoProcessor {
    fn program(&self) -> Program {
        Program::Cogo
    }

    fn markers(&self) -> &'static [&'static str] {
        &[
            "Computed",
            "Base Point",
            "Inverse",
            "Offset Point",
            "Traverse",
            "Stakeout Diff",
        ]
    }
}

pub struct SetupProcessor;

impl ContentProcessor for SetupProcessor {
    fn program(&self) -> Program {
        Program::Setup
    }

    fn trailing(&self) -> usize {
        5
    }

    fn markers(&self) -> &'static [&'static str] {
        &["Results"]
    }
}

pub struct StakeoutProcessor;

impl ContentProcessor for StakeoutProcessor {
    fn program(&self) -> Program {
        Program::Stakeout
    }

    fn markers(&self) -> &'static [&'static str] {
        &["Point ID"]
    }
}

pub struct ReferenceLineProcessor;

impl ContentProcessor for ReferenceLineProcessor {
    fn program(&self) -> Program {
        Program::ReferenceLine
    }

    fn markers(&self) -> &'static [&'static str] {
        &["Point ID", "Chainage"]
    }
}

pub struct ReferencePlaneProcessor;

impl ContentProcessor for ReferencePlaneProcessor {
    fn program(&self) -> Program {
        Program::ReferencePlane
    }

    fn markers(&self) -> &'static [&'static str] {
        &["Point ID", "Perp. Distance"]
    }
}

pub struct VolumeProcessor;

impl ContentProcessor for VolumeProcessor {
    fn program(&self) -> Program {
        Program::VolumeCalculations
    }

    fn trailing(&self) -> usize {
        5
    }

    fn markers(&self) -> &'static [&'static str] {
        &["Results"]
    }
}

/// The processor responsible for a program's blocks.
pub fn processor_for(program: Program) -> &'static dyn ContentProcessor {
    match program {
        Program::Cogo => &CogoProcessor,
        Program::ReferenceLine => &ReferenceLineProcessor,
        Program::ReferencePlane => &ReferencePlaneProcessor,
        Program::Setup => &SetupProcessor,
        Program::Stakeout => &StakeoutProcessor,
        Program::VolumeCalculations => &VolumeProcessor,
    }
}
