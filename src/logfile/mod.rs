//! Instrument logfile segmentation and clean-up.
//!
//! A logfile is a transcript of on-board program runs. Each run is delimited
//! by a `Logfile - Begin` and a `Logfile - End` sentinel line; the sixth line
//! of a block names the program. Cleaning keeps the blocks that carry
//! results and drops the rest:
//!
//! ```text
//! ===== Logfile - Begin =====          <- block start, boilerplate
//! Instrument : TS30 ...
//! ...
//! Program    : Leica System 1200 Setup, Version 8.20   <- start + 5
//! ...results...
//! ===== Logfile - End =====            <- block end
//! ```

pub mod processors;
pub mod program;

use serde::Serialize;
use tracing::{debug, info, warn};

pub use processors::{processor_for, ContentProcessor};
pub use program::Program;

/// Sentinel that opens a block.
pub const BEGIN_SENTINEL: &str = "Logfile - Begin";
/// Sentinel that closes a block.
pub const END_SENTINEL: &str = "Logfile - End";
/// Offset of the program line from the block start.
pub const PROGRAM_OFFSET: usize = 5;

/// How blocks are written back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CleanMode {
    /// Copy every well-formed block verbatim.
    Raw,
    /// Keep only informative blocks, stripped of their boilerplate.
    Content,
}

/// One `BEGIN`..`END` section of a logfile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogfileBlock {
    /// Detected program, `None` when unknown
    pub program: Option<Program>,
    /// Index of the `BEGIN` line
    pub start: usize,
    /// Index of the `END` line
    pub end: usize,
    /// Lines `start..=end`
    pub lines: Vec<String>,
}

/// Split a logfile into its well-formed blocks.
///
/// A `BEGIN` that is followed by another `BEGIN` before any `END`, or that
/// never closes, is discarded. Lines outside blocks are not part of any block.
pub fn segment<S: AsRef<str>>(lines: &[S]) -> Vec<LogfileBlock> {
    let mut blocks = Vec::new();
    let mut start: Option<usize> = None;

    for (index, line) in lines.iter().enumerate() {
        let line = line.as_ref();
        if line.contains(BEGIN_SENTINEL) {
            if let Some(open) = start {
                warn!(line = open + 1, "logfile block never closed, discarded");
            }
            start = Some(index);
        } else if line.contains(END_SENTINEL) {
            match start.take() {
                Some(open) => {
                    let program = lines
                        .get(open + PROGRAM_OFFSET)
                        .filter(|_| open + PROGRAM_OFFSET <= index)
                        .and_then(|l| Program::detect(l.as_ref()));
                    blocks.push(LogfileBlock {
                        program,
                        start: open,
                        end: index,
                        lines: lines[open..=index]
                            .iter()
                            .map(|l| l.as_ref().to_string())
                            .collect(),
                    });
                }
                None => debug!(line = index + 1, "end sentinel without begin"),
            }
        }
    }

    if let Some(open) = start {
        warn!(line = open + 1, "logfile block never closed, discarded");
    }
    blocks
}

/// A block whose processor found results.
struct Retained<'a> {
    block: &'a LogfileBlock,
    processor: &'static dyn ContentProcessor,
    body: Vec<String>,
}

fn informative(blocks: &[LogfileBlock]) -> Vec<Retained<'_>> {
    let mut kept = Vec::new();
    for block in blocks {
        let Some(program) = block.program else {
            info!(line = block.start + 1, "unknown program, block dropped");
            continue;
        };
        let processor = processor_for(program);
        match processor.process(&block.lines) {
            Some(body) => kept.push(Retained {
                block,
                processor,
                body,
            }),
            None => debug!(
                line = block.start + 1,
                %program,
                "block without results dropped"
            ),
        }
    }
    kept
}

/// Clean a logfile.
///
/// In [`CleanMode::Content`] each informative block is written with its own
/// sentinel and boilerplate band around the body, so the output segments into
/// the same blocks again. The file header and footer are the bands of the
/// first and last block and go with them. A file without any informative
/// block cleans to nothing.
pub fn clean_logfile<S: AsRef<str>>(lines: &[S], mode: CleanMode) -> Vec<String> {
    let blocks = segment(lines);

    if mode == CleanMode::Raw {
        return blocks.into_iter().flat_map(|block| block.lines).collect();
    }

    let mut output = Vec::new();
    for kept in informative(&blocks) {
        let band = &kept.block.lines;
        let tail = band.len() - kept.processor.trailing();
        output.extend(band[..kept.processor.leading()].iter().cloned());
        output.extend(kept.body);
        output.extend(band[tail..].iter().cloned());
    }
    output
}

/// The stripped bodies of all informative blocks without empty lines, for
/// downstream analysis of the block contents.
pub fn full_clean<S: AsRef<str>>(lines: &[S]) -> Vec<String> {
    informative(&segment(lines))
        .into_iter()
        .flat_map(|kept| kept.body)
        .filter(|line| !line.trim().is_empty())
        .collect()
}
