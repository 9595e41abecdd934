//! Output file naming.
//!
//! Cleaned files keep the input's stem and extension (`.GSI`, `.GSL`, ...)
//! verbatim and get a suffix that names the operation:
//! `STN12.GSI` -> `STN12_EDIT.GSI`, `POLAR.GSL` -> `POLAR_LTOP.GSL`.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Suffix appended to the stem of a cleaned file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Suffix {
    /// GSI clear-up
    Edit,
    /// LTOP polar clean
    Ltop,
    /// Logfile content or raw clean
    Clean,
    /// Logfile full clean
    Full,
}

impl Suffix {
    pub fn as_str(&self) -> &'static str {
        match self {
            Suffix::Edit => "_EDIT",
            Suffix::Ltop => "_LTOP",
            Suffix::Clean => "_CLEAN",
            Suffix::Full => "_FULL",
        }
    }
}

/// Path of the cleaned file for `input`.
///
/// The file lands next to the input unless `output_dir` is given.
pub fn output_path(input: &Path, suffix: Suffix, output_dir: Option<&Path>) -> PathBuf {
    let mut name = OsString::from(input.file_stem().unwrap_or_default());
    name.push(suffix.as_str());
    if let Some(extension) = input.extension() {
        name.push(".");
        name.push(extension);
    }

    let dir = match output_dir {
        Some(dir) => dir.to_path_buf(),
        None => input.parent().map(Path::to_path_buf).unwrap_or_default(),
    };
    dir.join(name)
}
