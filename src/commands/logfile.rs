//! Logfile command handler

use std::path::{Path, PathBuf};

use anyhow::Result;

use geoclean::batch::JobKind;
use geoclean::cli::OutputArgs;
use geoclean::logfile::CleanMode;

use super::{load_config, run_files, settings_from};

/// Job kind for the `--raw` / `--full` flags.
pub fn job_kind(raw: bool, full: bool) -> JobKind {
    if full {
        JobKind::FullClean
    } else if raw {
        JobKind::Logfile(CleanMode::Raw)
    } else {
        JobKind::Logfile(CleanMode::Content)
    }
}

#[cfg(not(tarpaulin_include))]
pub fn handle(
    files: &[PathBuf],
    raw: bool,
    full: bool,
    output: &OutputArgs,
    config_file: Option<&Path>,
) -> Result<()> {
    let config = load_config(config_file)?;
    let settings = settings_from(&config, output)?;
    run_files(
        files,
        job_kind(raw, full),
        &settings,
        output.workers.or(config.processing.workers),
    )
}
