//! LTOP command handler

use std::path::{Path, PathBuf};

use anyhow::Result;

use geoclean::batch::JobKind;
use geoclean::cli::OutputArgs;

use super::{load_config, run_files, settings_from};

#[cfg(not(tarpaulin_include))]
pub fn handle(files: &[PathBuf], output: &OutputArgs, config_file: Option<&Path>) -> Result<()> {
    let config = load_config(config_file)?;
    let settings = settings_from(&config, output)?;
    run_files(
        files,
        JobKind::Ltop,
        &settings,
        output.workers.or(config.processing.workers),
    )
}
