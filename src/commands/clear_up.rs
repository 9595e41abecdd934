//! Clear-up command handler

use std::path::{Path, PathBuf};

use anyhow::Result;

use geoclean::batch::JobKind;
use geoclean::cli::OutputArgs;

use super::{load_config, run_files, settings_from};

/// Clear up GSI files.
///
/// Retention flags only ever add to the `[retention]` defaults.
#[cfg(not(tarpaulin_include))]
pub fn handle(
    files: &[PathBuf],
    hold_stations: bool,
    hold_control_points: bool,
    output: &OutputArgs,
    config_file: Option<&Path>,
) -> Result<()> {
    let config = load_config(config_file)?;
    let mut settings = settings_from(&config, output)?;
    settings.retention.hold_stations |= hold_stations;
    settings.retention.hold_control_points |= hold_control_points;
    run_files(
        files,
        JobKind::ClearUp,
        &settings,
        output.workers.or(config.processing.workers),
    )
}
