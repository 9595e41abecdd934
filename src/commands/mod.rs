//! Command handlers for the geoclean CLI.
//!
//! Each submodule handles a specific CLI command or command group.
//! The main dispatch logic remains in main.rs.

pub mod classify;
pub mod clear_up;
pub mod completions;
pub mod config;
pub mod logfile;
pub mod ltop;

use std::path::{Path, PathBuf};

use anyhow::{bail, Result};

use geoclean::batch::{self, JobKind, JobResult, Settings};
use geoclean::cli::OutputArgs;
use geoclean::theme::{current_theme, Theme};
use geoclean::Config;

/// Load the config file given with `--config`, or the default one.
pub fn load_config(config_file: Option<&Path>) -> Result<Config> {
    match config_file {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
}

/// Settings for a run, with CLI flags taking precedence over config values.
pub fn settings_from(config: &Config, output: &OutputArgs) -> Result<Settings> {
    if let Some(dir) = &output.output {
        if !dir.is_dir() {
            bail!("Output directory does not exist: {}", dir.display());
        }
    }
    Ok(Settings {
        identifiers: config.identifiers.clone(),
        retention: config.retention,
        ltop: config.ltop,
        output_dir: output.output.clone(),
    })
}

/// Run one job per file and print a summary line for each.
///
/// Fails when at least one file failed, after all files were processed.
pub fn run_files(
    files: &[PathBuf],
    kind: JobKind,
    settings: &Settings,
    workers: Option<usize>,
) -> Result<()> {
    if let Some(0) = workers {
        bail!("--workers must be > 0");
    }
    let results = batch::run_jobs(batch::jobs_for(files, kind), settings, workers);
    let theme = current_theme();
    for result in &results {
        print_result(&theme, result);
    }

    let failed = results.iter().filter(|r| !r.is_success()).count();
    if failed > 0 {
        bail!("{} of {} files failed", failed, results.len());
    }
    Ok(())
}

fn print_result(theme: &Theme, result: &JobResult) {
    let input = result.job.input.display().to_string();
    match &result.result {
        Ok(summary) => {
            println!(
                "{} {} {}",
                theme.accent_text(&input),
                theme.secondary_text("->"),
                theme.accent_text(&summary.output.display().to_string()),
            );
            println!(
                "  {}",
                theme.primary_text(&format!(
                    "{} -> {} lines",
                    summary.input_lines, summary.output_lines
                ))
            );
            if let Some(report) = &summary.report {
                println!(
                    "  {}",
                    theme.secondary_text(&format!(
                        "stations: {}, target points: {}, control points: {}, measurements: {}, duplicate stations: {}",
                        report.stations,
                        report.target_points,
                        report.control_points,
                        report.measurements,
                        report.collapsed_stations
                    ))
                );
            }
            for warning in &summary.warnings {
                println!("  {}", theme.warning_text(&format!("warning: {}", warning)));
            }
        }
        Err(e) => {
            eprintln!("{} {}", theme.error_text("error:"), e);
        }
    }
}
