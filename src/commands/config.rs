//! Config subcommands handler

use std::path::{Path, PathBuf};

use anyhow::{bail, Result};

use geoclean::theme::current_theme;
use geoclean::Config;

use super::load_config;

fn config_path(config_file: Option<&Path>) -> Result<PathBuf> {
    match config_file {
        Some(path) => Ok(path.to_path_buf()),
        None => Config::config_path(),
    }
}

/// Show the effective configuration as TOML.
#[cfg(not(tarpaulin_include))]
pub fn handle_show(config_file: Option<&Path>) -> Result<()> {
    let config = load_config(config_file)?;
    let toml_str = toml::to_string_pretty(&config)?;
    let theme = current_theme();
    println!("{}", theme.primary_text(toml_str.trim_end()));
    Ok(())
}

#[cfg(not(tarpaulin_include))]
pub fn handle_path(config_file: Option<&Path>) -> Result<()> {
    println!("{}", config_path(config_file)?.display());
    Ok(())
}

/// Write a config file with default values.
#[cfg(not(tarpaulin_include))]
pub fn handle_init(force: bool, config_file: Option<&Path>) -> Result<()> {
    let path = config_path(config_file)?;
    if path.exists() && !force {
        bail!(
            "Config file already exists: {} (use --force to overwrite)",
            path.display()
        );
    }
    Config::default().save_to(&path)?;
    let theme = current_theme();
    println!(
        "{}",
        theme.success_text(&format!("Config file created: {}", path.display()))
    );
    Ok(())
}
