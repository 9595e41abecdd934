//! CLI definitions for geoclean
//!
//! This module contains the clap CLI structure definitions, separated from main.rs
//! so they can be accessed by xtask for documentation generation (man pages).

use std::path::PathBuf;

use clap::builder::styling::{AnsiColor, Effects, Styles};
use clap::{Args, Parser, Subcommand};
use clap_complete::Shell as CompletionShell;

/// Version string; dev builds carry the git commit.
#[cfg(not(feature = "release"))]
pub const VERSION: &str = concat!(env!("CARGO_PKG_VERSION"), " (", env!("VERGEN_GIT_SHA"), ")");
#[cfg(feature = "release")]
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build clap styles using our theme colors.
///
/// - Green: headers, usage, command names (accent color)
/// - White: descriptions, placeholders (renders as light gray on dark terminals)
pub fn build_cli_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Green.on_default() | Effects::BOLD)
        .usage(AnsiColor::Green.on_default() | Effects::BOLD)
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::White.on_default())
        .valid(AnsiColor::White.on_default())
        .invalid(AnsiColor::Red.on_default())
        .error(AnsiColor::Red.on_default() | Effects::BOLD)
}

#[derive(Parser)]
#[command(name = "geoclean")]
#[command(about = "Clean up Leica GSI measurement files, LTOP polar files and instrument logfiles")]
#[command(
    long_about = "geoclean - Clean up total station exports.

geoclean classifies the records of Leica GSI-8 / GSI-16 files as station,
target point, control point or measurement and writes back what you ask to
keep. It also prepares polar files for LTOP and strips instrument logfiles
down to the program runs that produced results.

Cleaned files are written next to the input with a suffix:
    STN12.GSI   -> STN12_EDIT.GSI    (clear-up)
    POLAR.GSL   -> POLAR_LTOP.GSL    (ltop)
    LOG.txt     -> LOG_CLEAN.txt     (logfile)
    LOG.txt     -> LOG_FULL.txt      (logfile --full)

QUICK START:
    geoclean clear-up STN12.GSI                 Keep measurements only
    geoclean clear-up *.GSI --hold-stations     Keep station setups too
    geoclean ltop POLAR.GSL                     Prepare a polar file for LTOP
    geoclean logfile LOG.txt                    Keep informative logfile blocks
    geoclean classify STN12.GSI                 Show the label of every record

Identifiers (FS, ST, STKE) and defaults live in ~/.config/geoclean/config.toml.
Set GEOCLEAN_LOG=debug to see classification decisions."
)]
#[command(version = VERSION, styles = build_cli_styles())]
pub struct Cli {
    /// Log classification decisions (same as GEOCLEAN_LOG=debug)
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Use this config file instead of ~/.config/geoclean/config.toml
    #[arg(long = "config", global = true, value_name = "PATH")]
    pub config_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Options shared by every file-processing command.
#[derive(Args, Debug, Clone, Default)]
pub struct OutputArgs {
    /// Write cleaned files into DIR instead of next to each input
    #[arg(long, short, value_name = "DIR")]
    pub output: Option<PathBuf>,

    /// Worker threads for multi-file runs (overrides [processing].workers)
    #[arg(long, value_name = "N")]
    pub workers: Option<usize>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Clear up GSI point or station files
    #[command(
        name = "clear-up",
        long_about = "Classify every record of a GSI file and keep the selected subset.

Measurements are always kept and two-face target records are always
removed. Duplicate station records are collapsed to the first of each run.
The file dialect (point-based or station-based) is detected from the
first record.

Retention defaults come from [retention] in the config file.

EXAMPLES:
    geoclean clear-up STN12.GSI
    geoclean clear-up STN12.GSI --hold-stations --hold-control-points
    geoclean clear-up data/*.GSI --output cleaned/"
    )]
    ClearUp {
        /// GSI files to clean
        #[arg(required = true, value_name = "FILES")]
        files: Vec<PathBuf>,
        /// Keep station records
        #[arg(long)]
        hold_stations: bool,
        /// Keep control-point records
        #[arg(long)]
        hold_control_points: bool,
        #[command(flatten)]
        output: OutputArgs,
    },

    /// Prepare polar files for LTOP
    #[command(long_about = "Clean a polar measurement file for LTOP.

Station records (5 blocks) open a reference run of measurement records
(6 blocks). The control point closing the reference run and the one
closing the measurement run are removed. A station whose reference run
exceeds four records without a control point is reported as a warning.

LTOP+ files with a trailing two-face block are handled through
[ltop].two_face_word_index (default 79).

EXAMPLE:
    geoclean ltop POLAR.GSL")]
    Ltop {
        /// Polar files to clean
        #[arg(required = true, value_name = "FILES")]
        files: Vec<PathBuf>,
        #[command(flatten)]
        output: OutputArgs,
    },

    /// Clean instrument logfiles
    #[command(long_about = "Strip an instrument logfile down to informative program runs.

By default only blocks from known programs (COGO, Reference Line,
Reference Plane, Setup, Stakeout, Volume Calculations) that carry results
are kept, each with its own begin/end lines. --raw copies every well-formed
block verbatim; --full writes only the block contents without empty lines.

EXAMPLES:
    geoclean logfile LOG.txt
    geoclean logfile LOG.txt --raw
    geoclean logfile LOG.txt --full")]
    Logfile {
        /// Logfiles to clean
        #[arg(required = true, value_name = "FILES")]
        files: Vec<PathBuf>,
        /// Copy every well-formed block verbatim
        #[arg(long, conflicts_with = "full")]
        raw: bool,
        /// Keep only block contents, without empty lines
        #[arg(long)]
        full: bool,
        #[command(flatten)]
        output: OutputArgs,
    },

    /// Show the label assigned to every record of a GSI file
    #[command(long_about = "Classify a GSI file without writing anything.

Prints one line per record with its label (station, target_point,
control_point, measurement). Records removed by the duplicate-station
collapse are not listed.

EXAMPLES:
    geoclean classify STN12.GSI
    geoclean classify STN12.GSI --json")]
    Classify {
        /// GSI file to classify
        file: PathBuf,
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
        /// Classify as if stations were held
        #[arg(long)]
        hold_stations: bool,
    },

    /// Configuration management
    #[command(
        subcommand,
        long_about = "View and create the geoclean configuration file.

Config file location: ~/.config/geoclean/config.toml

EXAMPLES:
    geoclean config show
    geoclean config path
    geoclean config init"
    )]
    Config(ConfigCommands),

    /// Generate shell completions
    #[command(long_about = "Generate a shell completion script.

EXAMPLES:
    geoclean completions bash > ~/.local/share/bash-completion/completions/geoclean
    geoclean completions zsh > ~/.zfunc/_geoclean")]
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: CompletionShell,
    },
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Show current configuration as TOML
    #[command(long_about = "Display the effective configuration in TOML format.

Values missing from the config file are shown with their defaults.

EXAMPLE:
    geoclean config show")]
    Show,
    /// Print the config file path
    Path,
    /// Write a config file with default values
    #[command(long_about = "Create the config file with all default values.

Refuses to overwrite an existing file unless --force is given.

EXAMPLE:
    geoclean config init")]
    Init {
        /// Overwrite an existing config file
        #[arg(long)]
        force: bool,
    },
}
