//! geoclean - CLI entry point

mod commands;

use anyhow::Result;
use clap::Parser;

use geoclean::cli::{Cli, Commands, ConfigCommands};

/// Environment variable holding the log filter (env-filter syntax).
const LOG_ENV: &str = "GEOCLEAN_LOG";

/// Install the stderr log subscriber.
///
/// `GEOCLEAN_LOG` wins over `--verbose`; without either only warnings are shown.
fn setup_logging(verbose: bool) {
    use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(format!("geoclean={}", default_level)));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_level(true)
                .without_time()
                .with_ansi(std::env::var_os("NO_COLOR").is_none())
                .with_writer(std::io::stderr),
        )
        .init();
}

#[cfg(not(tarpaulin_include))]
fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.verbose);
    let config_file = cli.config_file.as_deref();

    match cli.command {
        Commands::ClearUp {
            files,
            hold_stations,
            hold_control_points,
            output,
        } => commands::clear_up::handle(
            &files,
            hold_stations,
            hold_control_points,
            &output,
            config_file,
        ),
        Commands::Ltop { files, output } => commands::ltop::handle(&files, &output, config_file),
        Commands::Logfile {
            files,
            raw,
            full,
            output,
        } => commands::logfile::handle(&files, raw, full, &output, config_file),
        Commands::Classify {
            file,
            json,
            hold_stations,
        } => commands::classify::handle(&file, json, hold_stations, config_file),
        Commands::Config(cmd) => match cmd {
            ConfigCommands::Show => commands::config::handle_show(config_file),
            ConfigCommands::Path => commands::config::handle_path(config_file),
            ConfigCommands::Init { force } => commands::config::handle_init(force, config_file),
        },
        Commands::Completions { shell } => commands::completions::handle::<Cli>(shell),
    }
}
