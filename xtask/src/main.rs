//! xtask - Build tasks for geoclean
//!
//! Run with: cargo xtask <command>
//!
//! Commands:
//! - gen-docs: Generate documentation (man pages, COMMANDS.md)

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Command, CommandFactory, Parser, Subcommand};

use geoclean::cli::Cli;

#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "Build tasks for geoclean")]
struct Xtask {
    #[command(subcommand)]
    command: XtaskCommand,
}

#[derive(Subcommand)]
enum XtaskCommand {
    /// Generate documentation from CLI definitions
    #[command(name = "gen-docs")]
    GenDocs {
        /// Output directory (default: docs/)
        #[arg(long, short, default_value = "docs")]
        output: PathBuf,

        /// Generate man pages
        #[arg(long)]
        man: bool,

        /// Generate COMMANDS.md
        #[arg(long)]
        markdown: bool,
    },
}

fn main() -> Result<()> {
    let args = Xtask::parse();

    match args.command {
        XtaskCommand::GenDocs {
            output,
            man,
            markdown,
        } => {
            // If no specific format is specified, generate all
            let gen_all = !man && !markdown;

            if gen_all || man {
                generate_man_pages(&output)?;
            }
            if gen_all || markdown {
                generate_markdown(&output)?;
            }
        }
    }

    Ok(())
}

/// Render one man page per visible command, recursing into subcommands.
fn render_man_page(cmd: &Command, page_name: &str, man_dir: &Path) -> Result<()> {
    let man = clap_mangen::Man::new(cmd.clone());
    let mut buffer = Vec::new();
    man.render(&mut buffer)?;
    let path = man_dir.join(format!("{}.1", page_name));
    fs::write(&path, buffer).with_context(|| format!("Failed to write {}", path.display()))?;
    println!("Generated: {}", path.display());

    for subcommand in cmd.get_subcommands() {
        if subcommand.is_hide_set() {
            continue;
        }
        let nested = format!("{}-{}", page_name, subcommand.get_name());
        render_man_page(subcommand, &nested, man_dir)?;
    }
    Ok(())
}

/// Generate man pages using clap_mangen
fn generate_man_pages(output: &Path) -> Result<()> {
    let man_dir = output.join("man");
    fs::create_dir_all(&man_dir).context("Failed to create man directory")?;

    render_man_page(&Cli::command(), "geoclean", &man_dir)?;

    println!("Man pages generated in {}", man_dir.display());
    Ok(())
}

/// Append the options of a command as a markdown list.
fn push_options(markdown: &mut String, cmd: &Command) {
    for arg in cmd.get_arguments() {
        let id = arg.get_id().as_str();
        if id == "help" || id == "version" {
            continue;
        }
        let flag = if arg.is_positional() {
            format!("<{}>", id.to_uppercase())
        } else {
            match (arg.get_long(), arg.get_short()) {
                (Some(l), Some(s)) => format!("-{}, --{}", s, l),
                (Some(l), None) => format!("--{}", l),
                (None, Some(s)) => format!("-{}", s),
                _ => continue,
            }
        };
        markdown.push_str(&format!("- `{}`", flag));
        if let Some(help) = arg.get_help() {
            markdown.push_str(&format!(": {}", help));
        }
        markdown.push('\n');
    }
    markdown.push('\n');
}

fn push_command(markdown: &mut String, cmd: &Command, title: &str) {
    markdown.push_str(&format!("## {}\n\n", title));
    if let Some(about) = cmd.get_about() {
        markdown.push_str(&format!("{}\n\n", about));
    }
    push_options(markdown, cmd);
    if let Some(long_about) = cmd.get_long_about() {
        markdown.push_str("```\n");
        markdown.push_str(&format!("{}\n", long_about));
        markdown.push_str("```\n\n");
    }
    markdown.push_str("---\n\n");

    for subcommand in cmd.get_subcommands() {
        if subcommand.is_hide_set() {
            continue;
        }
        let nested = format!("{} {}", title, subcommand.get_name());
        push_command(markdown, subcommand, &nested);
    }
}

/// Generate COMMANDS.md markdown documentation
fn generate_markdown(output: &Path) -> Result<()> {
    fs::create_dir_all(output).context("Failed to create output directory")?;

    let cmd = Cli::command();
    let mut markdown = String::new();
    markdown.push_str("# geoclean Command Reference\n\n");
    markdown.push_str("This document is auto-generated from the CLI definitions.\n\n");
    push_command(&mut markdown, &cmd, "geoclean");
    markdown.push_str("\n*Generated by `cargo xtask gen-docs`*\n");

    let output_path = output.join("COMMANDS.md");
    fs::write(&output_path, markdown)?;
    println!("Generated: {}", output_path.display());

    Ok(())
}
