//! Classify command handler

use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

use geoclean::clearup::{self, Dialect, LineLabel};
use geoclean::gsi::block::CODE;
use geoclean::files;
use geoclean::theme::current_theme;

use super::load_config;

#[derive(Serialize)]
struct LabeledRecord<'a> {
    label: LineLabel,
    point_number: Option<String>,
    code: Option<&'a str>,
    record: &'a str,
}

#[derive(Serialize)]
struct ClassifyOutput<'a> {
    dialect: Dialect,
    wide: bool,
    collapsed_stations: usize,
    records: Vec<LabeledRecord<'a>>,
}

/// Print the label of every record of a GSI file.
#[cfg(not(tarpaulin_include))]
pub fn handle(
    file: &Path,
    json: bool,
    hold_stations: bool,
    config_file: Option<&Path>,
) -> Result<()> {
    let config = load_config(config_file)?;
    let text = files::read_lines(file)?;
    let mut retention = config.retention;
    retention.hold_stations |= hold_stations;
    let classification = clearup::classify(&text.lines, &config.identifiers, retention);

    let output = ClassifyOutput {
        dialect: classification.dialect,
        wide: classification.labeled.first().is_some_and(|(line, _)| line.is_wide()),
        collapsed_stations: classification.collapsed_stations,
        records: classification
            .labeled
            .iter()
            .map(|(line, label)| LabeledRecord {
                label: *label,
                point_number: line.point_number(),
                code: line.block(CODE).map(|block| block.value()),
                record: line.text(),
            })
            .collect(),
    };

    if json {
        let rendered =
            serde_json::to_string_pretty(&output).context("Failed to serialize classification")?;
        println!("{}", rendered);
        return Ok(());
    }

    let theme = current_theme();
    println!(
        "{}",
        theme.accent_text(&format!(
            "{} ({:?}, {})",
            file.display(),
            output.dialect,
            if output.wide { "GSI-16" } else { "GSI-8" }
        ))
    );
    for record in &output.records {
        println!(
            "{:<14} {:<10} {:<8} {}",
            record.label.as_str(),
            record.point_number.as_deref().unwrap_or("-"),
            record.code.unwrap_or("-"),
            theme.secondary_text(record.record)
        );
    }
    Ok(())
}
