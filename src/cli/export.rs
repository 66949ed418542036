//! Export command implementation

use anyhow::{Context, Result};
use chrono::Local;
use clap::Args;
use std::fs;
use std::path::PathBuf;

use super::utils::{default_output_path, delete_file};
use crate::config::{load_config, merge_cli_with_config, CliOverrides};
use crate::load::read_csv_file;
use crate::pipeline::{build_report, validate_config};
use crate::render::write_summary;

#[derive(Args)]
pub struct ExportArgs {
    /// Path to the Trello CSV export file
    #[arg(value_name = "CSV_FILE")]
    pub csv_file: PathBuf,

    /// Output markdown file (default: trello_export_TIMESTAMP.md)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Name of the list to filter by (default: "Project List")
    #[arg(short, long, value_name = "NAME")]
    pub list_name: Option<String>,

    /// Label to filter by (default: "Reportable (black_dark)")
    #[arg(long, value_name = "LABEL")]
    pub label: Option<String>,

    /// Include archived cards
    #[arg(long)]
    pub include_archived: bool,

    /// Keep the input CSV file after processing
    #[arg(long)]
    pub keep_csv: bool,

    /// Path to config file (trello-report.toml or .trello-report.yml)
    #[arg(short = 'c', long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Omit the generation timestamp for reproducible output
    #[arg(long)]
    pub no_timestamp: bool,

    /// Also write a JSON run summary to this file
    #[arg(long, value_name = "FILE")]
    pub summary: Option<PathBuf>,
}

pub fn run(args: ExportArgs) -> Result<()> {
    let cwd = std::env::current_dir().context("Failed to resolve current directory")?;
    let config = load_config(&cwd, args.config.as_deref())?;

    let overrides = CliOverrides {
        list_name: args.list_name.clone(),
        label: args.label.clone(),
        include_archived: args.include_archived,
        no_timestamp: args.no_timestamp,
        keep_csv: args.keep_csv,
    };
    let (mut report_config, settings) = merge_cli_with_config(config, overrides);
    validate_config(&report_config).context("Invalid report configuration")?;

    let now = Local::now();
    if settings.include_timestamp {
        report_config.render.generated_at = Some(now.format("%Y-%m-%d %H:%M:%S").to_string());
    }

    let loaded = read_csv_file(&args.csv_file)?;
    for err in &loaded.rejected {
        eprintln!("Skipped CSV row: {}", err);
    }

    let outcome = build_report(&loaded.records, &report_config)
        .context("Invalid report configuration")?;

    let rendered = outcome.rendered();
    if rendered == 0 {
        println!("No cards found matching the criteria.");
    } else {
        println!("Found {} cards matching the criteria.", rendered);
    }
    for skipped in &outcome.skipped {
        eprintln!("Skipped card {}: {}", skipped.id, skipped.reason);
    }

    let output = args.output.clone().unwrap_or_else(|| default_output_path(&now));
    if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }
    fs::write(&output, &outcome.document)
        .with_context(|| format!("Failed to write report: {}", output.display()))?;
    println!("Markdown saved to: {}", output.display());

    if let Some(summary_path) = &args.summary {
        let generated_at = settings.include_timestamp.then(|| now.to_rfc3339());
        write_summary(summary_path, &outcome, &report_config, generated_at)
            .with_context(|| format!("Failed to write summary: {}", summary_path.display()))?;
        println!("Summary saved to: {}", summary_path.display());
    }

    if rendered == 0 {
        return Ok(());
    }
    println!("Successfully exported {} cards to {}", rendered, output.display());

    if !settings.keep_csv {
        if delete_file(&args.csv_file) {
            println!("Deleted input file: {}", args.csv_file.display());
        } else {
            println!("Note: Input file {} was not deleted", args.csv_file.display());
        }
    }

    Ok(())
}
