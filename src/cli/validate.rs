//! Validation CLI command

use std::io::Write;

use clap::Args;

use super::SnapshotArgs;
use crate::config::Settings;
use crate::display::format_validation_report;
use crate::error::{PaceError, PaceResult};
use crate::export::{export_issues_csv, write_json, OutputFormat};
use crate::services::{validate_records, ValidationReport};

/// Arguments for `pace validate`
#[derive(Args, Debug)]
pub struct ValidateArgs {
    #[command(flatten)]
    pub snapshot: SnapshotArgs,

    /// Output format (defaults to the configured one)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,
}

/// Handle `pace validate`
///
/// Prints the whole report and returns it; the caller decides the exit
/// status. Malformed dates are reported, not raised.
pub fn handle_validate_command<W: Write>(
    settings: &Settings,
    args: ValidateArgs,
    out: &mut W,
) -> PaceResult<ValidationReport> {
    let records = args.snapshot.load_records()?;
    let report = validate_records(&records.budget, &records.expenses);

    match settings.output_format(args.format) {
        OutputFormat::Table => writeln!(out, "{}", format_validation_report(&report).trim_end())?,
        OutputFormat::Json => write_json(&report, out, true)?,
        OutputFormat::Yaml => serde_yaml::to_writer(&mut *out, &report)
            .map_err(|e| PaceError::Export(e.to_string()))?,
        OutputFormat::Csv => export_issues_csv(&report.errors, &mut *out)?,
    }

    Ok(report)
}
