//! Allocation CLI commands
//!
//! `table`, `day` and `reallocate`: everything that prints allocation rows.

use std::io::Write;

use chrono::NaiveDate;
use clap::Args;

use super::SnapshotArgs;
use crate::config::Settings;
use crate::display::{
    format_allocation_table, format_day_detail, format_reallocation_header, format_summary,
    DisplayOptions,
};
use crate::error::{PaceError, PaceResult};
use crate::export::{
    export_allocations_csv, export_allocations_json, export_allocations_yaml, write_json,
    AllocationExport, OutputFormat,
};
use crate::models::{parse_day, AllocationSummary, Money};
use crate::services::AllocationEngine;

/// Arguments for `pace table`
#[derive(Args, Debug)]
pub struct TableArgs {
    #[command(flatten)]
    pub snapshot: SnapshotArgs,

    /// Output format (defaults to the configured one)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,
}

/// Arguments for `pace day`
#[derive(Args, Debug)]
pub struct DayArgs {
    /// The day to show (YYYY-MM-DD or RFC 3339)
    #[arg(value_parser = parse_day)]
    pub date: NaiveDate,

    #[command(flatten)]
    pub snapshot: SnapshotArgs,

    /// Output format (defaults to the configured one)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,
}

/// Arguments for `pace reallocate`
#[derive(Args, Debug)]
pub struct ReallocateArgs {
    /// The new monthly amount (e.g. "2000" or "1,999.50")
    pub amount: Money,

    /// First day the new amount applies to
    #[arg(long, value_parser = parse_day)]
    pub as_of: NaiveDate,

    #[command(flatten)]
    pub snapshot: SnapshotArgs,

    /// Print the full period, keeping the original rows before --as-of
    #[arg(long)]
    pub splice: bool,

    /// Output format (defaults to the configured one)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,
}

/// Handle `pace table`
pub fn handle_table_command<W: Write>(
    settings: &Settings,
    args: TableArgs,
    out: &mut W,
) -> PaceResult<()> {
    let snapshot = args.snapshot.load()?;
    let engine = AllocationEngine::new(&snapshot.expenses);
    let table = engine.generate_for_budget(&snapshot.budget);

    match settings.output_format(args.format) {
        OutputFormat::Table => {
            let options = DisplayOptions::from_settings(settings);
            let summary = AllocationSummary::from_allocations(&table);
            writeln!(out, "{}", format_allocation_table(&table, &options))?;
            writeln!(out)?;
            write!(out, "{}", format_summary(&snapshot.budget, &summary, &options))?;
        }
        format => export_table(format, AllocationExport::new(&snapshot.budget, table), out)?,
    }

    Ok(())
}

/// Handle `pace day`
pub fn handle_day_command<W: Write>(
    settings: &Settings,
    args: DayArgs,
    out: &mut W,
) -> PaceResult<()> {
    let snapshot = args.snapshot.load()?;
    let engine = AllocationEngine::new(&snapshot.expenses);

    let row = engine
        .allocation_for(&snapshot.budget, args.date)
        .ok_or_else(|| {
            PaceError::Validation(format!(
                "{} is outside the budget period {}",
                args.date,
                snapshot.budget.period()
            ))
        })?;

    match settings.output_format(args.format) {
        OutputFormat::Table => {
            let options = DisplayOptions::from_settings(settings);
            write!(out, "{}", format_day_detail(&row, &options))?;
        }
        OutputFormat::Json => write_json(&row, out, true)?,
        OutputFormat::Yaml => {
            serde_yaml::to_writer(&mut *out, &row)
                .map_err(|e| PaceError::Export(e.to_string()))?
        }
        OutputFormat::Csv => export_allocations_csv(&[row], &mut *out)?,
    }

    Ok(())
}

/// Handle `pace reallocate`
pub fn handle_reallocate_command<W: Write>(
    settings: &Settings,
    args: ReallocateArgs,
    out: &mut W,
) -> PaceResult<()> {
    if !args.amount.is_positive() {
        return Err(PaceError::Validation(format!(
            "New monthly amount must be greater than zero, got {}",
            args.amount
        )));
    }

    let snapshot = args.snapshot.load()?;
    let engine = AllocationEngine::new(&snapshot.expenses);

    let (result, table) = if args.splice {
        let mut budget = snapshot.budget.clone();
        let result = engine.apply_reallocation(&mut budget, args.amount, args.as_of);
        (result, budget.daily_allocation)
    } else {
        let result = engine.reallocate(args.amount, args.as_of, &snapshot.budget);
        let tail = result.allocations.clone();
        (result, tail)
    };

    match settings.output_format(args.format) {
        OutputFormat::Table => {
            let options = DisplayOptions::from_settings(settings);
            write!(out, "{}", format_reallocation_header(&result, &options))?;
            if !table.is_empty() {
                writeln!(out)?;
                writeln!(out, "{}", format_allocation_table(&table, &options))?;
            }
        }
        format => {
            let export = AllocationExport::for_reallocation(&snapshot.budget, &result, table);
            export_table(format, export, out)?;
        }
    }

    Ok(())
}

/// Write a table in one of the machine-readable formats
///
/// `Table` is rendered by the callers; it falls back to CSV here.
fn export_table<W: Write>(
    format: OutputFormat,
    export: AllocationExport,
    out: &mut W,
) -> PaceResult<()> {
    match format {
        OutputFormat::Json => export_allocations_json(&export, out, true),
        OutputFormat::Yaml => export_allocations_yaml(&export, out),
        OutputFormat::Csv | OutputFormat::Table => {
            export_allocations_csv(&export.allocations, &mut *out)
        }
    }
}
