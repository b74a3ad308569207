//! CSV Export functionality
//!
//! Exports allocation rows to CSV, one line per day, amounts rounded to
//! cents.

use std::io::Write;

use crate::error::{PaceError, PaceResult};
use crate::models::{DailyAllocation, Money};
use crate::services::ValidationIssue;

const HEADER: [&str; 8] = [
    "Date",
    "Base",
    "Carry Over",
    "Available",
    "Spent",
    "Remaining",
    "Spendable",
    "Overspent",
];

fn cents(amount: Money) -> String {
    format!("{:.2}", amount.round_to(2).as_decimal())
}

/// Export allocation rows to CSV
pub fn export_allocations_csv<W: Write>(
    allocations: &[DailyAllocation],
    writer: W,
) -> PaceResult<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer
        .write_record(HEADER)
        .map_err(|e| PaceError::Export(e.to_string()))?;

    for row in allocations {
        csv_writer
            .write_record([
                row.date.to_string(),
                cents(row.base_amount),
                cents(row.carry_over_amount),
                cents(row.available_amount),
                cents(row.spent_amount),
                cents(row.remaining_amount),
                cents(row.spendable()),
                row.is_overspent().to_string(),
            ])
            .map_err(|e| PaceError::Export(e.to_string()))?;
    }

    csv_writer
        .flush()
        .map_err(|e| PaceError::Export(e.to_string()))?;

    Ok(())
}

/// Export validation problems to CSV
pub fn export_issues_csv<W: Write>(issues: &[ValidationIssue], writer: W) -> PaceResult<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer
        .write_record(["Field", "Code", "Message"])
        .map_err(|e| PaceError::Export(e.to_string()))?;

    for issue in issues {
        let code = issue.code.to_string();
        csv_writer
            .write_record([issue.field.as_str(), code.as_str(), issue.message.as_str()])
            .map_err(|e| PaceError::Export(e.to_string()))?;
    }

    csv_writer
        .flush()
        .map_err(|e| PaceError::Export(e.to_string()))?;

    Ok(())
}
