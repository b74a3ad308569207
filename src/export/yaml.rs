//! YAML Export functionality
//!
//! The same document as the JSON export, for reading rather than parsing.

use std::io::Write;

use crate::error::{PaceError, PaceResult};
use crate::export::json::AllocationExport;

/// Export an allocation table to YAML format
pub fn export_allocations_yaml<W: Write>(
    export: &AllocationExport,
    writer: &mut W,
) -> PaceResult<()> {
    let budget = &export.budget;
    let header = format!(
        "# budget-pace allocation export\n\
         # Generated: {}\n\
         # App Version: {}\n\
         # Period: {}..{} ({} days)\n\n",
        export.exported_at,
        export.app_version,
        budget.start_date,
        budget.end_date,
        budget.days_in_period,
    );
    writer
        .write_all(header.as_bytes())
        .map_err(|e| PaceError::Export(e.to_string()))?;

    serde_yaml::to_writer(writer, export).map_err(|e| PaceError::Export(e.to_string()))?;

    Ok(())
}
