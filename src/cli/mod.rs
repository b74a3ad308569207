//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod allocation;
pub mod period;
pub mod validate;

use std::path::PathBuf;

use clap::Args;
use tracing::info;

use crate::error::{PaceError, PaceResult};
use crate::services::validate;
use crate::storage::{Snapshot, SnapshotRecords, STDIN_PATH};

pub use allocation::{
    handle_day_command, handle_reallocate_command, handle_table_command, DayArgs,
    ReallocateArgs, TableArgs,
};
pub use period::{handle_period_command, PeriodArgs};
pub use validate::{handle_validate_command, ValidateArgs};

/// Where to read the budget and its expenses from
#[derive(Args, Debug, Clone)]
pub struct SnapshotArgs {
    /// Budget JSON file (`-` for stdin)
    #[arg(short, long, env = "PACE_BUDGET")]
    pub budget: PathBuf,

    /// Expenses JSON file (`-` for stdin)
    #[arg(short, long, env = "PACE_EXPENSES")]
    pub expenses: PathBuf,
}

impl SnapshotArgs {
    /// Read the raw records
    pub fn load_records(&self) -> PaceResult<SnapshotRecords> {
        if self.budget == PathBuf::from(STDIN_PATH) && self.expenses == PathBuf::from(STDIN_PATH) {
            return Err(PaceError::Config(
                "Only one of --budget and --expenses can read standard input".into(),
            ));
        }
        SnapshotRecords::load(&self.budget, &self.expenses)
    }

    /// Read and parse the snapshot
    ///
    /// Problems with the data are logged but do not stop the command; the
    /// engine ignores expenses outside the period.
    pub fn load(&self) -> PaceResult<Snapshot> {
        let snapshot = self.load_records()?.parse()?;

        let report = validate(&snapshot.budget, &snapshot.expenses);
        if !report.is_valid {
            for issue in &report.errors {
                info!(field = %issue.field, code = %issue.code, "{}", issue.message);
            }
        }

        Ok(snapshot)
    }
}
