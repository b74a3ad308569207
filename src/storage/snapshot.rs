//! Budget and expense snapshots
//!
//! The data boundary. Records arrive as JSON with dates as strings, exactly
//! as the persistence layer keeps them; they are converted once into typed
//! models here, and the engine never sees a string date.

use std::path::Path;

use tracing::info;

use crate::error::{InvalidDateError, PaceResult};
use crate::models::{Budget, BudgetRecord, Expense, ExpenseRecord};

use super::file_io::read_json_required;

/// Raw records read from disk, not yet parsed
#[derive(Debug, Clone)]
pub struct SnapshotRecords {
    pub budget: BudgetRecord,
    pub expenses: Vec<ExpenseRecord>,
}

impl SnapshotRecords {
    /// Read a budget file and an expense file (either may be `-` for stdin)
    pub fn load(budget_path: &Path, expenses_path: &Path) -> PaceResult<Self> {
        let budget: BudgetRecord = read_json_required(budget_path)?;
        let expenses: Vec<ExpenseRecord> = read_json_required(expenses_path)?;

        info!(
            budget = %budget_path.display(),
            expenses = expenses.len(),
            "loaded snapshot records"
        );

        Ok(Self { budget, expenses })
    }

    /// Convert every record, failing on the first malformed date
    pub fn parse(self) -> Result<Snapshot, InvalidDateError> {
        let budget = self.budget.into_budget()?;
        let expenses = self
            .expenses
            .into_iter()
            .map(ExpenseRecord::into_expense)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Snapshot { budget, expenses })
    }
}

/// A typed, read-only view of one budget and its expenses
#[derive(Debug, Clone)]
pub struct Snapshot {
    pub budget: Budget,
    pub expenses: Vec<Expense>,
}

impl Snapshot {
    /// Read and parse a budget file and an expense file
    pub fn load(budget_path: &Path, expenses_path: &Path) -> PaceResult<Self> {
        Ok(SnapshotRecords::load(budget_path, expenses_path)?.parse()?)
    }
}
