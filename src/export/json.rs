//! JSON Export functionality
//!
//! Exports an allocation table, with the figures that produced it, to JSON
//! with schema versioning.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::io::Write;

use crate::error::{PaceError, PaceResult};
use crate::models::{AllocationSummary, Budget, DailyAllocation, Money};
use crate::services::Reallocation;

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// The budget an exported table was generated for
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetFigures {
    pub monthly_amount: Money,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub days_in_period: i64,
    pub daily_base: Money,
}

impl From<&Budget> for BudgetFigures {
    fn from(budget: &Budget) -> Self {
        Self {
            monthly_amount: budget.monthly_amount,
            start_date: budget.start_date,
            end_date: budget.end_date,
            days_in_period: budget.period().days_in_period(),
            daily_base: budget.daily_base(),
        }
    }
}

/// The inputs and intermediate values of a reallocation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReallocationFigures {
    pub new_monthly_amount: Money,
    pub as_of: NaiveDate,
    pub spent_so_far: Money,
    pub remaining: Money,
    pub remaining_days: i64,
    pub new_base: Money,
}

impl From<&Reallocation> for ReallocationFigures {
    fn from(r: &Reallocation) -> Self {
        Self {
            new_monthly_amount: r.new_monthly_amount,
            as_of: r.as_of,
            spent_so_far: r.spent_so_far,
            remaining: r.remaining,
            remaining_days: r.remaining_days,
            new_base: r.new_base,
        }
    }
}

/// Exported allocation table
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AllocationExport {
    /// Schema version for compatibility checking
    pub schema_version: String,

    /// Export timestamp
    pub exported_at: DateTime<Utc>,

    /// Application version that created the export
    pub app_version: String,

    pub budget: BudgetFigures,

    /// Present when the table is a reallocation
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reallocation: Option<ReallocationFigures>,

    pub allocations: Vec<DailyAllocation>,

    pub summary: AllocationSummary,
}

impl AllocationExport {
    /// Wrap a table generated for `budget`
    pub fn new(budget: &Budget, allocations: Vec<DailyAllocation>) -> Self {
        Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            budget: BudgetFigures::from(budget),
            reallocation: None,
            summary: AllocationSummary::from_allocations(&allocations),
            allocations,
        }
    }

    /// Wrap a reallocation, with `allocations` as the table to show
    ///
    /// `allocations` is the tail alone or the spliced full table.
    pub fn for_reallocation(
        budget: &Budget,
        reallocation: &Reallocation,
        allocations: Vec<DailyAllocation>,
    ) -> Self {
        Self {
            reallocation: Some(ReallocationFigures::from(reallocation)),
            ..Self::new(budget, allocations)
        }
    }
}

/// Serialize any value as JSON
pub fn write_json<T, W>(value: &T, writer: &mut W, pretty: bool) -> PaceResult<()>
where
    T: Serialize,
    W: Write,
{
    if pretty {
        serde_json::to_writer_pretty(&mut *writer, value)
    } else {
        serde_json::to_writer(&mut *writer, value)
    }
    .map_err(|e| PaceError::Export(e.to_string()))?;

    writeln!(writer).map_err(|e| PaceError::Export(e.to_string()))
}

/// Export an allocation table to JSON
pub fn export_allocations_json<W: Write>(
    export: &AllocationExport,
    writer: &mut W,
    pretty: bool,
) -> PaceResult<()> {
    write_json(export, writer, pretty)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::BudgetPeriod;
    use crate::services::AllocationEngine;

    fn january() -> Budget {
        Budget::for_period(
            Money::from_major(1500),
            BudgetPeriod::monthly(2025, 1).unwrap(),
        )
    }

    #[test]
    fn test_json_export() {
        let budget = january();
        let table = AllocationEngine::new(&[]).generate_for_budget(&budget);
        let export = AllocationExport::new(&budget, table);

        let mut output = Vec::new();
        export_allocations_json(&export, &mut output, true).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&output).unwrap();
        assert_eq!(value["schema_version"], EXPORT_SCHEMA_VERSION);
        assert_eq!(value["budget"]["days_in_period"], 31);
        assert_eq!(value["allocations"].as_array().unwrap().len(), 31);
        assert_eq!(value["allocations"][0]["date"], "2025-01-01");
        assert_eq!(value["summary"]["overspent_days"], 0);
        assert!(value.get("reallocation").is_none());
    }

    #[test]
    fn test_reallocation_export_carries_figures() {
        let budget = january();
        let engine = AllocationEngine::new(&[]);
        let day = NaiveDate::from_ymd_opt(2025, 1, 22).unwrap();
        let result = engine.reallocate(Money::from_major(1000), day, &budget);
        let export =
            AllocationExport::for_reallocation(&budget, &result, result.allocations.clone());

        let json = serde_json::to_string(&export).unwrap();
        let parsed: AllocationExport = serde_json::from_str(&json).unwrap();
        let figures = parsed.reallocation.unwrap();
        assert_eq!(figures.as_of, day);
        assert_eq!(figures.remaining_days, 10);
        assert_eq!(figures.new_base, Money::from_major(100));
        assert_eq!(parsed.summary.days, 10);
    }
}
