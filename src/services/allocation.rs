//! Allocation engine
//!
//! Turns a budget and an expense snapshot into the per-day allocation table.
//! The engine borrows its snapshot for its whole lifetime, so the expenses
//! cannot change underneath a computation, and it keeps no state besides the
//! day-keyed spending index built once in [`AllocationEngine::new`].
//! Every method is a pure function of that snapshot and its arguments:
//! calling one twice yields the same table.

use chrono::NaiveDate;
use tracing::debug;

use crate::models::{Budget, DailyAllocation, DayRange, Expense, Money};

use super::carryover::{carry_over, CarryOverLedger};
use super::spending::SpendingIndex;

/// Allocation strategy over one immutable expense snapshot
#[derive(Debug, Clone)]
pub struct AllocationEngine<'a> {
    expenses: &'a [Expense],
    spending: SpendingIndex,
}

impl<'a> AllocationEngine<'a> {
    /// Create an engine over an expense snapshot
    pub fn new(expenses: &'a [Expense]) -> Self {
        Self {
            expenses,
            spending: SpendingIndex::from_expenses(expenses),
        }
    }

    /// The snapshot this engine reads
    pub fn expenses(&self) -> &'a [Expense] {
        self.expenses
    }

    /// The day-keyed spending totals of the snapshot
    pub fn spending(&self) -> &SpendingIndex {
        &self.spending
    }

    /// Monthly amount divided over every day of the budget's period
    pub fn daily_base(&self, budget: &Budget) -> Money {
        budget.daily_base()
    }

    /// Signed carry-over into `date` from the start of the budget's period
    pub fn carry_over(&self, budget: &Budget, date: NaiveDate) -> Money {
        carry_over(
            date,
            budget.start_date,
            budget.daily_base(),
            &self.spending,
        )
    }

    /// The allocation row for a single day of the budget's period
    ///
    /// Uses the same formula as the full table: `available = base +
    /// carry-over`. Returns `None` for days outside the period.
    pub fn allocation_for(&self, budget: &Budget, date: NaiveDate) -> Option<DailyAllocation> {
        if !budget.period().contains(date) {
            return None;
        }
        Some(DailyAllocation::new(
            date,
            budget.daily_base(),
            self.carry_over(budget, date),
            self.spending.spent_on(date),
        ))
    }

    /// What can still be spent on `date`, floored at zero for display
    pub fn spendable_on(&self, budget: &Budget, date: NaiveDate) -> Money {
        self.allocation_for(budget, date)
            .map(|a| a.spendable())
            .unwrap_or_default()
    }

    /// One row per day of `[start, end]` with a fixed daily base
    ///
    /// Carry-over starts at zero on `start`. Expenses outside the range are
    /// ignored. An inverted range yields an empty table.
    pub fn generate_allocations(
        &self,
        start: NaiveDate,
        end: NaiveDate,
        daily_base: Money,
    ) -> Vec<DailyAllocation> {
        let mut ledger = CarryOverLedger::new();
        let allocations: Vec<DailyAllocation> = DayRange::new(start, end)
            .map(|date| {
                let spent = self.spending.spent_on(date);
                let carry = ledger.close_day(daily_base, spent);
                DailyAllocation::new(date, daily_base, carry, spent)
            })
            .collect();

        debug!(
            %start,
            %end,
            base = %daily_base.as_decimal(),
            days = allocations.len(),
            "generated allocations"
        );

        allocations
    }

    /// The full-period table for a budget
    pub fn generate_for_budget(&self, budget: &Budget) -> Vec<DailyAllocation> {
        self.generate_allocations(budget.start_date, budget.end_date, budget.daily_base())
    }

    /// Replace the budget's cached table with a freshly generated one
    pub fn regenerate(&self, budget: &mut Budget) {
        budget.set_daily_allocation(self.generate_for_budget(budget));
    }
}

/// Generate the allocation table for `[start, end]` from an expense snapshot
pub fn generate_allocations(
    start: NaiveDate,
    end: NaiveDate,
    daily_base: Money,
    expenses: &[Expense],
) -> Vec<DailyAllocation> {
    AllocationEngine::new(expenses).generate_allocations(start, end, daily_base)
}
