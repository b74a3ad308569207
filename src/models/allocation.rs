//! Daily allocation value object
//!
//! One row of the allocation table. Allocations are derived values: they are
//! recomputed wholesale from the expense snapshot, never patched in place.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::money::Money;

/// How much could be spent on one day, and what happened to it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyAllocation {
    /// The calendar day
    pub date: NaiveDate,

    /// Daily base in effect when this row was generated
    pub base_amount: Money,

    /// Signed net of `(base - spent)` over all earlier days of the range
    pub carry_over_amount: Money,

    /// `base_amount + carry_over_amount`
    pub available_amount: Money,

    /// Sum of this day's expenses
    pub spent_amount: Money,

    /// `available_amount - spent_amount`, may be negative
    pub remaining_amount: Money,
}

impl DailyAllocation {
    /// Build a row from its independent inputs
    pub fn new(
        date: NaiveDate,
        base_amount: Money,
        carry_over_amount: Money,
        spent_amount: Money,
    ) -> Self {
        let available_amount = base_amount + carry_over_amount;
        Self {
            date,
            base_amount,
            carry_over_amount,
            available_amount,
            spent_amount,
            remaining_amount: available_amount - spent_amount,
        }
    }

    /// What is left to spend today, floored at zero
    ///
    /// Display only. Debt stays visible in `remaining_amount` and
    /// `carry_over_amount`.
    pub fn spendable(&self) -> Money {
        self.remaining_amount.floor_at_zero()
    }

    /// Check if this day ended below zero
    pub fn is_overspent(&self) -> bool {
        self.remaining_amount.is_negative()
    }

    /// The net this day contributes to the next day's carry-over
    pub fn net(&self) -> Money {
        self.base_amount - self.spent_amount
    }
}

impl fmt::Display for DailyAllocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: available {} (base {}, carry-over {}), spent {}, remaining {}",
            self.date,
            self.available_amount,
            self.base_amount,
            self.carry_over_amount,
            self.spent_amount,
            self.remaining_amount
        )
    }
}

/// Totals over an allocation table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AllocationSummary {
    /// Number of days in the table
    pub days: usize,

    /// Sum of every row's base
    pub total_base: Money,

    /// Sum of every row's spending
    pub total_spent: Money,

    /// Remaining amount of the last row (zero for an empty table)
    pub closing_balance: Money,

    /// Days that ended below zero
    pub overspent_days: usize,
}

impl AllocationSummary {
    /// Summarize a table
    pub fn from_allocations(allocations: &[DailyAllocation]) -> Self {
        Self {
            days: allocations.len(),
            total_base: allocations.iter().map(|a| a.base_amount).sum(),
            total_spent: allocations.iter().map(|a| a.spent_amount).sum(),
            closing_balance: allocations
                .last()
                .map(|a| a.remaining_amount)
                .unwrap_or_default(),
            overspent_days: allocations.iter().filter(|a| a.is_overspent()).count(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, d).unwrap()
    }

    #[test]
    fn test_derived_fields() {
        let row = DailyAllocation::new(
            day(2),
            Money::from_major(50),
            Money::from_major(5),
            Money::from_major(20),
        );
        assert_eq!(row.available_amount, Money::from_major(55));
        assert_eq!(row.remaining_amount, Money::from_major(35));
        assert_eq!(row.net(), Money::from_major(30));
        assert!(!row.is_overspent());
    }

    #[test]
    fn test_spendable_floors_but_ledger_does_not() {
        let row = DailyAllocation::new(
            day(3),
            Money::from_major(50),
            Money::from_major(-80),
            Money::from_major(10),
        );
        assert_eq!(row.available_amount, Money::from_major(-30));
        assert_eq!(row.remaining_amount, Money::from_major(-40));
        assert_eq!(row.spendable(), Money::zero());
        assert!(row.is_overspent());
    }

    #[test]
    fn test_summary() {
        let rows = vec![
            DailyAllocation::new(
                day(1),
                Money::from_major(10),
                Money::zero(),
                Money::from_major(15),
            ),
            DailyAllocation::new(
                day(2),
                Money::from_major(10),
                Money::from_major(-5),
                Money::zero(),
            ),
        ];
        let summary = AllocationSummary::from_allocations(&rows);
        assert_eq!(summary.days, 2);
        assert_eq!(summary.total_base, Money::from_major(20));
        assert_eq!(summary.total_spent, Money::from_major(15));
        assert_eq!(summary.closing_balance, Money::from_major(5));
        assert_eq!(summary.overspent_days, 1);

        let empty = AllocationSummary::from_allocations(&[]);
        assert_eq!(empty.closing_balance, Money::zero());
    }
}
