//! Carry-over accumulator
//!
//! The carry-over for day `D` of a range starting at `S` is the signed sum of
//! `(base - spent(P))` over every day `P` in `[S, D)`. Surplus days bank a
//! credit, deficit days bank a debit, and neither is ever floored: one large
//! overspend keeps suppressing availability until later surpluses repay it.

use chrono::NaiveDate;

use crate::models::{days_before, Money};

use super::spending::SpendingIndex;

/// Carry-over into `target` for a range starting at `start`
///
/// Zero when `target <= start`.
pub fn carry_over(
    target: NaiveDate,
    start: NaiveDate,
    daily_base: Money,
    spending: &SpendingIndex,
) -> Money {
    days_before(target, start)
        .into_iter()
        .map(|day| daily_base - spending.spent_on(day))
        .sum()
}

/// Running signed balance, advanced one day at a time
///
/// Produces the same values as [`carry_over`] for consecutive days while
/// touching each day once.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CarryOverLedger {
    balance: Money,
}

impl CarryOverLedger {
    /// A ledger at the start of a range
    pub fn new() -> Self {
        Self::default()
    }

    /// Carry-over into the day about to be recorded
    pub fn balance(&self) -> Money {
        self.balance
    }

    /// Close a day, returning the carry-over it started with
    pub fn close_day(&mut self, base: Money, spent: Money) -> Money {
        let opening = self.balance;
        self.balance += base - spent;
        opening
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Expense;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, d).unwrap()
    }

    #[test]
    fn test_zero_at_start() {
        let index = SpendingIndex::from_expenses(&[Expense::new(day(1), Money::from_major(99))]);
        assert_eq!(
            carry_over(day(1), day(1), Money::from_major(50), &index),
            Money::zero()
        );
    }

    #[test]
    fn test_surplus_banks_credit() {
        let index = SpendingIndex::from_expenses(&[Expense::new(day(1), Money::from_major(45))]);
        assert_eq!(
            carry_over(day(2), day(1), Money::from_major(50), &index),
            Money::from_major(5)
        );
    }

    #[test]
    fn test_deficit_is_not_floored() {
        let index = SpendingIndex::from_expenses(&[
            Expense::new(day(1), Money::from_major(200)),
            Expense::new(day(3), Money::from_major(10)),
        ]);
        // -150, then +50, then +40
        assert_eq!(
            carry_over(day(4), day(1), Money::from_major(50), &index),
            Money::from_major(-60)
        );
    }

    #[test]
    fn test_ledger_matches_direct_sum() {
        let index = SpendingIndex::from_expenses(&[
            Expense::new(day(1), Money::from_major(12)),
            Expense::new(day(2), Money::from_major(70)),
            Expense::new(day(4), Money::from_cents(1999)),
        ]);
        let base = Money::from_major(30);
        let mut ledger = CarryOverLedger::new();

        for d in 1..=6 {
            let opening = ledger.close_day(base, index.spent_on(day(d)));
            assert_eq!(opening, carry_over(day(d), day(1), base, &index));
        }
    }
}
