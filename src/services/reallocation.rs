//! Mid-period reallocation
//!
//! When the monthly amount changes partway through a period, whatever is
//! left of the new amount after spending so far is spread evenly over the
//! remaining days. Only the tail of the period, from the as-of day onward,
//! is recomputed; earlier rows are left for the caller to keep or discard.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::models::{Budget, DailyAllocation, Expense, Money};

use super::allocation::AllocationEngine;

/// The outcome of a reallocation, with the figures that produced it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reallocation {
    /// The new monthly amount
    pub new_monthly_amount: Money,

    /// First day of the recomputed tail
    pub as_of: NaiveDate,

    /// Spending dated from the period start through `as_of`, inclusive
    pub spent_so_far: Money,

    /// `new_monthly_amount - spent_so_far`, may be negative
    pub remaining: Money,

    /// Days from `as_of` through the period end, clamped at zero
    pub remaining_days: i64,

    /// `remaining / remaining_days`, or zero when no days remain
    pub new_base: Money,

    /// One row per day of `[as_of, period end]`
    pub allocations: Vec<DailyAllocation>,
}

impl<'a> AllocationEngine<'a> {
    /// Recompute the tail of a budget's period for a new monthly amount
    pub fn reallocate(
        &self,
        new_monthly_amount: Money,
        as_of: NaiveDate,
        budget: &Budget,
    ) -> Reallocation {
        let period = budget.period();
        let spent_so_far = self.spending().spent_between(period.start_date(), as_of);
        let remaining = new_monthly_amount - spent_so_far;
        let remaining_days = period.remaining_days(as_of);
        let new_base = if remaining_days > 0 {
            remaining.per_day(remaining_days)
        } else {
            Money::zero()
        };

        debug!(
            %as_of,
            spent_so_far = %spent_so_far.as_decimal(),
            remaining_days,
            new_base = %new_base.as_decimal(),
            "reallocating"
        );

        let allocations = self.generate_allocations(as_of, period.end_date(), new_base);

        Reallocation {
            new_monthly_amount,
            as_of,
            spent_so_far,
            remaining,
            remaining_days,
            new_base,
            allocations,
        }
    }

    /// Reallocate and write the result into the budget
    ///
    /// Sets the new monthly amount and splices the recomputed tail onto the
    /// rows before `as_of`. A budget without a table gets one generated from
    /// its current amount first, so the head reflects the old daily base.
    /// An `as_of` before the period start is moved up to the start, so the
    /// table still covers the period exactly.
    pub fn apply_reallocation(
        &self,
        budget: &mut Budget,
        new_monthly_amount: Money,
        as_of: NaiveDate,
    ) -> Reallocation {
        let as_of = as_of.max(budget.start_date);

        if budget.daily_allocation.is_empty() {
            self.regenerate(budget);
        }

        let reallocation = self.reallocate(new_monthly_amount, as_of, budget);
        let table = splice_reallocation(&budget.daily_allocation, &reallocation.allocations);

        budget.set_monthly_amount(new_monthly_amount);
        budget.set_daily_allocation(table);

        reallocation
    }
}

/// Recompute the tail of a budget's period for a new monthly amount
pub fn reallocate(
    new_monthly_amount: Money,
    as_of: NaiveDate,
    budget: &Budget,
    expenses: &[Expense],
) -> Vec<DailyAllocation> {
    AllocationEngine::new(expenses)
        .reallocate(new_monthly_amount, as_of, budget)
        .allocations
}

/// Keep the head rows dated before the tail and append the tail
///
/// An empty tail leaves the head untouched.
pub fn splice_reallocation(
    head: &[DailyAllocation],
    tail: &[DailyAllocation],
) -> Vec<DailyAllocation> {
    let cutoff = match tail.first() {
        Some(first) => first.date,
        None => return head.to_vec(),
    };

    head.iter()
        .filter(|row| row.date < cutoff)
        .chain(tail.iter())
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::BudgetPeriod;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, d).unwrap()
    }

    fn january() -> Budget {
        Budget::for_period(
            Money::from_major(1500),
            BudgetPeriod::monthly(2025, 1).unwrap(),
        )
    }

    fn early_january_expenses() -> Vec<Expense> {
        vec![
            Expense::new(day(1), Money::from_major(45)),
            Expense::new(day(2), Money::from_major(25)),
            Expense::new(day(3), Money::from_major(120)),
            Expense::new(day(5), Money::from_major(130)),
        ]
    }

    #[test]
    fn test_reallocate_mid_month() {
        let budget = january();
        let expenses = early_january_expenses();
        let engine = AllocationEngine::new(&expenses);
        let result = engine.reallocate(Money::from_major(2000), day(6), &budget);

        assert_eq!(result.spent_so_far, Money::from_major(320));
        assert_eq!(result.remaining, Money::from_major(1680));
        assert_eq!(result.remaining_days, 26);
        let expected_base = Money::parse("64.6154").unwrap();
        assert!(result
            .new_base
            .approx_eq(expected_base, Money::parse("0.0001").unwrap()));
        assert_eq!(result.allocations.len(), 26);
        assert_eq!(result.allocations[0].date, day(6));
        assert_eq!(result.allocations[25].date, day(31));
        assert_eq!(result.allocations[0].carry_over_amount, Money::zero());
    }

    #[test]
    fn test_expense_on_as_of_day() {
        let budget = january();
        let expenses = vec![
            Expense::new(day(1), Money::from_major(45)),
            Expense::new(day(6), Money::from_major(30)),
        ];
        let engine = AllocationEngine::new(&expenses);
        let result = engine.reallocate(Money::from_major(2000), day(6), &budget);

        // the as-of day's spending is already in spent_so_far
        assert_eq!(result.spent_so_far, Money::from_major(75));
        assert_eq!(result.remaining, Money::from_major(1925));
        assert_eq!(result.remaining_days, 26);

        // and is charged again against the first row of the tail
        let first = &result.allocations[0];
        assert_eq!(first.date, day(6));
        assert_eq!(first.base_amount, result.new_base);
        assert_eq!(first.spent_amount, Money::from_major(30));
        assert_eq!(first.carry_over_amount, Money::zero());
        assert_eq!(first.remaining_amount, result.new_base - Money::from_major(30));

        // the next row carries that shortfall forward
        assert_eq!(
            result.allocations[1].carry_over_amount,
            result.new_base - Money::from_major(30)
        );
    }

    #[test]
    fn test_tail_only() {
        let budget = january();
        let expenses = early_january_expenses();
        let tail = reallocate(Money::from_major(900), day(20), &budget, &expenses);

        assert!(tail.iter().all(|row| row.date >= day(20)));
        assert_eq!(tail.first().unwrap().date, day(20));
        assert_eq!(tail.last().unwrap().date, budget.end_date);
    }

    #[test]
    fn test_overspent_budget_gets_negative_base() {
        let budget = january();
        let expenses = early_january_expenses();
        let engine = AllocationEngine::new(&expenses);
        let result = engine.reallocate(Money::from_major(200), day(6), &budget);

        assert_eq!(result.remaining, Money::from_major(-120));
        assert!(result.new_base.is_negative());
        assert!(result.allocations.iter().all(|row| row.spendable().is_zero()));
    }

    #[test]
    fn test_as_of_after_period_end() {
        let budget = january();
        let result = AllocationEngine::new(&[]).reallocate(
            Money::from_major(2000),
            NaiveDate::from_ymd_opt(2025, 2, 10).unwrap(),
            &budget,
        );

        assert_eq!(result.remaining_days, 0);
        assert_eq!(result.new_base, Money::zero());
        assert!(result.allocations.is_empty());
    }

    #[test]
    fn test_last_day_gets_everything_left() {
        let budget = january();
        let expenses = vec![Expense::new(day(10), Money::from_major(100))];
        let engine = AllocationEngine::new(&expenses);
        let result = engine.reallocate(Money::from_major(1000), day(31), &budget);

        assert_eq!(result.remaining_days, 1);
        assert_eq!(result.new_base, Money::from_major(900));
        assert_eq!(result.allocations.len(), 1);
    }

    #[test]
    fn test_apply_splices_full_table() {
        let mut budget = january();
        let expenses = early_january_expenses();
        let engine = AllocationEngine::new(&expenses);
        let old_base = budget.daily_base();

        let result = engine.apply_reallocation(&mut budget, Money::from_major(2000), day(6));

        assert!(budget.is_fully_allocated());
        assert_eq!(budget.monthly_amount, Money::from_major(2000));
        assert_eq!(budget.daily_allocation[0].base_amount, old_base);
        assert_eq!(budget.daily_allocation[4].base_amount, old_base);
        assert_eq!(budget.daily_allocation[5].base_amount, result.new_base);
        assert_eq!(budget.daily_allocation[5].carry_over_amount, Money::zero());
    }

    #[test]
    fn test_apply_before_period_start_stays_in_period() {
        let mut budget = january();
        let engine = AllocationEngine::new(&[]);
        let before_start = NaiveDate::from_ymd_opt(2024, 12, 28).unwrap();

        let result = engine.apply_reallocation(&mut budget, Money::from_major(2000), before_start);

        assert_eq!(result.as_of, day(1));
        assert_eq!(result.remaining_days, 31);
        assert!(budget.is_fully_allocated());
        assert_eq!(budget.daily_allocation.len(), 31);
        assert_eq!(budget.daily_allocation[0].date, day(1));

        let total: Money = budget.daily_allocation.iter().map(|row| row.base_amount).sum();
        assert!(total.approx_eq(Money::from_major(2000), Money::parse("0.01").unwrap()));
    }

    #[test]
    fn test_splice_with_empty_tail_keeps_head() {
        let budget = january();
        let head = AllocationEngine::new(&[]).generate_for_budget(&budget);
        assert_eq!(splice_reallocation(&head, &[]), head);
    }
}
