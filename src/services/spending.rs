//! Per-day spending index
//!
//! Groups an expense snapshot by day key in a single pass so the allocation
//! engine can ask "how much was spent on day P" without rescanning the
//! snapshot for every day of the period.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::models::{Expense, Money};

/// Expense totals keyed by calendar day
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SpendingIndex {
    by_day: BTreeMap<NaiveDate, Money>,
}

impl SpendingIndex {
    /// Build the index from an expense snapshot
    pub fn from_expenses(expenses: &[Expense]) -> Self {
        let mut by_day = BTreeMap::new();
        for expense in expenses {
            *by_day.entry(expense.date).or_insert_with(Money::zero) += expense.amount;
        }
        Self { by_day }
    }

    /// Total spent on `date`
    pub fn spent_on(&self, date: NaiveDate) -> Money {
        self.by_day.get(&date).copied().unwrap_or_default()
    }

    /// Total spent over the inclusive range `[start, end]`
    pub fn spent_between(&self, start: NaiveDate, end: NaiveDate) -> Money {
        if start > end {
            return Money::zero();
        }
        self.by_day.range(start..=end).map(|(_, amount)| *amount).sum()
    }

    /// Days with at least one expense, ascending
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.by_day.keys().copied()
    }

    /// Check if the snapshot had no expenses
    pub fn is_empty(&self) -> bool {
        self.by_day.is_empty()
    }
}
