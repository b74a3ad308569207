//! Budget model
//!
//! A budget spreads a monthly amount across an inclusive period of days.
//! Its `daily_allocation` table is a cache of the allocation engine's output
//! and is replaced wholesale, never edited row by row.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::allocation::DailyAllocation;
use super::ids::BudgetId;
use super::money::Money;
use super::period::BudgetPeriod;

/// A monthly amount over a calendar period
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Budget {
    /// Unique identifier
    pub id: BudgetId,

    /// Amount to spread over the period
    pub monthly_amount: Money,

    /// First day of the period
    pub start_date: NaiveDate,

    /// Last day of the period (inclusive)
    pub end_date: NaiveDate,

    /// One row per day of the period, ascending, once generated
    #[serde(default)]
    pub daily_allocation: Vec<DailyAllocation>,

    /// When this budget was created
    pub created_at: DateTime<Utc>,

    /// When this budget was last modified
    pub updated_at: DateTime<Utc>,
}

impl Budget {
    /// Create a budget with an empty allocation table
    pub fn new(monthly_amount: Money, start_date: NaiveDate, end_date: NaiveDate) -> Self {
        let now = Utc::now();
        Self {
            id: BudgetId::new(),
            monthly_amount,
            start_date,
            end_date,
            daily_allocation: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Create a budget covering a whole period
    pub fn for_period(monthly_amount: Money, period: BudgetPeriod) -> Self {
        Self::new(monthly_amount, period.start_date(), period.end_date())
    }

    /// The budget's period
    pub fn period(&self) -> BudgetPeriod {
        BudgetPeriod::new(self.start_date, self.end_date)
    }

    /// Monthly amount divided evenly over every day of the period
    ///
    /// Depends only on the fixed dates, never on how much has been spent.
    pub fn daily_base(&self) -> Money {
        self.monthly_amount.per_day(self.period().days_in_period())
    }

    /// Replace the allocation table
    pub fn set_daily_allocation(&mut self, allocations: Vec<DailyAllocation>) {
        self.daily_allocation = allocations;
        self.updated_at = Utc::now();
    }

    /// Change the monthly amount
    pub fn set_monthly_amount(&mut self, amount: Money) {
        self.monthly_amount = amount;
        self.updated_at = Utc::now();
    }

    /// Look up the cached allocation for a day
    pub fn allocation_on(&self, date: NaiveDate) -> Option<&DailyAllocation> {
        self.daily_allocation
            .binary_search_by_key(&date, |a| a.date)
            .ok()
            .map(|idx| &self.daily_allocation[idx])
    }

    /// Check the table covers every day of the period exactly once, ascending
    pub fn is_fully_allocated(&self) -> bool {
        let days = self.period().days();
        days.len() == self.daily_allocation.len()
            && days
                .zip(self.daily_allocation.iter())
                .all(|(day, row)| row.date == day)
    }
}

impl fmt::Display for Budget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} over {}", self.monthly_amount, self.period())
    }
}
