//! Budget period representation
//!
//! A budget period is an inclusive range of calendar days. Monthly periods
//! are the common case, but any range is allowed.

use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::day::{days_before, days_in_period, remaining_days, DayRange};

/// An inclusive `[start, end]` range of calendar days
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BudgetPeriod {
    start: NaiveDate,
    end: NaiveDate,
}

impl BudgetPeriod {
    /// Create a period from explicit bounds
    ///
    /// The bounds are stored as given; an inverted range simply has no days.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// The calendar month `year-month`, or `None` for an impossible month
    pub fn monthly(year: i32, month: u32) -> Option<Self> {
        let start = NaiveDate::from_ymd_opt(year, month, 1)?;
        let next_month = if month == 12 {
            NaiveDate::from_ymd_opt(year + 1, 1, 1)?
        } else {
            NaiveDate::from_ymd_opt(year, month + 1, 1)?
        };
        Some(Self::new(start, next_month - Duration::days(1)))
    }

    /// The calendar month containing `date`
    pub fn month_containing(date: NaiveDate) -> Self {
        let start = date.with_day(1).unwrap_or(date);
        let end = start
            .checked_add_months(chrono::Months::new(1))
            .map(|d| d - Duration::days(1))
            .unwrap_or(date);
        Self::new(start, end)
    }

    /// First day of the period
    pub fn start_date(&self) -> NaiveDate {
        self.start
    }

    /// Last day of the period (inclusive)
    pub fn end_date(&self) -> NaiveDate {
        self.end
    }

    /// Inclusive day count
    pub fn days_in_period(&self) -> i64 {
        days_in_period(self.start, self.end)
    }

    /// Days left from `current` through the end, clamped at zero
    pub fn remaining_days(&self, current: NaiveDate) -> i64 {
        remaining_days(current, self.end)
    }

    /// Days of this period strictly before `target`
    pub fn days_before(&self, target: NaiveDate) -> Vec<NaiveDate> {
        days_before(target, self.start)
    }

    /// Every day of the period, ascending
    pub fn days(&self) -> DayRange {
        DayRange::new(self.start, self.end)
    }

    /// Check if a date falls within this period
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }

    /// Parse a period string
    ///
    /// Formats:
    /// - Monthly: "2025-01"
    /// - Custom: "2025-01-01..2025-01-15"
    pub fn parse(s: &str) -> Result<Self, PeriodParseError> {
        let s = s.trim();

        if let Some((start, end)) = s.split_once("..") {
            let start = NaiveDate::parse_from_str(start.trim(), "%Y-%m-%d")
                .map_err(|_| PeriodParseError::InvalidFormat(s.to_string()))?;
            let end = NaiveDate::parse_from_str(end.trim(), "%Y-%m-%d")
                .map_err(|_| PeriodParseError::InvalidFormat(s.to_string()))?;
            return Ok(Self::new(start, end));
        }

        let parts: Vec<&str> = s.split('-').collect();
        if parts.len() == 2 {
            let year: i32 = parts[0]
                .parse()
                .map_err(|_| PeriodParseError::InvalidFormat(s.to_string()))?;
            let month: u32 = parts[1]
                .parse()
                .map_err(|_| PeriodParseError::InvalidFormat(s.to_string()))?;

            return Self::monthly(year, month).ok_or(PeriodParseError::InvalidMonth(month));
        }

        Err(PeriodParseError::InvalidFormat(s.to_string()))
    }
}

impl fmt::Display for BudgetPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}..{}",
            self.start.format("%Y-%m-%d"),
            self.end.format("%Y-%m-%d")
        )
    }
}

impl Ord for BudgetPeriod {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.start
            .cmp(&other.start)
            .then_with(|| self.end.cmp(&other.end))
    }
}

impl PartialOrd for BudgetPeriod {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

/// Error type for period parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PeriodParseError {
    InvalidFormat(String),
    InvalidMonth(u32),
}

impl fmt::Display for PeriodParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PeriodParseError::InvalidFormat(s) => write!(f, "Invalid period format: {}", s),
            PeriodParseError::InvalidMonth(m) => write!(f, "Invalid month: {}", m),
        }
    }
}

impl std::error::Error for PeriodParseError {}
