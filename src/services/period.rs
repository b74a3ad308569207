//! Budget period service
//!
//! Resolves the period strings users type ("current", "last", "March 2025",
//! "2025-01", "2025-01-10..2025-02-09") into concrete day ranges, relative
//! to a fixed "today".

use crate::error::{PaceError, PaceResult};
use crate::models::BudgetPeriod;
use chrono::{Datelike, Duration, Months, NaiveDate, Utc};

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Service for budget period resolution
pub struct PeriodService {
    today: NaiveDate,
}

impl PeriodService {
    /// Create a period service anchored on today's UTC date
    pub fn new() -> Self {
        Self::with_today(Utc::now().date_naive())
    }

    /// Create a period service anchored on a specific day
    pub fn with_today(today: NaiveDate) -> Self {
        Self { today }
    }

    /// The anchor day
    pub fn today(&self) -> NaiveDate {
        self.today
    }

    /// The calendar month containing today
    pub fn current_period(&self) -> BudgetPeriod {
        BudgetPeriod::month_containing(self.today)
    }

    /// The calendar month before the one containing `period`'s start
    pub fn previous_month(&self, period: &BudgetPeriod) -> BudgetPeriod {
        BudgetPeriod::month_containing(period.start_date() - Duration::days(1))
    }

    /// The calendar month after the one containing `period`'s end
    pub fn next_month(&self, period: &BudgetPeriod) -> BudgetPeriod {
        BudgetPeriod::month_containing(period.end_date() + Duration::days(1))
    }

    /// Parse a period string or get the current period
    pub fn parse_or_current(&self, period_str: Option<&str>) -> PaceResult<BudgetPeriod> {
        match period_str {
            Some(s) => self.parse(s),
            None => Ok(self.current_period()),
        }
    }

    /// Parse a period string
    ///
    /// Formats supported:
    /// - Relative: "current", "now", "this", "last", "previous", "next"
    /// - Month names: "January 2025", "Jan" (most recent past January)
    /// - Monthly: "2025-01"
    /// - Date range: "2025-01-01..2025-01-14"
    pub fn parse(&self, s: &str) -> PaceResult<BudgetPeriod> {
        let s_lower = s.trim().to_lowercase();

        match s_lower.as_str() {
            "current" | "now" | "this" => return Ok(self.current_period()),
            "last" | "previous" | "prev" => {
                return Ok(self.previous_month(&self.current_period()))
            }
            "next" => return Ok(self.next_month(&self.current_period())),
            _ => {}
        }

        if let Some(period) = self.parse_month_name(&s_lower) {
            return Ok(period);
        }

        BudgetPeriod::parse(s.trim())
            .map_err(|e| PaceError::Validation(e.to_string()))
    }

    /// Parse month names like "January", "Jan 2025"
    fn parse_month_name(&self, s: &str) -> Option<BudgetPeriod> {
        let (name, rest) = match s.split_once(' ') {
            Some((name, rest)) => (name, rest.trim()),
            None => (s, ""),
        };
        if name.len() < 3 {
            return None;
        }

        let month = MONTH_NAMES
            .iter()
            .position(|full| full.to_lowercase().starts_with(name))?
            as u32
            + 1;

        let year = if rest.is_empty() {
            // a month later in the year than today means last year's
            if month > self.today.month() {
                self.today.year() - 1
            } else {
                self.today.year()
            }
        } else {
            rest.parse().ok()?
        };

        BudgetPeriod::monthly(year, month)
    }

    /// Format a period in a human-friendly way
    pub fn format_period_friendly(&self, period: &BudgetPeriod) -> String {
        let start = period.start_date();
        let end = period.end_date();
        let is_whole_month = start.day() == 1
            && start.checked_add_months(Months::new(1)) == Some(end + Duration::days(1));

        if is_whole_month {
            format!("{} {}", MONTH_NAMES[start.month0() as usize], start.year())
        } else {
            format!("{} - {}", start.format("%b %d"), end.format("%b %d, %Y"))
        }
    }

    /// Check if a period contains today
    pub fn is_current(&self, period: &BudgetPeriod) -> bool {
        period.contains(self.today)
    }
}

impl Default for PeriodService {
    fn default() -> Self {
        Self::new()
    }
}
