//! Calendar-day arithmetic and day keys
//!
//! Every grouping and comparison in the engine happens on a [`NaiveDate`]
//! produced here. Timestamps are converted to UTC before truncation, so an
//! expense logged at 23:30 in New York lands on the next UTC day everywhere,
//! not just in some call sites.

use chrono::{DateTime, Duration, NaiveDate, Utc};

use crate::error::InvalidDateError;

const DAY_FORMAT: &str = "%Y-%m-%d";

/// Parse a calendar day from `YYYY-MM-DD` or an RFC 3339 timestamp
///
/// Timestamps are reduced to their UTC day key. Anything else is rejected;
/// there is no fallback to the current date.
pub fn parse_day(s: &str) -> Result<NaiveDate, InvalidDateError> {
    let trimmed = s.trim();

    if let Ok(day) = NaiveDate::parse_from_str(trimmed, DAY_FORMAT) {
        return Ok(day);
    }

    DateTime::parse_from_rfc3339(trimmed)
        .map(|ts| day_key(&ts.with_timezone(&Utc)))
        .map_err(|_| InvalidDateError::new(s))
}

/// The calendar day a UTC instant belongs to
pub fn day_key(ts: &DateTime<Utc>) -> NaiveDate {
    ts.date_naive()
}

/// Inclusive number of days in `[start, end]`
///
/// Negative when `end` precedes `start` by more than one day; callers that
/// need a count of days to iterate should use [`remaining_days`].
pub fn days_in_period(start: NaiveDate, end: NaiveDate) -> i64 {
    (end - start).num_days() + 1
}

/// Inclusive number of days from `current` to `end`, never below zero
pub fn remaining_days(current: NaiveDate, end: NaiveDate) -> i64 {
    days_in_period(current, end).max(0)
}

/// The days in `[start, target)`, ascending
pub fn days_before(target: NaiveDate, start: NaiveDate) -> Vec<NaiveDate> {
    DayRange::new(start, target - Duration::days(1)).collect()
}

/// Iterator over every day in an inclusive range
///
/// Empty when `start > end`.
#[derive(Debug, Clone)]
pub struct DayRange {
    next: Option<NaiveDate>,
    end: NaiveDate,
}

impl DayRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self {
            next: (start <= end).then_some(start),
            end,
        }
    }
}

impl Iterator for DayRange {
    type Item = NaiveDate;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = current.succ_opt().filter(|d| *d <= self.end);
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = match self.next {
            Some(d) => remaining_days(d, self.end) as usize,
            None => 0,
        };
        (len, Some(len))
    }
}

impl ExactSizeIterator for DayRange {}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_days_in_period() {
        assert_eq!(days_in_period(day(2025, 1, 1), day(2025, 1, 31)), 31);
        assert_eq!(days_in_period(day(2025, 1, 1), day(2025, 1, 1)), 1);
        assert_eq!(days_in_period(day(2024, 2, 1), day(2024, 2, 29)), 29);
    }

    #[test]
    fn test_remaining_days_clamped() {
        assert_eq!(remaining_days(day(2025, 1, 6), day(2025, 1, 31)), 26);
        assert_eq!(remaining_days(day(2025, 1, 31), day(2025, 1, 31)), 1);
        assert_eq!(remaining_days(day(2025, 2, 3), day(2025, 1, 31)), 0);
    }

    #[test]
    fn test_days_before() {
        let days = days_before(day(2025, 1, 4), day(2025, 1, 1));
        assert_eq!(days, vec![day(2025, 1, 1), day(2025, 1, 2), day(2025, 1, 3)]);

        assert!(days_before(day(2025, 1, 1), day(2025, 1, 1)).is_empty());
        assert!(days_before(day(2024, 12, 20), day(2025, 1, 1)).is_empty());
    }

    #[test]
    fn test_day_range_crosses_month_and_year() {
        let days: Vec<_> = DayRange::new(day(2024, 12, 30), day(2025, 1, 2)).collect();
        assert_eq!(days.len(), 4);
        assert_eq!(days[2], day(2025, 1, 1));
        assert_eq!(DayRange::new(day(2025, 1, 2), day(2025, 1, 1)).count(), 0);
        assert_eq!(DayRange::new(day(2025, 1, 1), day(2025, 1, 31)).len(), 31);
    }

    #[test]
    fn test_parse_plain_day() {
        assert_eq!(parse_day("2025-01-15").unwrap(), day(2025, 1, 15));
        assert_eq!(parse_day(" 2025-01-15 ").unwrap(), day(2025, 1, 15));
    }

    #[test]
    fn test_parse_timestamp_uses_utc_day() {
        assert_eq!(parse_day("2025-01-01T12:00:00Z").unwrap(), day(2025, 1, 1));
        // 23:30 at UTC-5 is 04:30 the next day in UTC
        assert_eq!(
            parse_day("2025-01-01T23:30:00-05:00").unwrap(),
            day(2025, 1, 2)
        );
        assert_eq!(
            parse_day("2025-01-02T01:00:00+09:00").unwrap(),
            day(2025, 1, 1)
        );
    }

    #[test]
    fn test_parse_rejects_garbage() {
        let err = parse_day("yesterday").unwrap_err();
        assert_eq!(err.input, "yesterday");
        assert!(parse_day("2025-02-30").is_err());
        assert!(parse_day("").is_err());
    }
}
