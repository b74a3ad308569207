//! Money type for representing currency amounts
//!
//! Internally stores an exact decimal (`rust_decimal::Decimal`) so that a
//! monthly amount split across a period's days sums back to the original
//! amount without floating-point drift. Rounding happens only on display.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};
use std::str::FromStr;

/// Represents an exact monetary amount in the major currency unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(Decimal);

impl Money {
    /// Create a Money amount from cents
    ///
    /// # Examples
    /// ```
    /// use budget_pace::models::Money;
    /// let amount = Money::from_cents(1050); // 10.50
    /// assert_eq!(amount.to_string(), "$10.50");
    /// ```
    pub fn from_cents(cents: i64) -> Self {
        Self(Decimal::new(cents, 2))
    }

    /// Create a Money amount from whole currency units
    pub fn from_major(units: i64) -> Self {
        Self(Decimal::from(units))
    }

    /// Wrap an existing decimal
    pub const fn from_decimal(value: Decimal) -> Self {
        Self(value)
    }

    /// Create a zero Money amount
    pub const fn zero() -> Self {
        Self(Decimal::ZERO)
    }

    /// Get the underlying decimal
    pub const fn as_decimal(&self) -> Decimal {
        self.0
    }

    /// Check if the amount is zero
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Check if the amount is strictly positive
    pub fn is_positive(&self) -> bool {
        self.0 > Decimal::ZERO
    }

    /// Check if the amount is strictly negative
    pub fn is_negative(&self) -> bool {
        self.0 < Decimal::ZERO
    }

    /// Get the absolute value
    pub fn abs(&self) -> Self {
        Self(self.0.abs())
    }

    /// Clamp negative amounts to zero
    pub fn floor_at_zero(&self) -> Self {
        if self.is_negative() {
            Self::zero()
        } else {
            *self
        }
    }

    /// Split this amount evenly over `days` days
    ///
    /// Returns zero when `days` is zero or negative.
    pub fn per_day(&self, days: i64) -> Self {
        if days <= 0 {
            return Self::zero();
        }
        Self(self.0 / Decimal::from(days))
    }

    /// Multiply by a whole number of days
    pub fn times(&self, days: i64) -> Self {
        Self(self.0 * Decimal::from(days))
    }

    /// Round half away from zero to the given number of decimal places
    ///
    /// Amounts that round to zero come back as positive zero.
    pub fn round_to(&self, places: u32) -> Self {
        let rounded = self
            .0
            .round_dp_with_strategy(places, RoundingStrategy::MidpointAwayFromZero);
        if rounded.is_zero() {
            Self::zero()
        } else {
            Self(rounded)
        }
    }

    /// True when `self` and `other` differ by no more than `tolerance`
    pub fn approx_eq(&self, other: Money, tolerance: Money) -> bool {
        (*self - other).abs() <= tolerance
    }

    /// Parse a money amount from a string
    ///
    /// Accepts formats: "10.50", "-10.50", "$10.50", "10"
    pub fn parse(s: &str) -> Result<Self, MoneyParseError> {
        let s = s.trim();

        let (negative, rest) = if let Some(stripped) = s.strip_prefix('-') {
            (true, stripped)
        } else {
            (false, s)
        };

        let rest = rest.strip_prefix('$').unwrap_or(rest).replace(',', "");

        let value = Decimal::from_str(&rest)
            .map_err(|_| MoneyParseError::InvalidFormat(s.to_string()))?;

        Ok(Self(if negative { -value } else { value }))
    }

    /// Format with a currency symbol, rounded to cents
    pub fn format_with_symbol(&self, symbol: &str) -> String {
        let rounded = self.round_to(2).0;
        if rounded < Decimal::ZERO {
            format!("-{}{:.2}", symbol, rounded.abs())
        } else {
            format!("{}{:.2}", symbol, rounded)
        }
    }
}

impl Default for Money {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_with_symbol("$"))
    }
}

impl FromStr for Money {
    type Err = MoneyParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<Decimal> for Money {
    fn from(value: Decimal) -> Self {
        Self(value)
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self(self.0 - other.0)
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

impl Neg for Money {
    type Output = Self;

    fn neg(self) -> Self {
        Self(-self.0)
    }
}

impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

impl<'a> std::iter::Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + *m)
    }
}

/// Error type for money parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoneyParseError {
    InvalidFormat(String),
}

impl fmt::Display for MoneyParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoneyParseError::InvalidFormat(s) => write!(f, "Invalid money format: {}", s),
        }
    }
}

impl std::error::Error for MoneyParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cents() {
        let m = Money::from_cents(1050);
        assert_eq!(m, Money::parse("10.50").unwrap());
        assert_eq!(m.as_decimal(), Decimal::new(105, 1));
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_cents(1050)), "$10.50");
        assert_eq!(format!("{}", Money::zero()), "$0.00");
        assert_eq!(format!("{}", Money::from_cents(-1050)), "-$10.50");
        assert_eq!(format!("{}", Money::from_cents(5)), "$0.05");
        assert_eq!(Money::from_major(7).format_with_symbol("€"), "€7.00");
    }

    #[test]
    fn test_display_rounds_exact_fractions() {
        let base = Money::from_major(1500).per_day(31);
        assert_eq!(base.to_string(), "$48.39");
        assert_eq!((-base).to_string(), "-$48.39");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_major(10);
        let b = Money::from_major(5);

        assert_eq!(a + b, Money::from_major(15));
        assert_eq!(a - b, Money::from_major(5));
        assert_eq!(-a, Money::from_major(-10));
        assert_eq!(b.times(3), Money::from_major(15));
    }

    #[test]
    fn test_per_day_conserves_total() {
        let monthly = Money::from_major(1500);
        let base = monthly.per_day(31);
        let total: Money = std::iter::repeat(base).take(31).sum();
        assert!(total.approx_eq(monthly, Money::from_cents(1)));
    }

    #[test]
    fn test_per_day_zero_days() {
        assert_eq!(Money::from_major(100).per_day(0), Money::zero());
        assert_eq!(Money::from_major(100).per_day(-3), Money::zero());
    }

    #[test]
    fn test_parse() {
        assert_eq!(Money::parse("10.50").unwrap(), Money::from_cents(1050));
        assert_eq!(Money::parse("$10.50").unwrap(), Money::from_cents(1050));
        assert_eq!(Money::parse("-10.50").unwrap(), Money::from_cents(-1050));
        assert_eq!(Money::parse("10").unwrap(), Money::from_major(10));
        assert_eq!(Money::parse("1,500").unwrap(), Money::from_major(1500));
        assert!(Money::parse("ten").is_err());
    }

    #[test]
    fn test_floor_at_zero() {
        assert_eq!(Money::from_major(-4).floor_at_zero(), Money::zero());
        assert_eq!(Money::from_major(4).floor_at_zero(), Money::from_major(4));
    }

    #[test]
    fn test_is_checks() {
        assert!(Money::zero().is_zero());
        assert!(Money::from_cents(100).is_positive());
        assert!(Money::from_cents(-100).is_negative());
    }

    #[test]
    fn test_serialization() {
        let m = Money::from_cents(1050);
        let json = serde_json::to_string(&m).unwrap();
        let deserialized: Money = serde_json::from_str(&json).unwrap();
        assert_eq!(m, deserialized);

        let from_number: Money = serde_json::from_str("1500").unwrap();
        assert_eq!(from_number, Money::from_major(1500));
    }
}
