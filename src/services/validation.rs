//! Budget and expense validation
//!
//! Validation reports every violation it finds instead of stopping at the
//! first one, so a user can fix all of them in one pass. It never mutates
//! its inputs. Problems are returned as data; only a malformed date met
//! while *parsing* a snapshot is an error (see [`crate::error::InvalidDateError`]).

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::warn;

use crate::models::{parse_day, Budget, BudgetRecord, Expense, ExpenseRecord, Money};

/// Machine-readable kind of a validation failure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationCode {
    /// Monthly amount is zero or negative
    NonPositiveAmount,
    /// Start date is not strictly before end date
    InvalidDateRange,
    /// A date string could not be parsed
    InvalidDate,
    /// An expense is dated outside the budget period
    ExpenseOutOfPeriod,
    /// An expense amount is zero or negative
    NonPositiveExpense,
}

impl fmt::Display for ValidationCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let code = match self {
            Self::NonPositiveAmount => "non_positive_amount",
            Self::InvalidDateRange => "invalid_date_range",
            Self::InvalidDate => "invalid_date",
            Self::ExpenseOutOfPeriod => "expense_out_of_period",
            Self::NonPositiveExpense => "non_positive_expense",
        };
        write!(f, "{}", code)
    }
}

/// One violation, tied to the field that caused it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationIssue {
    /// Path of the offending field, e.g. `expenses[2].amount`
    pub field: String,
    pub code: ValidationCode,
    pub message: String,
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}]: {}", self.field, self.code, self.message)
    }
}

/// Every violation found in a budget and its expenses
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationReport {
    pub is_valid: bool,
    pub errors: Vec<ValidationIssue>,
}

impl ValidationReport {
    fn from_issues(errors: Vec<ValidationIssue>) -> Self {
        if !errors.is_empty() {
            warn!(count = errors.len(), "validation found problems");
        }
        Self {
            is_valid: errors.is_empty(),
            errors,
        }
    }

    /// Check if any error has the given code
    pub fn has_code(&self, code: ValidationCode) -> bool {
        self.errors.iter().any(|e| e.code == code)
    }

    /// Fields named by the errors, in report order
    pub fn fields(&self) -> Vec<&str> {
        self.errors.iter().map(|e| e.field.as_str()).collect()
    }
}

/// Accumulates issues without short-circuiting
#[derive(Default)]
struct Checks {
    issues: Vec<ValidationIssue>,
}

impl Checks {
    fn push(&mut self, field: impl Into<String>, code: ValidationCode, message: impl Into<String>) {
        self.issues.push(ValidationIssue {
            field: field.into(),
            code,
            message: message.into(),
        });
    }

    fn monthly_amount(&mut self, amount: Money) {
        if !amount.is_positive() {
            self.push(
                "monthly_amount",
                ValidationCode::NonPositiveAmount,
                format!("Monthly amount must be greater than zero, got {}", amount),
            );
        }
    }

    fn date_range(&mut self, start: NaiveDate, end: NaiveDate) {
        if start >= end {
            self.push(
                "end_date",
                ValidationCode::InvalidDateRange,
                format!("Start date {} must be before end date {}", start, end),
            );
        }
    }

    fn expense_amount(&mut self, index: usize, amount: Money) {
        if !amount.is_positive() {
            self.push(
                format!("expenses[{}].amount", index),
                ValidationCode::NonPositiveExpense,
                format!("Expense amount must be greater than zero, got {}", amount),
            );
        }
    }

    fn expense_date(&mut self, index: usize, date: NaiveDate, start: NaiveDate, end: NaiveDate) {
        if date < start || date > end {
            self.push(
                format!("expenses[{}].date", index),
                ValidationCode::ExpenseOutOfPeriod,
                format!("Expense date {} is outside {}..{}", date, start, end),
            );
        }
    }

    fn parsed(&mut self, field: impl Into<String>, raw: &str) -> Option<NaiveDate> {
        match parse_day(raw) {
            Ok(date) => Some(date),
            Err(err) => {
                self.push(field, ValidationCode::InvalidDate, err.to_string());
                None
            }
        }
    }

    fn finish(self) -> ValidationReport {
        ValidationReport::from_issues(self.issues)
    }
}

/// Validate a budget and its expenses
pub fn validate(budget: &Budget, expenses: &[Expense]) -> ValidationReport {
    let mut checks = Checks::default();

    checks.monthly_amount(budget.monthly_amount);
    checks.date_range(budget.start_date, budget.end_date);

    for (index, expense) in expenses.iter().enumerate() {
        checks.expense_date(index, expense.date, budget.start_date, budget.end_date);
        checks.expense_amount(index, expense.amount);
    }

    checks.finish()
}

/// Validate raw records, reporting unparseable dates alongside other problems
pub fn validate_records(budget: &BudgetRecord, expenses: &[ExpenseRecord]) -> ValidationReport {
    let mut checks = Checks::default();

    checks.monthly_amount(budget.monthly_amount);
    let start = checks.parsed("start_date", &budget.start_date);
    let end = checks.parsed("end_date", &budget.end_date);
    let bounds = start.zip(end);

    if let Some((start, end)) = bounds {
        checks.date_range(start, end);
    }

    for (index, expense) in expenses.iter().enumerate() {
        let date = checks.parsed(format!("expenses[{}].date", index), &expense.date);
        if let (Some(date), Some((start, end))) = (date, bounds) {
            checks.expense_date(index, date, start, end);
        }
        checks.expense_amount(index, expense.amount);
    }

    checks.finish()
}
