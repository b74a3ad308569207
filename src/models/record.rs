//! Stored budget and expense records
//!
//! The shape budgets and expenses have in a snapshot file, with dates still
//! as strings. Converting a record is the only place a date string becomes
//! a day key.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::InvalidDateError;

use super::{parse_day, Budget, BudgetId, CategoryId, Expense, ExpenseId, Money};

/// A budget as stored, before date parsing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BudgetRecord {
    #[serde(default)]
    pub id: Option<BudgetId>,
    pub monthly_amount: Money,
    pub start_date: String,
    pub end_date: String,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl BudgetRecord {
    /// Parse the record's dates and build a budget with an empty table
    pub fn into_budget(self) -> Result<Budget, InvalidDateError> {
        let start = parse_day(&self.start_date)?;
        let end = parse_day(&self.end_date)?;

        let mut budget = Budget::new(self.monthly_amount, start, end);
        if let Some(id) = self.id {
            budget.id = id;
        }
        if let Some(created_at) = self.created_at {
            budget.created_at = created_at;
        }
        budget.updated_at = self.updated_at.unwrap_or(budget.created_at);
        Ok(budget)
    }
}

/// An expense as stored, before date parsing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpenseRecord {
    #[serde(default)]
    pub id: Option<ExpenseId>,
    pub amount: Money,
    #[serde(default)]
    pub category_id: Option<CategoryId>,
    #[serde(default)]
    pub description: String,
    pub date: String,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl ExpenseRecord {
    /// Parse the record's date (reduced to its UTC day key) and build an expense
    pub fn into_expense(self) -> Result<Expense, InvalidDateError> {
        let date = parse_day(&self.date)?;

        let mut expense =
            Expense::with_details(date, self.amount, self.description, self.category_id);
        if let Some(id) = self.id {
            expense.id = id;
        }
        if let Some(created_at) = self.created_at {
            expense.created_at = created_at;
        }
        expense.updated_at = self.updated_at.unwrap_or(expense.created_at);
        Ok(expense)
    }
}
