//! Expense model
//!
//! An expense is a single outflow on a calendar day. The engine only reads
//! expenses; they are owned and persisted elsewhere.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::{CategoryId, ExpenseId};
use super::money::Money;

/// A recorded expense
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    /// Unique identifier
    pub id: ExpenseId,

    /// Amount spent (positive)
    pub amount: Money,

    /// Category, if the expense was categorized
    pub category_id: Option<CategoryId>,

    /// Free-form description
    #[serde(default)]
    pub description: String,

    /// UTC day key of the expense
    pub date: NaiveDate,

    /// When the expense was created
    pub created_at: DateTime<Utc>,

    /// When the expense was last modified
    pub updated_at: DateTime<Utc>,
}

impl Expense {
    /// Create a new expense
    pub fn new(date: NaiveDate, amount: Money) -> Self {
        let now = Utc::now();
        Self {
            id: ExpenseId::new(),
            amount,
            category_id: None,
            description: String::new(),
            date,
            created_at: now,
            updated_at: now,
        }
    }

    /// Create an expense with a description and category
    pub fn with_details(
        date: NaiveDate,
        amount: Money,
        description: impl Into<String>,
        category_id: Option<CategoryId>,
    ) -> Self {
        let mut expense = Self::new(date, amount);
        expense.description = description.into();
        expense.category_id = category_id;
        expense
    }
}

impl fmt::Display for Expense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.description.is_empty() {
            write!(f, "{} {}", self.date, self.amount)
        } else {
            write!(f, "{} {} {}", self.date, self.amount, self.description)
        }
    }
}
