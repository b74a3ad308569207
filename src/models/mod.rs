//! Core data models for budget-pace
//!
//! This module contains the data structures the allocation engine reads and
//! produces: budgets, expenses, the per-day allocation rows, and the money,
//! id, and calendar-day types they are built from.

pub mod allocation;
pub mod budget;
pub mod day;
pub mod expense;
pub mod ids;
pub mod money;
pub mod period;
pub mod record;

pub use allocation::{AllocationSummary, DailyAllocation};
pub use budget::Budget;
pub use day::{day_key, days_before, days_in_period, parse_day, remaining_days, DayRange};
pub use expense::Expense;
pub use ids::{BudgetId, CategoryId, ExpenseId};
pub use money::Money;
pub use period::BudgetPeriod;
pub use record::{BudgetRecord, ExpenseRecord};
