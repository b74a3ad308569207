//! budget-pace - daily spending pace for a budget period
//!
//! This library splits a budget's amount evenly across the days of its
//! period and carries each day's surplus or deficit forward, producing a
//! per-day table of what can be spent. When the amount changes partway
//! through, the rest of the period is recomputed from what has already
//! been spent.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (budgets, expenses, daily allocations)
//! - `storage`: JSON snapshot loading
//! - `services`: The allocation engine, reallocation and validation
//! - `display`: Terminal formatting
//! - `export`: JSON, YAML and CSV output
//! - `cli`: Command handlers for the `pace` binary
//!
//! # Example
//!
//! ```rust
//! use budget_pace::models::{Budget, BudgetPeriod, Expense, Money};
//! use budget_pace::services::AllocationEngine;
//! use chrono::NaiveDate;
//!
//! let january = BudgetPeriod::monthly(2025, 1).unwrap();
//! let budget = Budget::for_period(Money::from_major(1500), january);
//! let new_year = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
//! let expenses = vec![Expense::new(new_year, Money::from_major(45))];
//!
//! let table = AllocationEngine::new(&expenses).generate_for_budget(&budget);
//! assert_eq!(table.len(), 31);
//! assert_eq!(table[1].carry_over_amount.to_string(), "$3.39");
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod services;
pub mod storage;

pub use error::{InvalidDateError, PaceError, PaceResult};
