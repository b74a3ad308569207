//! Service layer for budget-pace
//!
//! The allocation engine and everything built on it. Each module depends
//! only on the ones listed before it:
//!
//! - `spending`: day-keyed expense totals
//! - `carryover`: the signed running ledger of `(base - spent)`
//! - `allocation`: per-day allocation tables
//! - `reallocation`: recomputing the rest of a period for a new amount
//! - `validation`: every problem in a budget and its expenses, as data
//! - `period`: resolving user-typed period strings

pub mod allocation;
pub mod carryover;
pub mod period;
pub mod reallocation;
pub mod spending;
pub mod validation;

pub use allocation::{generate_allocations, AllocationEngine};
pub use carryover::{carry_over, CarryOverLedger};
pub use period::PeriodService;
pub use reallocation::{reallocate, splice_reallocation, Reallocation};
pub use spending::SpendingIndex;
pub use validation::{
    validate, validate_records, ValidationCode, ValidationIssue, ValidationReport,
};
