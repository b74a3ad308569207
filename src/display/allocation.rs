//! Allocation display formatting
//!
//! Formats allocation tables for terminal output in table and detail views.

use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Style};
use tabled::{Table, Tabled};

use super::DisplayOptions;
use crate::models::{AllocationSummary, Budget, DailyAllocation};
use crate::services::Reallocation;

#[derive(Tabled)]
struct AllocationRow {
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Base")]
    base: String,
    #[tabled(rename = "Carry Over")]
    carry_over: String,
    #[tabled(rename = "Available")]
    available: String,
    #[tabled(rename = "Spent")]
    spent: String,
    #[tabled(rename = "Remaining")]
    remaining: String,
    #[tabled(rename = "Spendable")]
    spendable: String,
    #[tabled(rename = "")]
    flag: String,
}

impl AllocationRow {
    fn new(row: &DailyAllocation, options: &DisplayOptions) -> Self {
        let spendable = if options.floor_spendable {
            row.spendable()
        } else {
            row.remaining_amount
        };

        Self {
            date: options.date(row.date),
            base: options.money(row.base_amount),
            carry_over: options.money(row.carry_over_amount),
            available: options.money(row.available_amount),
            spent: options.money(row.spent_amount),
            remaining: options.money(row.remaining_amount),
            spendable: options.money(spendable),
            flag: if row.is_overspent() { "OVER" } else { "" }.to_string(),
        }
    }
}

/// Format allocation rows as a table
pub fn format_allocation_table(
    allocations: &[DailyAllocation],
    options: &DisplayOptions,
) -> String {
    if allocations.is_empty() {
        return "No days to allocate.".to_string();
    }

    let rows: Vec<AllocationRow> = allocations
        .iter()
        .map(|row| AllocationRow::new(row, options))
        .collect();

    let mut table = Table::new(rows);
    table
        .with(Style::psql())
        .modify(Columns::new(1..7), Alignment::right());
    table.to_string()
}

/// Format the totals under a table
pub fn format_summary(
    budget: &Budget,
    summary: &AllocationSummary,
    options: &DisplayOptions,
) -> String {
    let period = budget.period();
    let mut output = String::new();

    output.push_str(&format!(
        "Period:          {} to {} ({} days)\n",
        options.date(period.start_date()),
        options.date(period.end_date()),
        period.days_in_period()
    ));
    output.push_str(&format!(
        "Monthly amount:  {}\n",
        options.money(budget.monthly_amount)
    ));
    output.push_str(&format!("Daily base:      {}\n", options.money(budget.daily_base())));
    output.push_str(&format!("Total spent:     {}\n", options.money(summary.total_spent)));
    output.push_str(&format!(
        "Closing balance: {}\n",
        options.money(summary.closing_balance)
    ));

    if summary.overspent_days > 0 {
        output.push_str(&format!(
            "Overspent days:  {} of {}\n",
            summary.overspent_days, summary.days
        ));
    }

    output
}

/// Format one day's allocation in detail
pub fn format_day_detail(row: &DailyAllocation, options: &DisplayOptions) -> String {
    let mut output = String::new();

    output.push_str(&format!("Day: {}\n", options.date(row.date)));
    output.push_str(&format!("  Base:        {}\n", options.money(row.base_amount)));
    output.push_str(&format!("  Carry-over:  {}\n", options.money(row.carry_over_amount)));
    output.push_str(&format!("  Available:   {}\n", options.money(row.available_amount)));
    output.push_str(&format!("  Spent:       {}\n", options.money(row.spent_amount)));
    output.push_str(&format!("  Remaining:   {}\n", options.money(row.remaining_amount)));
    output.push_str(&format!("  Spendable:   {}\n", options.money(row.spendable())));

    if row.is_overspent() {
        output.push_str(&format!(
            "\nOverspent by {}; the deficit carries into the following days.\n",
            options.money(-row.remaining_amount)
        ));
    }

    output
}

/// Format the figures behind a reallocation
pub fn format_reallocation_header(
    reallocation: &Reallocation,
    options: &DisplayOptions,
) -> String {
    let mut output = String::new();

    output.push_str(&format!(
        "Reallocation as of {}\n",
        options.date(reallocation.as_of)
    ));
    output.push_str(&format!(
        "  New monthly amount: {}\n",
        options.money(reallocation.new_monthly_amount)
    ));
    output.push_str(&format!(
        "  Spent so far:       {}\n",
        options.money(reallocation.spent_so_far)
    ));
    output.push_str(&format!(
        "  Remaining:          {}\n",
        options.money(reallocation.remaining)
    ));
    output.push_str(&format!(
        "  Remaining days:     {}\n",
        reallocation.remaining_days
    ));
    output.push_str(&format!(
        "  New daily base:     {}\n",
        options.money(reallocation.new_base)
    ));

    if reallocation.remaining_days == 0 {
        output.push_str("\nThe period has ended; nothing to reallocate.\n");
    }

    output
}
