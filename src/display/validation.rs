//! Validation report formatting

use crate::services::ValidationReport;

/// Format every problem in a report, one per line
pub fn format_validation_report(report: &ValidationReport) -> String {
    if report.is_valid {
        return "Budget and expenses are valid.".to_string();
    }

    let mut output = format!("Found {} problem(s):\n", report.errors.len());
    for issue in &report.errors {
        output.push_str(&format!("  - {}\n", issue));
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Budget, Expense, Money};
    use crate::services::validate;
    use chrono::NaiveDate;

    #[test]
    fn test_valid_report() {
        let day = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
        let budget = Budget::new(Money::from_major(100), day, day + chrono::Duration::days(9));
        let report = validate(&budget, &[]);
        assert_eq!(format_validation_report(&report), "Budget and expenses are valid.");
    }

    #[test]
    fn test_lists_every_problem() {
        let day = NaiveDate::from_ymd_opt(2025, 1, 5).unwrap();
        let budget = Budget::new(Money::zero(), day, day);
        let expenses = vec![Expense::new(day, Money::from_major(-1))];

        let output = format_validation_report(&validate(&budget, &expenses));
        assert!(output.starts_with("Found 3 problem(s):"));
        assert!(output.contains("monthly_amount [non_positive_amount]"));
        assert!(output.contains("end_date [invalid_date_range]"));
        assert!(output.contains("expenses[0].amount [non_positive_expense]"));
    }
}
