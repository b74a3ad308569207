//! Period CLI command

use std::io::Write;

use clap::Args;

use crate::error::PaceResult;
use crate::services::PeriodService;

/// Arguments for `pace period`
#[derive(Args, Debug)]
pub struct PeriodArgs {
    /// Period ("current", "last", "next", "March 2025", "2025-03",
    /// "2025-03-10..2025-04-09"); defaults to the current month
    pub spec: Option<String>,
}

/// Handle `pace period`
pub fn handle_period_command<W: Write>(
    service: &PeriodService,
    args: PeriodArgs,
    out: &mut W,
) -> PaceResult<()> {
    let period = service.parse_or_current(args.spec.as_deref())?;

    writeln!(out, "Period: {}", service.format_period_friendly(&period))?;
    writeln!(out, "  Start: {}", period.start_date())?;
    writeln!(out, "  End:   {}", period.end_date())?;
    writeln!(out, "  Days:  {}", period.days_in_period())?;

    if service.is_current(&period) {
        writeln!(
            out,
            "  Today: {} ({} days left, including today)",
            service.today(),
            period.remaining_days(service.today())
        )?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn run(spec: Option<&str>) -> String {
        let service = PeriodService::with_today(NaiveDate::from_ymd_opt(2025, 1, 20).unwrap());
        let mut out = Vec::new();
        handle_period_command(
            &service,
            PeriodArgs {
                spec: spec.map(str::to_string),
            },
            &mut out,
        )
        .unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_current_period_shows_today() {
        let output = run(None);
        assert!(output.contains("Period: January 2025"));
        assert!(output.contains("Days:  31"));
        assert!(output.contains("12 days left"));
    }

    #[test]
    fn test_custom_range() {
        let output = run(Some("2025-02-10..2025-03-09"));
        assert!(output.contains("Start: 2025-02-10"));
        assert!(output.contains("Days:  28"));
        assert!(!output.contains("Today:"));
    }
}
