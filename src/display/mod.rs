//! Display formatting for terminal output
//!
//! Renders allocation tables, single-day views, reallocation figures and
//! validation reports as text.

pub mod allocation;
pub mod validation;

use chrono::format::{Item, StrftimeItems};
use tracing::warn;

use crate::config::Settings;
use crate::models::Money;

pub use allocation::{
    format_allocation_table, format_day_detail, format_reallocation_header, format_summary,
};
pub use validation::format_validation_report;

const FALLBACK_DATE_FORMAT: &str = "%Y-%m-%d";

/// Presentation preferences, resolved from settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayOptions {
    pub currency_symbol: String,
    pub date_format: String,
    pub floor_spendable: bool,
}

impl DisplayOptions {
    /// Resolve options, replacing an unusable date format with ISO dates
    pub fn from_settings(settings: &Settings) -> Self {
        let date_format = if is_valid_date_format(&settings.date_format) {
            settings.date_format.clone()
        } else {
            warn!(format = %settings.date_format, "ignoring invalid date format");
            FALLBACK_DATE_FORMAT.to_string()
        };

        Self {
            currency_symbol: settings.currency_symbol.clone(),
            date_format,
            floor_spendable: settings.floor_spendable,
        }
    }

    pub(crate) fn money(&self, amount: Money) -> String {
        amount.format_with_symbol(&self.currency_symbol)
    }

    pub(crate) fn date(&self, date: chrono::NaiveDate) -> String {
        date.format(&self.date_format).to_string()
    }
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self::from_settings(&Settings::default())
    }
}

fn is_valid_date_format(format: &str) -> bool {
    !format.is_empty() && !StrftimeItems::new(format).any(|item| matches!(item, Item::Error))
}
