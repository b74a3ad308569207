//! User settings for budget-pace
//!
//! Display preferences only. Settings never change what the engine
//! computes, just how its output is shown.

use serde::{Deserialize, Serialize};

use super::paths::PacePaths;
use crate::error::PaceError;
use crate::export::OutputFormat;
use crate::storage::write_json_atomic;

/// User settings for budget-pace
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Currency symbol used in tables and summaries
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Date format preference (strftime format)
    #[serde(default = "default_date_format")]
    pub date_format: String,

    /// Output format used when a command gets no `--format`
    #[serde(default)]
    pub default_format: OutputFormat,

    /// Show a day's spendable amount floored at zero rather than signed
    #[serde(default = "default_floor_spendable")]
    pub floor_spendable: bool,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "$".to_string()
}

fn default_date_format() -> String {
    "%Y-%m-%d".to_string()
}

fn default_floor_spendable() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_symbol: default_currency(),
            date_format: default_date_format(),
            default_format: OutputFormat::default(),
            floor_spendable: default_floor_spendable(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or fall back to defaults if the file doesn't exist
    pub fn load_or_create(paths: &PacePaths) -> Result<Self, PaceError> {
        let settings_path = paths.settings_file();

        if !settings_path.exists() {
            // Don't save yet - `pace init` decides when to persist
            return Ok(Settings::default());
        }

        let contents = std::fs::read_to_string(&settings_path)
            .map_err(|e| PaceError::Io(format!("Failed to read settings file: {}", e)))?;

        serde_json::from_str(&contents)
            .map_err(|e| PaceError::Config(format!("Failed to parse settings file: {}", e)))
    }

    /// Save settings to disk
    pub fn save(&self, paths: &PacePaths) -> Result<(), PaceError> {
        paths.ensure_directories()?;
        write_json_atomic(paths.settings_file(), self)
    }

    /// Pick the command-line format if given, else the configured one
    pub fn output_format(&self, requested: Option<OutputFormat>) -> OutputFormat {
        requested.unwrap_or(self.default_format)
    }
}
