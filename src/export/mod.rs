//! Export module for budget-pace
//!
//! Machine-readable renderings of allocation tables:
//! - CSV: one row per day (spreadsheet-compatible)
//! - JSON: the table plus budget figures and a summary
//! - YAML: the JSON document, human-readable, with a header comment

pub mod csv;
pub mod json;
pub mod yaml;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

pub use self::csv::{export_allocations_csv, export_issues_csv};
pub use json::{
    export_allocations_json, write_json, AllocationExport, BudgetFigures, ReallocationFigures,
    EXPORT_SCHEMA_VERSION,
};
pub use yaml::export_allocations_yaml;

/// How a command prints its result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Aligned terminal table
    #[default]
    Table,
    /// JSON document
    Json,
    /// YAML document
    Yaml,
    /// CSV, allocation rows only
    Csv,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Table => "table",
            Self::Json => "json",
            Self::Yaml => "yaml",
            Self::Csv => "csv",
        };
        write!(f, "{}", name)
    }
}
