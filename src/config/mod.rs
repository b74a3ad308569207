//! Configuration module for budget-pace
//!
//! This module provides configuration management including:
//! - Platform-aware path resolution
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::PacePaths;
pub use settings::Settings;
