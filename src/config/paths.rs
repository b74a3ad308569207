//! Path management for budget-pace
//!
//! ## Path Resolution Order
//!
//! 1. `BUDGET_PACE_DIR` environment variable (if set)
//! 2. The platform config directory from `directories::ProjectDirs`
//!    (`~/.config/budget-pace` on Linux)

use std::path::{Path, PathBuf};

use directories::ProjectDirs;

use crate::error::PaceError;

/// Environment variable that overrides the base directory
pub const BASE_DIR_ENV: &str = "BUDGET_PACE_DIR";

/// Manages all paths used by budget-pace
#[derive(Debug, Clone)]
pub struct PacePaths {
    base_dir: PathBuf,
}

impl PacePaths {
    /// Resolve the base directory from the environment or the platform
    ///
    /// # Errors
    ///
    /// Returns an error if no home directory can be determined.
    pub fn new() -> Result<Self, PaceError> {
        let base_dir = match std::env::var_os(BASE_DIR_ENV) {
            Some(custom) if !custom.is_empty() => PathBuf::from(custom),
            _ => resolve_default_path()?,
        };

        Ok(Self { base_dir })
    }

    /// Create PacePaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Ensure the base directory exists
    pub fn ensure_directories(&self) -> Result<(), PaceError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| PaceError::Io(format!("Failed to create base directory: {}", e)))
    }

    /// Check if settings have been written (`pace init`)
    pub fn is_initialized(&self) -> bool {
        self.settings_file().exists()
    }
}

fn resolve_default_path() -> Result<PathBuf, PaceError> {
    ProjectDirs::from("", "", "budget-pace")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| PaceError::Config("Could not determine a home directory".into()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use tempfile::TempDir;

    #[test]
    fn test_custom_base_dir() {
        let temp_dir = TempDir::new().unwrap();
        let paths = PacePaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.base_dir(), temp_dir.path());
        assert_eq!(paths.settings_file(), temp_dir.path().join("config.json"));
        assert!(!paths.is_initialized());
    }

    #[test]
    fn test_env_var_override() {
        let temp_dir = TempDir::new().unwrap();

        env::set_var(BASE_DIR_ENV, temp_dir.path());
        let paths = PacePaths::new().unwrap();
        env::remove_var(BASE_DIR_ENV);

        assert_eq!(paths.base_dir(), temp_dir.path());
    }

    #[test]
    fn test_ensure_directories() {
        let temp_dir = TempDir::new().unwrap();
        let paths = PacePaths::with_base_dir(temp_dir.path().join("nested").join("pace"));

        paths.ensure_directories().unwrap();
        assert!(paths.base_dir().is_dir());
    }
}
