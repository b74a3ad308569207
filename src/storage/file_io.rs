//! JSON file I/O
//!
//! Snapshot files are read whole; the settings file is written atomically
//! (temp file, sync, rename) so a crash never leaves it half-written.

use std::fs::{self, File};
use std::io::{self, BufReader, BufWriter, Read, Write};
use std::path::Path;

use serde::{de::DeserializeOwned, Serialize};

use crate::error::PaceError;

/// Path that stands for standard input
pub const STDIN_PATH: &str = "-";

/// Read JSON from a reader
pub fn read_json_from<T, R>(reader: R, source: &str) -> Result<T, PaceError>
where
    T: DeserializeOwned,
    R: Read,
{
    serde_json::from_reader(BufReader::new(reader))
        .map_err(|e| PaceError::Storage(format!("Failed to parse {}: {}", source, e)))
}

/// Read JSON from a file, or from standard input when the path is `-`
///
/// A missing file is an error; snapshots have no sensible default.
pub fn read_json_required<T, P>(path: P) -> Result<T, PaceError>
where
    T: DeserializeOwned,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    if path == Path::new(STDIN_PATH) {
        return read_json_from(io::stdin().lock(), "standard input");
    }

    if !path.exists() {
        return Err(PaceError::Storage(format!(
            "File not found: {}",
            path.display()
        )));
    }

    let file = File::open(path)
        .map_err(|e| PaceError::Storage(format!("Failed to open {}: {}", path.display(), e)))?;

    read_json_from(file, &path.display().to_string())
}

/// Write JSON to a file atomically (write to temp, then rename)
pub fn write_json_atomic<T, P>(path: P, data: &T) -> Result<(), PaceError>
where
    T: Serialize,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| {
            PaceError::Storage(format!(
                "Failed to create directory {}: {}",
                parent.display(),
                e
            ))
        })?;
    }

    // same directory, so the rename stays on one filesystem
    let temp_path = path.with_extension("json.tmp");

    let file = File::create(&temp_path)
        .map_err(|e| PaceError::Storage(format!("Failed to create temp file: {}", e)))?;

    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, data)
        .map_err(|e| PaceError::Storage(format!("Failed to serialize data: {}", e)))?;

    writer
        .flush()
        .map_err(|e| PaceError::Storage(format!("Failed to flush data: {}", e)))?;

    writer
        .get_ref()
        .sync_all()
        .map_err(|e| PaceError::Storage(format!("Failed to sync data: {}", e)))?;

    fs::rename(&temp_path, path).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        PaceError::Storage(format!("Failed to rename temp file: {}", e))
    })?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};
    use tempfile::TempDir;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct Sample {
        label: String,
        days: i64,
    }

    fn sample() -> Sample {
        Sample {
            label: "january".to_string(),
            days: 31,
        }
    }

    #[test]
    fn test_write_and_read() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("sample.json");

        write_json_atomic(&path, &sample()).unwrap();
        assert!(path.exists());
        assert!(!temp_dir.path().join("nested").join("sample.json.tmp").exists());

        let loaded: Sample = read_json_required(&path).unwrap();
        assert_eq!(loaded, sample());
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let err = read_json_required::<Sample, _>(temp_dir.path().join("absent.json")).unwrap_err();
        assert!(err.to_string().contains("File not found"));
    }

    #[test]
    fn test_malformed_json_names_the_source() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("broken.json");
        fs::write(&path, "{ not json").unwrap();

        let err = read_json_required::<Sample, _>(&path).unwrap_err();
        assert!(matches!(err, PaceError::Storage(_)));
        assert!(err.to_string().contains("broken.json"));
    }

    #[test]
    fn test_read_from_reader() {
        let json = r#"{"label": "feb", "days": 28}"#;
        let loaded: Sample = read_json_from(json.as_bytes(), "inline").unwrap();
        assert_eq!(loaded.days, 28);
    }
}
