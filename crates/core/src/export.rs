//! JSON export of the history window.

use crate::{error::DashError, sample::Sample, Result};
use std::path::{Path, PathBuf};

/// File name the export is written under unless configured otherwise.
pub const DEFAULT_FILE_NAME: &str = "hardware_data.json";

/// Serialize `samples` as a pretty-printed JSON array.
pub fn to_json(samples: &[Sample]) -> Result<String> {
    Ok(serde_json::to_string_pretty(samples)?)
}

/// Write `samples` to `dir/file_name`, creating `dir` if needed.
/// Returns the full path of the written file.
pub fn write_json(dir: &Path, file_name: &str, samples: &[Sample]) -> Result<PathBuf> {
    let is_plain_name = Path::new(file_name)
        .file_name()
        .is_some_and(|name| name == file_name);
    if !is_plain_name {
        return Err(DashError::Export(format!(
            "'{file_name}' is not a plain file name"
        )));
    }

    let json = to_json(samples)?;
    std::fs::create_dir_all(dir)?;
    let path = dir.join(file_name);
    std::fs::write(&path, json)?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_dir(tag: &str) -> PathBuf {
        std::env::temp_dir().join(format!("dash-export-{tag}-{}", std::process::id()))
    }

    #[test]
    fn json_is_array_of_samples() {
        let samples = vec![
            Sample::new("10:00:00", 20.5, 41.0, 1001.5, 25),
            Sample::new("10:00:01", 21.0, 42.5, 1002.0, 31),
        ];
        let json = to_json(&samples).unwrap();
        let parsed: Vec<Sample> = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, samples);
        assert!(json.contains("\n  {"));
        assert!(json.contains("\"timestamp\": \"10:00:00\""));
    }

    #[test]
    fn empty_history_exports_empty_array() {
        assert_eq!(to_json(&[]).unwrap(), "[]");
    }

    #[test]
    fn writes_named_file() {
        let dir = scratch_dir("write");
        let samples = vec![Sample::new("10:00:00", 20.5, 41.0, 1001.5, 25)];

        let path = write_json(&dir, DEFAULT_FILE_NAME, &samples).unwrap();
        assert_eq!(path, dir.join("hardware_data.json"));

        let raw = std::fs::read_to_string(&path).unwrap();
        let parsed: Vec<Sample> = serde_json::from_str(&raw).unwrap();
        assert_eq!(parsed, samples);

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn rejects_file_names_with_directories() {
        let dir = scratch_dir("reject");
        for name in ["", "../escape.json", "nested/data.json"] {
            let err = write_json(&dir, name, &[]).unwrap_err();
            assert!(matches!(err, DashError::Export(_)), "{name}: {err}");
        }
        assert!(!dir.exists());
    }
}
