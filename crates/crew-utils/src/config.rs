//! Optional YAML settings files

use serde_yaml::{Mapping, Value};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::warn;

#[derive(Error, Debug)]
pub enum SettingsFileError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_yaml::Error,
    },

    #[error("{path} must contain a mapping at the top level")]
    NotAMapping { path: PathBuf },
}

/// Read a YAML file whose top level is a mapping
///
/// An empty document yields an empty mapping.
pub fn load_settings_file(path: &Path) -> Result<Mapping, SettingsFileError> {
    let text = std::fs::read_to_string(path).map_err(|source| SettingsFileError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let value: Value = serde_yaml::from_str(&text).map_err(|source| SettingsFileError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    match value {
        Value::Mapping(mapping) => Ok(mapping),
        Value::Null => Ok(Mapping::new()),
        _ => Err(SettingsFileError::NotAMapping {
            path: path.to_path_buf(),
        }),
    }
}

/// Like [`load_settings_file`], but a bad file only costs a warning
pub fn load_settings_or_empty(path: &Path) -> Mapping {
    load_settings_file(path).unwrap_or_else(|e| {
        warn!("Error loading config file: {e}");
        Mapping::new()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn yaml_file(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_reads_mapping() {
        let file = yaml_file("debug_mode: true\noutput_directory: out\n");
        let mapping = load_settings_file(file.path()).unwrap();
        assert_eq!(mapping.get("debug_mode"), Some(&Value::Bool(true)));
        assert_eq!(mapping.get("output_directory").and_then(Value::as_str), Some("out"));
    }

    #[test]
    fn test_empty_document_is_empty_mapping() {
        let file = yaml_file("");
        assert!(load_settings_file(file.path()).unwrap().is_empty());
    }

    #[test]
    fn test_scalar_document_rejected() {
        let file = yaml_file("just a string");
        assert!(matches!(
            load_settings_file(file.path()),
            Err(SettingsFileError::NotAMapping { .. })
        ));
    }

    #[test]
    fn test_malformed_yaml_degrades_to_empty() {
        let file = yaml_file("debug_mode: [unclosed");
        assert!(load_settings_file(file.path()).is_err());
        assert!(load_settings_or_empty(file.path()).is_empty());
    }

    #[test]
    fn test_missing_file_degrades_to_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.yaml");
        assert!(matches!(
            load_settings_file(&path),
            Err(SettingsFileError::Read { .. })
        ));
        assert!(load_settings_or_empty(&path).is_empty());
    }
}
