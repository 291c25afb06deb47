//! Project settings persisted in `sheetpack.yaml`.
//!
//! The config file is optional; a missing file means defaults. CLI
//! arguments always win over config values.

use crate::error::SheetpackResult;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Default config file name, looked up in the working directory
pub const CONFIG_FILE_NAME: &str = "sheetpack.yaml";

/// Persisted conversion settings.
///
/// ```yaml
/// input_path: data/sheets
/// output_path: assets/data
/// only_modified_files: true
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Directory scanned for workbook files
    pub input_path: PathBuf,
    /// Directory receiving the per-sheet JSON files
    pub output_path: PathBuf,
    /// Skip files whose outputs are already up to date
    pub only_modified_files: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from("."),
            output_path: PathBuf::from("."),
            only_modified_files: false,
        }
    }
}

impl Settings {
    /// Load settings from `sheetpack.yaml` in the working directory,
    /// falling back to defaults if the file does not exist.
    pub fn load() -> SheetpackResult<Self> {
        Self::load_from(Path::new(CONFIG_FILE_NAME))
    }

    /// Load settings from an explicit path; a missing file means defaults.
    pub fn load_from(path: &Path) -> SheetpackResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        let settings = serde_yaml::from_str(&content)?;
        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults_when_file_missing() {
        let settings = Settings::load_from(Path::new("no/such/sheetpack.yaml")).unwrap();
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.input_path, PathBuf::from("."));
        assert!(!settings.only_modified_files);
    }

    #[test]
    fn test_load_full_config() {
        let yaml = "input_path: data/sheets\noutput_path: assets/data\nonly_modified_files: true\n";
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(yaml.as_bytes()).unwrap();

        let settings = Settings::load_from(file.path()).unwrap();
        assert_eq!(settings.input_path, PathBuf::from("data/sheets"));
        assert_eq!(settings.output_path, PathBuf::from("assets/data"));
        assert!(settings.only_modified_files);
    }

    #[test]
    fn test_load_partial_config_fills_defaults() {
        let yaml = "input_path: data/sheets\n";
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(yaml.as_bytes()).unwrap();

        let settings = Settings::load_from(file.path()).unwrap();
        assert_eq!(settings.input_path, PathBuf::from("data/sheets"));
        assert_eq!(settings.output_path, PathBuf::from("."));
        assert!(!settings.only_modified_files);
    }

    #[test]
    fn test_load_malformed_config_is_error() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"input_path: [unclosed").unwrap();
        assert!(Settings::load_from(file.path()).is_err());
    }
}
