//! Application configuration.
//!
//! Only display preferences live here. Credentials and limits are build-time
//! constants.

use crate::error::WidgetError;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    /// Start with failure injection enabled.
    pub failure_injection: bool,
    /// Paint a dark background behind the UI.
    pub with_background_color: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            failure_injection: false,
            with_background_color: true,
        }
    }
}

impl Config {
    /// Create Config with the given preferences.
    pub fn new(failure_injection: bool, with_background_color: bool) -> Self {
        Config {
            failure_injection,
            with_background_color,
        }
    }

    /// Loads configuration from a JSON file at the given path.
    ///
    /// # Errors
    /// Returns an error if reading from file fails or JSON is invalid.
    pub fn load_from_file(path: &Path) -> Result<Self, WidgetError> {
        let buf = fs::read(path)?;
        let config: Config = serde_json::from_slice(&buf)?;
        Ok(config)
    }

    /// Loads configuration, falling back to defaults when the file does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, WidgetError> {
        if !path.exists() {
            log::debug!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        Self::load_from_file(path)
    }

    /// Saves the configuration to a JSON file at the given path.
    ///
    /// Directories will be created if they don't exist. This method overwrites existing files.
    #[allow(unused)]
    pub fn save(&self, path: &Path) -> Result<(), WidgetError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }
}

/// Default config location: `~/.login-lockout/config.json`.
pub fn get_config_path() -> Result<PathBuf, WidgetError> {
    let home = home::home_dir().ok_or(WidgetError::NoHomeDir)?;
    Ok(home.join(".login-lockout").join("config.json"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use std::io::Write;
    use tempfile::tempdir;

    #[test]
    // Loading a saved configuration file should return the same configuration.
    fn test_load_recovers_saved_config() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");

        let config = Config::new(true, false);
        config.save(&path).unwrap();

        let loaded_config = Config::load_from_file(&path).unwrap();
        assert_eq!(config, loaded_config);
    }

    #[test]
    // Saving a configuration should create directories if they don't exist.
    fn test_save_creates_directories() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nonexistent_dir").join("config.json");

        let result = Config::default().save(&path);

        assert!(result.is_ok(), "Failed to save config");
        assert!(
            path.parent().unwrap().exists(),
            "Parent directory does not exist"
        );
    }

    #[test]
    // A missing file yields defaults.
    fn test_missing_file_uses_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("absent.json");

        let config = Config::load_or_default(&path).unwrap();
        assert_eq!(config, Config::default());
        assert!(config.with_background_color);
        assert!(!config.failure_injection);
    }

    #[test]
    // Fields left out of the file take their default values.
    fn test_partial_file_fills_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{ "failure_injection": true }"#).unwrap();

        let config = Config::load_or_default(&path).unwrap();
        assert!(config.failure_injection);
        assert!(config.with_background_color);
    }

    #[test]
    // Loading an invalid JSON file should return an error.
    fn test_load_rejects_invalid_json() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("invalid_config.json");

        let mut file = File::create(&path).unwrap();
        writeln!(file, "invalid json").unwrap();

        let result = Config::load_or_default(&path);
        assert!(matches!(result, Err(WidgetError::Config(_))));
    }
}
