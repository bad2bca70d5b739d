//! Runtime configuration.
//!
//! Read once at startup from `--config`, else [`DEFAULT_CONFIG_PATH`] when it
//! exists, else defaults. Command-line flags override what is loaded here.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

pub const DEFAULT_CONFIG_PATH: &str = "/etc/macveil/config.json";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub enabled: bool,
    /// Default `env_logger` filter when `RUST_LOG` is unset
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            level: "info".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MacveilConfig {
    pub logging: LoggingConfig,
    /// Default admin-bit choice for the random and same-vendor policies
    pub preserve_universal: bool,
    /// Cycle the link around every address change
    pub cycle_link: bool,
}

impl MacveilConfig {
    /// Load from `explicit`, or from the default location if it exists.
    ///
    /// # Errors
    ///
    /// An explicit path that cannot be read, or any file that does not parse.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => Self::from_file(path),
            None => {
                let default = PathBuf::from(DEFAULT_CONFIG_PATH);
                if default.exists() {
                    Self::from_file(&default)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        serde_json::from_str(&raw).with_context(|| format!("parsing config {}", path.display()))
    }
}

/// Logging is on unless `MACVEIL_LOGS` is set to an off value.
pub fn logs_enabled() -> bool {
    !logs_disabled()
}

pub fn logs_disabled() -> bool {
    matches!(
        env::var("MACVEIL_LOGS")
            .map(|v| v.trim().to_ascii_lowercase())
            .as_deref(),
        Ok("0" | "false" | "off" | "no")
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let cfg = MacveilConfig::default();
        assert!(cfg.logging.enabled);
        assert_eq!(cfg.logging.level, "info");
        assert!(!cfg.preserve_universal);
        assert!(!cfg.cycle_link);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.json");
        fs::write(&path, r#"{"cycle_link": true, "logging": {"level": "debug"}}"#).unwrap();

        let cfg = MacveilConfig::load(Some(&path)).unwrap();
        assert!(cfg.cycle_link);
        assert!(!cfg.preserve_universal);
        assert!(cfg.logging.enabled);
        assert_eq!(cfg.logging.level, "debug");
    }

    #[test]
    fn test_malformed_file_is_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.json");
        fs::write(&path, "{ not json").unwrap();

        let err = MacveilConfig::load(Some(&path)).unwrap_err();
        assert!(format!("{:#}", err).contains("parsing config"));
    }

    #[test]
    fn test_missing_explicit_file_is_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("absent.json");
        assert!(MacveilConfig::load(Some(&path)).is_err());
    }
}
