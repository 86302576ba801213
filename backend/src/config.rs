//! # Scheduler Configuration
//!
//! Optional YAML file read once at startup. Every field has a default, so a
//! missing file (or a file that sets only some fields) is fine.
//!
//! ```yaml
//! first_slot: "08:00"
//! last_slot: "17:30"
//! slot_minutes: 30
//! seed_sample_data: true
//! month_preview_limit: 2
//! ```

use chrono::NaiveTime;
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Environment variable that points at the config file
pub const CONFIG_PATH_ENV: &str = "SCHEDULER_CONFIG";

/// Config file used when neither an argument nor the environment names one
pub const DEFAULT_CONFIG_FILE: &str = "scheduler_config.yaml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SchedulerConfig {
    /// First bookable slot, `HH:MM`
    pub first_slot: String,
    /// Last bookable slot, `HH:MM`
    pub last_slot: String,
    /// Distance between consecutive slots
    pub slot_minutes: u32,
    /// Load the two sample appointments at startup
    pub seed_sample_data: bool,
    /// Appointments listed inside a month cell before "+N more"
    pub month_preview_limit: usize,
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            first_slot: "08:00".to_string(),
            last_slot: "17:30".to_string(),
            slot_minutes: 30,
            seed_sample_data: true,
            month_preview_limit: 2,
        }
    }
}

impl SchedulerConfig {
    /// Load config from `path`, falling back to defaults when the file does not exist
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            info!("No config file at {:?}, using defaults", path);
            return Ok(Self::default());
        }

        let yaml_content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_yaml(&yaml_content)?;
        debug!("Loaded scheduler config from {:?}: {:?}", path, config);
        Ok(config)
    }

    /// Parse and validate a YAML document
    pub fn from_yaml(yaml_content: &str) -> Result<Self, ConfigError> {
        let config: SchedulerConfig = serde_yaml::from_str(yaml_content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_yaml(&self) -> Result<String, ConfigError> {
        Ok(serde_yaml::to_string(self)?)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let first = parse_slot(&self.first_slot)?;
        let last = parse_slot(&self.last_slot)?;

        if self.slot_minutes == 0 || self.slot_minutes > 24 * 60 {
            return Err(ConfigError::Invalid(format!(
                "slot_minutes must be between 1 and 1440, got {}",
                self.slot_minutes
            )));
        }
        if last < first {
            return Err(ConfigError::Invalid(format!(
                "last_slot {} is before first_slot {}",
                self.last_slot, self.first_slot
            )));
        }

        Ok(())
    }
}

/// Parse an `HH:MM` slot label
pub fn parse_slot(label: &str) -> Result<NaiveTime, ConfigError> {
    NaiveTime::parse_from_str(label, "%H:%M")
        .map_err(|_| ConfigError::Invalid(format!("'{}' is not a valid HH:MM time", label)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config_is_valid() {
        let config = SchedulerConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.first_slot, "08:00");
        assert_eq!(config.last_slot, "17:30");
        assert_eq!(config.slot_minutes, 30);
    }

    #[test]
    fn test_partial_yaml_uses_defaults() {
        let config = SchedulerConfig::from_yaml("seed_sample_data: false\n").unwrap();
        assert!(!config.seed_sample_data);
        assert_eq!(config.month_preview_limit, 2);
        assert_eq!(config.first_slot, "08:00");
    }

    #[test]
    fn test_yaml_round_trip() {
        let config = SchedulerConfig {
            first_slot: "07:00".to_string(),
            last_slot: "12:00".to_string(),
            slot_minutes: 15,
            seed_sample_data: false,
            month_preview_limit: 3,
        };
        let yaml = config.to_yaml().unwrap();
        assert_eq!(SchedulerConfig::from_yaml(&yaml).unwrap(), config);
    }

    #[test]
    fn test_rejects_inverted_range() {
        let result = SchedulerConfig::from_yaml("first_slot: \"17:00\"\nlast_slot: \"08:00\"\n");
        assert!(matches!(result, Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_rejects_bad_slot_label() {
        let result = SchedulerConfig::from_yaml("first_slot: \"8am\"\n");
        assert!(matches!(result, Err(ConfigError::Invalid(_))));

        let result = SchedulerConfig::from_yaml("slot_minutes: 0\n");
        assert!(matches!(result, Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_rejects_malformed_yaml() {
        let result = SchedulerConfig::from_yaml("slot_minutes: [oops");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_load_missing_file_returns_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("missing.yaml");

        let config = SchedulerConfig::load(&path).unwrap();
        assert_eq!(config, SchedulerConfig::default());
    }

    #[test]
    fn test_load_from_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(DEFAULT_CONFIG_FILE);
        fs::write(&path, "slot_minutes: 60\nmonth_preview_limit: 4\n").unwrap();

        let config = SchedulerConfig::load(&path).unwrap();
        assert_eq!(config.slot_minutes, 60);
        assert_eq!(config.month_preview_limit, 4);
    }
}
