//! Configuration management for taskdeck.
//!
//! This module handles the `config.yaml` file in the data directory, which
//! stores front-end preferences that are not app settings: the urgency new
//! tasks default to, whether operation logging is enabled, and an optional
//! override for where the task database lives.

use crate::error::Result;
use crate::paths;
use crate::tasks::Urgency;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Front-end configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct AppConfig {
    /// Whether mutating operations are appended to the activity log.
    #[serde(default)]
    pub debug_logging: bool,

    /// Urgency assigned to new tasks when none is given.
    #[serde(default)]
    pub default_urgency: Urgency,

    /// Where the task database lives. Defaults to the config's own
    /// directory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_dir: Option<PathBuf>,
}

impl AppConfig {
    /// Load config from a data directory, returning `None` if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be parsed.
    pub fn load_from(data_dir: &Path) -> Result<Option<Self>> {
        let config_path = Self::config_path(data_dir);
        if !config_path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(&config_path)?;
        let config: Self = serde_yaml::from_str(&content)?;
        Ok(Some(config))
    }

    /// Save config to a data directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub fn save_to(&self, data_dir: &Path) -> Result<()> {
        let config_path = Self::config_path(data_dir);

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_yaml::to_string(self)?;
        std::fs::write(&config_path, content)?;
        Ok(())
    }

    /// Get the config file path for a data directory.
    #[must_use]
    pub fn config_path(data_dir: &Path) -> PathBuf {
        data_dir.join(paths::CONFIG_FILENAME)
    }

    /// Resolve where the database lives, honoring the override.
    #[must_use]
    pub fn resolved_data_dir(&self, config_dir: &Path) -> PathBuf {
        self.data_dir.clone().unwrap_or_else(|| config_dir.to_path_buf())
    }
}

/// Ensure config exists in a data directory, creating it with defaults if
/// not. Returns the config (either loaded or newly created).
///
/// # Errors
///
/// Returns an error if config cannot be loaded or saved.
pub fn ensure_config_in(data_dir: &Path) -> Result<AppConfig> {
    if let Some(config) = AppConfig::load_from(data_dir)? {
        return Ok(config);
    }

    let config = AppConfig::default();
    config.save_to(data_dir)?;
    Ok(config)
}
