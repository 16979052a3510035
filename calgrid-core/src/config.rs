//! Global calgrid configuration.

use std::path::PathBuf;

use serde::Deserialize;

use crate::error::{CalGridError, CalGridResult};

fn default_calendar_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("calgrid")
}

/// Global configuration at ~/.config/calgrid/config.toml
#[derive(Deserialize, Clone)]
pub struct GlobalConfig {
    /// Directory holding the event documents.
    #[serde(default = "default_calendar_dir")]
    pub calendar_dir: PathBuf,
}

impl Default for GlobalConfig {
    fn default() -> Self {
        GlobalConfig {
            calendar_dir: default_calendar_dir(),
        }
    }
}

impl GlobalConfig {
    pub fn config_path() -> CalGridResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| CalGridError::Config("Could not determine config directory".into()))?
            .join("calgrid");

        Ok(config_dir.join("config.toml"))
    }

    /// Load the config file, falling back to defaults when it doesn't exist.
    pub fn load() -> CalGridResult<Self> {
        let path = Self::config_path()?;

        if !path.exists() {
            return Ok(GlobalConfig::default());
        }

        let content = std::fs::read_to_string(&path)?;
        toml::from_str(&content).map_err(|e| CalGridError::Config(e.to_string()))
    }
}
