/// Application configuration management
/// Stores user preferences in ~/.config/cloudmon/config.toml

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file")]
    Io(#[from] std::io::Error),
    #[error("config file is not valid TOML")]
    Parse(#[from] toml::de::Error),
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct AppConfig {
    pub default_time_range: Option<String>,
}

impl AppConfig {
    /// Get config file path
    pub fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("could not determine the user config directory")?
            .join("cloudmon");

        fs::create_dir_all(&config_dir).context("failed to create config directory")?;

        Ok(config_dir.join("config.toml"))
    }

    /// Load configuration from file
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;

        if !path.exists() {
            return Ok(Self::default());
        }

        Self::load_from(&path).with_context(|| format!("failed to load {}", path.display()))
    }

    fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path)?;
        Ok(toml::from_str(&contents)?)
    }

    /// Save configuration to file
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;
        self.save_to(&path)
    }

    fn save_to(&self, path: &Path) -> Result<()> {
        let contents = toml::to_string_pretty(self).context("failed to serialize config")?;

        fs::write(path, contents).context("failed to write config file")?;

        Ok(())
    }

    /// Set and save the default time range
    pub fn set_default_time_range(&mut self, range: &str) -> Result<()> {
        self.default_time_range = Some(range.to_string());
        self.save()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let config = AppConfig {
            default_time_range: Some("7d".to_string()),
        };
        config.save_to(&path).unwrap();

        let loaded = AppConfig::load_from(&path).unwrap();
        assert_eq!(loaded.default_time_range.as_deref(), Some("7d"));
    }

    #[test]
    fn test_invalid_toml_is_a_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "default_time_range = [").unwrap();

        match AppConfig::load_from(&path) {
            Err(ConfigError::Parse(_)) => {}
            other => panic!("expected parse error, got {:?}", other),
        }
    }
}
