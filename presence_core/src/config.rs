//! Configuration file support.
//!
//! Configuration is loaded from `$XDG_CONFIG_HOME/presence/config.toml`.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Application configuration
#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub validation: ValidationConfig,

    #[serde(default)]
    pub prompt: PromptConfig,
}

/// Validation behavior configuration
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ValidationConfig {
    /// Check each schedule for self-overlapping intervals before
    /// computing; the CLI flag overrides this
    #[serde(default = "default_check_overlaps")]
    pub check_overlaps: bool,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            check_overlaps: default_check_overlaps(),
        }
    }
}

/// Interactive prompt configuration
#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct PromptConfig {
    /// Answer the self-overlap prompt with "continue" instead of
    /// asking; useful for scripting
    #[serde(default)]
    pub assume_continue: bool,
}

fn default_check_overlaps() -> bool {
    true
}

impl Config {
    /// Load configuration from the standard config path
    pub fn load() -> Result<Self> {
        let config_path = Self::default_config_path();
        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            tracing::info!(
                "No config file found at {:?}, using defaults",
                config_path
            );
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        tracing::info!("Loaded config from {:?}", path);
        Ok(config)
    }

    /// Get the default config file path
    pub fn default_config_path() -> PathBuf {
        let base = dirs::config_dir().unwrap_or_else(|| {
            let home = std::env::var("HOME").expect("HOME environment variable not set");
            PathBuf::from(home).join(".config")
        });
        base.join("presence").join("config.toml")
    }

    /// Save the current configuration to the default path
    pub fn save(&self) -> Result<()> {
        let config_path = Self::default_config_path();
        self.save_to(&config_path)
    }

    /// Save the current configuration to a specific path
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(path, contents)?;
        tracing::info!("Saved config to {:?}", path);
        Ok(())
    }
}
