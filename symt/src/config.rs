//! Configuration module for the symt CLI.
//!
//! Loads `symt.toml`, which can override the identifiers used by
//! `symt check`.

use dirs::{config_dir, home_dir};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{Result, SymtError};

/// Default configuration file name.
pub const CONFIG_FILE_NAME: &str = "symt.toml";

/// Application configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Config {
    /// Global verbose setting.
    #[serde(default)]
    pub verbose: bool,

    /// Self-check cases.
    #[serde(default)]
    pub check: CheckConfig,
}

/// Identifiers exercised by the self-check.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CheckConfig {
    /// Identifiers that must encode exactly and decode unchanged.
    #[serde(default = "default_round_trip")]
    pub round_trip: Vec<String>,

    /// Identifiers that must be rejected.
    #[serde(default = "default_invalid")]
    pub invalid: Vec<String>,

    /// Identifiers that must encode lossily, deterministically and
    /// idempotently.
    #[serde(default = "default_lossy")]
    pub lossy: Vec<String>,
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn default_round_trip() -> Vec<String> {
    strings(&["", "hello", "abyz019_AZ", "0123456789"])
}

fn default_invalid() -> Vec<String> {
    strings(&["!@#$#%", "hi there", "Mwahaha!!!"])
}

fn default_lossy() -> Vec<String> {
    strings(&[
        "0123456789A",
        "abcdefghijklmnopqrstuvwxyz",
        "ABCDEFGHIJKLMNOPQRSTUVWXYZ",
        "abcdefghijklmnopqrstuvwxyz0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ",
    ])
}

impl Default for CheckConfig {
    fn default() -> Self {
        Self {
            round_trip: default_round_trip(),
            invalid: default_invalid(),
            lossy: default_lossy(),
        }
    }
}

impl Config {
    /// Load configuration from the default location.
    ///
    /// Searches the current directory, then `~/.config/symt/`, then the
    /// system configuration directory. Falls back to defaults.
    pub fn load() -> Result<Self> {
        match Self::find_config_file() {
            Some(path) => Self::load_from_path(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from a specific path.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(SymtError::Config(format!(
                "Configuration file not found: {}",
                path.display()
            )));
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)
            .map_err(|e| SymtError::Config(format!("Failed to parse configuration: {}", e)))?;

        tracing::debug!("loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Save configuration to a specific path.
    pub fn save_to_path(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self).map_err(|e| {
            SymtError::Config(format!("Failed to serialize configuration: {}", e))
        })?;

        std::fs::write(path, content)?;
        Ok(())
    }

    fn find_config_file() -> Option<PathBuf> {
        let local = PathBuf::from(CONFIG_FILE_NAME);
        if local.exists() {
            return Some(local);
        }

        home_dir()
            .map(|dir| dir.join(".config").join("symt").join(CONFIG_FILE_NAME))
            .filter(|path| path.exists())
            .or_else(|| {
                config_dir()
                    .map(|dir| dir.join("symt").join(CONFIG_FILE_NAME))
                    .filter(|path| path.exists())
            })
    }
}
