//! Configuration management for Quill
//!
//! Optional user preferences. A missing file means defaults, and the defaults
//! are the editor's stock behavior.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Quill configuration
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// How long a key read waits before polling again, in milliseconds.
    /// The terminal works in tenths of a second, so this is rounded up.
    #[serde(default = "default_read_timeout_ms")]
    pub read_timeout_ms: u64,

    /// Append log records here instead of stderr
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_file: Option<PathBuf>,
}

fn default_read_timeout_ms() -> u64 {
    100
}

impl Default for Config {
    fn default() -> Self {
        Self {
            read_timeout_ms: default_read_timeout_ms(),
            log_file: None,
        }
    }
}

impl Config {
    /// Get config directory path (~/.quill)
    pub fn config_dir() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(".quill"))
    }

    /// Get config file path (~/.quill/config.toml)
    pub fn config_path() -> Option<PathBuf> {
        Self::config_dir().map(|dir| dir.join("config.toml"))
    }

    /// Load config from the default location, or return default if not found
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load config from `path`, or return default if the file does not exist
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;

        toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config from {}", path.display()))
    }

    pub fn read_timeout(&self) -> Duration {
        Duration::from_millis(self.read_timeout_ms)
    }
}
